//! Session layer: the console, session errors and the turn coordinator.

pub mod console;
pub mod error;
pub mod session;

pub use console::{Console, IoConsole};
pub use error::GameError;
pub use session::Session;
