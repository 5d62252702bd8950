//! Interactive strategy reading its decisions from the console.

use crate::core::{Direction, GameState, PlayerKind, RulesError, Side, Turn, WorkerLabel};
use crate::game::{Console, GameError};

use super::Strategy;

const WORKER_PROMPT: &str = "Select a worker to move";
const MOVE_PROMPT: &str = "Select a direction to move (n, ne, e, se, s, sw, w, nw)";
const BUILD_PROMPT: &str = "Select a direction to build (n, ne, e, se, s, sw, w, nw)";

/// Prompts for a worker, a move and a build until each is accepted.
///
/// The move is tried on a scratch copy of the state so the build prompt can
/// be validated against the post-move board; the live state is only touched
/// by the session once the full turn is known.
#[derive(Clone, Debug, Default)]
pub struct HumanStrategy;

impl HumanStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ask(console: &mut dyn Console, prompt: &str) -> Result<String, GameError> {
        console.read_line(prompt)?.ok_or(GameError::InputClosed)
    }

    fn select_worker(
        state: &GameState,
        side: Side,
        console: &mut dyn Console,
    ) -> Result<WorkerLabel, GameError> {
        loop {
            let line = Self::ask(console, WORKER_PROMPT)?;
            match state.workers.select(side, line.trim()) {
                Ok(label) if state.moves_for(label).is_empty() => {
                    console.write_line("That worker cannot move")?;
                }
                Ok(label) => return Ok(label),
                Err(RulesError::NotYourWorker(_)) => console.write_line("That is not your worker")?,
                Err(_) => console.write_line("Not a valid worker")?,
            }
        }
    }

    fn select_move(
        scratch: &mut GameState,
        label: WorkerLabel,
        console: &mut dyn Console,
    ) -> Result<Direction, GameError> {
        loop {
            let line = Self::ask(console, MOVE_PROMPT)?;
            let token = line.trim();
            match scratch.board.move_worker(token, &mut scratch.workers[label]) {
                Ok(direction) => return Ok(direction),
                Err(RulesError::IllegalMove(_)) => {
                    console.write_line(&format!("Cannot move {}", token))?;
                }
                Err(_) => console.write_line("Not a valid direction")?,
            }
        }
    }

    fn select_build(
        scratch: &mut GameState,
        label: WorkerLabel,
        console: &mut dyn Console,
    ) -> Result<Direction, GameError> {
        loop {
            let line = Self::ask(console, BUILD_PROMPT)?;
            let token = line.trim();
            match scratch.board.build(token, &scratch.workers[label]) {
                Ok(direction) => return Ok(direction),
                Err(RulesError::IllegalMove(_)) => {
                    console.write_line(&format!("Cannot build {}", token))?;
                }
                Err(_) => console.write_line("Not a valid direction")?,
            }
        }
    }
}

impl Strategy for HumanStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn decide(
        &mut self,
        state: &GameState,
        side: Side,
        console: &mut dyn Console,
    ) -> Result<Turn, GameError> {
        let worker = Self::select_worker(state, side, console)?;

        let mut scratch = state.clone();
        let move_dir = Self::select_move(&mut scratch, worker, console)?;
        let build_dir = Self::select_build(&mut scratch, worker, console)?;

        Ok(Turn::new(worker, move_dir, build_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::game::IoConsole;
    use std::io::Cursor;

    fn run(input: &str, state: &GameState, side: Side) -> (Result<Turn, GameError>, String) {
        let mut console = IoConsole::new(Cursor::new(input.to_string()), Vec::new());
        let result = HumanStrategy::new().decide(state, side, &mut console);
        let (_, output) = console.into_parts();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_valid_turn() {
        let state = GameState::new();
        let (turn, output) = run("A\nn\ne\n", &state, Side::White);

        assert_eq!(turn.unwrap(), Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        assert_eq!(output, format!("{}\n{}\n{}\n", WORKER_PROMPT, MOVE_PROMPT, BUILD_PROMPT));
    }

    #[test]
    fn test_reprompts_on_bad_worker() {
        let state = GameState::new();
        let (turn, output) = run("Q\nY\nB\ns\nn\n", &state, Side::White);

        assert_eq!(turn.unwrap().worker, WorkerLabel::B);
        assert!(output.contains("Not a valid worker\n"));
        assert!(output.contains("That is not your worker\n"));
    }

    #[test]
    fn test_reprompts_on_bad_directions() {
        let mut heights = [[0u8; 5]; 5];
        heights[2][1] = 2;
        let state = GameState::with_layout(
            heights,
            [
                (WorkerLabel::A, Position::new(3, 1)),
                (WorkerLabel::B, Position::new(1, 3)),
                (WorkerLabel::Y, Position::new(1, 1)),
                (WorkerLabel::Z, Position::new(3, 3)),
            ],
        )
        .unwrap();

        // North is too tall, "up" is not a direction; the build onto A's
        // old cell after moving east is fine, building onto Z is not.
        let (turn, output) = run("A\nup\nn\ne\ne\nw\n", &state, Side::White);

        assert_eq!(turn.unwrap(), Turn::new(WorkerLabel::A, Direction::E, Direction::W));
        assert!(output.contains("Not a valid direction\n"));
        assert!(output.contains("Cannot move n\n"));
        assert!(output.contains("Cannot build e\n"));
    }

    #[test]
    fn test_live_state_untouched() {
        let state = GameState::new();
        let before = state.clone();
        let _ = run("A\nn\ne\n", &state, Side::White);
        assert_eq!(state, before);
    }

    #[test]
    fn test_input_closed() {
        let state = GameState::new();
        let (turn, _) = run("A\n", &state, Side::White);
        assert!(matches!(turn, Err(GameError::InputClosed)));
    }
}
