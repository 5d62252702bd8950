//! Game configuration.
//!
//! A session is configured at startup by providing:
//! - `PlayerKind` per side: who makes the decisions
//! - whether undo/redo is offered before each turn
//! - whether the score line is shown
//! - the RNG seed for automated strategies

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::side::{Side, SideMap};

/// Which decision strategy controls a side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Prompts for worker, move and build on the input stream.
    #[default]
    Human,
    /// Picks uniformly among legal choices.
    Random,
    /// Greedy one-ply move scorer.
    Heuristic,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            "heuristic" => Ok(PlayerKind::Heuristic),
            other => Err(format!(
                "unknown player type {:?} (expected human, random or heuristic)",
                other
            )),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Random => f.write_str("random"),
            PlayerKind::Heuristic => f.write_str("heuristic"),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strategy kind per side.
    pub players: SideMap<PlayerKind>,

    /// Offer undo/redo/next before every turn.
    pub undo_redo: bool,

    /// Print the active side's score triple with the turn banner.
    pub show_score: bool,

    /// Seed for the random and heuristic strategies.
    /// `None` draws one from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: SideMap::with_value(PlayerKind::Human),
            undo_redo: false,
            show_score: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the strategy kind for one side.
    #[must_use]
    pub fn with_player(mut self, side: Side, kind: PlayerKind) -> Self {
        self.players[side] = kind;
        self
    }

    /// Enable or disable undo/redo.
    #[must_use]
    pub fn with_undo_redo(mut self, enabled: bool) -> Self {
        self.undo_redo = enabled;
        self
    }

    /// Enable or disable the score line.
    #[must_use]
    pub fn with_score(mut self, enabled: bool) -> Self {
        self.show_score = enabled;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether any side needs the input stream.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.players.iter().any(|(_, &kind)| kind == PlayerKind::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.players[Side::White], PlayerKind::Human);
        assert_eq!(config.players[Side::Blue], PlayerKind::Human);
        assert!(!config.undo_redo);
        assert!(!config.show_score);
        assert_eq!(config.seed, None);
        assert!(config.is_interactive());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_player(Side::White, PlayerKind::Random)
            .with_player(Side::Blue, PlayerKind::Heuristic)
            .with_undo_redo(true)
            .with_seed(7);

        assert_eq!(config.players[Side::White], PlayerKind::Random);
        assert_eq!(config.players[Side::Blue], PlayerKind::Heuristic);
        assert!(config.undo_redo);
        assert_eq!(config.seed, Some(7));
        assert!(!config.is_interactive());
    }

    #[test]
    fn test_player_kind_parsing() {
        assert_eq!("random".parse::<PlayerKind>(), Ok(PlayerKind::Random));
        assert_eq!("heuristic".parse::<PlayerKind>(), Ok(PlayerKind::Heuristic));
        assert_eq!("human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert!("Random".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_score(true).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seed, Some(3));
        assert!(deserialized.show_score);
    }
}
