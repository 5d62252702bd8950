//! Turn coordinator.
//!
//! A `Session` owns the live state, the history, one strategy per side and
//! the console. Each iteration of [`Session::run`]:
//!
//! 1. prints the board and the turn banner
//! 2. checks for the end of the game
//! 3. if undo/redo is on, asks `undo, redo, or next`
//! 4. asks the active strategy for a turn and applies it
//! 5. hands the move to the other side

use tracing::info;

use crate::core::{GameConfig, GameRng, GameState, PlayerKind, Side, SideMap, Turn, TurnRecord};
use crate::history::History;
use crate::players::{build_strategy, Evaluation, Strategy};
use crate::rules::{self, GameResult};

use super::console::Console;
use super::error::GameError;

const HISTORY_PROMPT: &str = "undo, redo, or next";

/// One game between two strategies.
pub struct Session<C: Console> {
    state: GameState,
    history: History,
    strategies: SideMap<Box<dyn Strategy>>,
    to_move: Side,
    turn: u32,
    config: GameConfig,
    console: C,
    records: Vec<TurnRecord>,
}

impl<C: Console> Session<C> {
    /// Create a session with the strategies named in `config`.
    ///
    /// Each automated side gets its own RNG stream derived from the seed.
    pub fn new(config: GameConfig, console: C) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let strategies =
            SideMap::new(|side| build_strategy(config.players[side], rng.for_side(side)));
        Self::with_strategies(config, console, strategies)
    }

    /// Create a session with caller-supplied strategies.
    pub fn with_strategies(
        config: GameConfig,
        console: C,
        strategies: SideMap<Box<dyn Strategy>>,
    ) -> Self {
        Self {
            state: GameState::new(),
            history: History::new(),
            strategies,
            to_move: Side::White,
            turn: 1,
            config,
            console,
            records: Vec::new(),
        }
    }

    /// Start from `state` instead of the opening position.
    #[must_use]
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Side about to move.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every turn applied so far, in order, including ones later undone.
    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Whether the game is over before the side to move plays.
    #[must_use]
    pub fn check_end_of_game(&self) -> Option<GameResult> {
        rules::check_end_of_game(&self.state, self.to_move)
    }

    /// `Turn: <n>, <side> (<labels>)`, with the score triple when enabled.
    #[must_use]
    pub fn banner(&self) -> String {
        let mut line = format!("Turn: {}, {}", self.turn, self.to_move.describe());
        if self.config.show_score {
            let evaluation = Evaluation::current(&self.state, self.to_move);
            line.push_str(&format!(", {}", evaluation));
        }
        line
    }

    /// Ask the active strategy for a turn, apply it and pass the move.
    pub fn play_turn(&mut self) -> Result<Turn, GameError> {
        let side = self.to_move;
        let strategy = self.strategies.get_mut(side);
        let turn = strategy.decide(&self.state, side, &mut self.console)?;
        let automated = strategy.kind() != PlayerKind::Human;

        self.state.apply_turn(turn)?;
        info!(turn = self.turn, %side, %turn, "applied turn");

        if automated {
            self.console.write_line(&turn.to_string())?;
        }

        self.records.push(TurnRecord::new(side, self.turn, turn));
        self.to_move = side.other();
        self.turn += 1;
        Ok(turn)
    }

    /// Step back one turn. Returns `false` if there was nothing to undo.
    ///
    /// The restored state is validated before it replaces the live one, so
    /// on error the state, turn and side are all left as they were.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        if !self.history.undo(&mut self.state)? {
            return Ok(false);
        }
        self.turn = self.turn.saturating_sub(1).max(1);
        self.to_move = self.to_move.other();
        Ok(true)
    }

    /// Step forward one undone turn. Returns `false` if there was nothing
    /// to redo.
    pub fn redo(&mut self) -> Result<bool, GameError> {
        if !self.history.redo(&mut self.state)? {
            return Ok(false);
        }
        self.turn += 1;
        self.to_move = self.to_move.other();
        Ok(true)
    }

    /// Play until one side wins.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        loop {
            self.console.write_line(&self.state.board.to_string())?;
            let banner = self.banner();
            self.console.write_line(&banner)?;

            if let Some(result) = self.check_end_of_game() {
                self.console.write_line(&result.to_string())?;
                info!(
                    winner = %result.winner,
                    reason = ?result.reason,
                    turns = self.turn,
                    "game over"
                );
                return Ok(result);
            }

            if self.config.undo_redo {
                let choice = self
                    .console
                    .read_line(HISTORY_PROMPT)?
                    .ok_or(GameError::InputClosed)?;
                match choice.trim() {
                    "undo" => {
                        self.undo()?;
                        continue;
                    }
                    "redo" => {
                        self.redo()?;
                        continue;
                    }
                    _ => self.history.next(&self.state)?,
                }
            }

            self.play_turn()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, WorkerLabel};
    use crate::game::IoConsole;
    use std::io::Cursor;

    type TestConsole = IoConsole<Cursor<String>, Vec<u8>>;

    fn session(config: GameConfig, input: &str) -> Session<TestConsole> {
        Session::new(config, IoConsole::new(Cursor::new(input.to_string()), Vec::new()))
    }

    fn output(session: Session<TestConsole>) -> String {
        let (_, bytes) = session.into_console().into_parts();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_opening_banner() {
        let s = session(GameConfig::default(), "");
        assert_eq!(s.banner(), "Turn: 1, white (AB)");

        let s = session(GameConfig::default().with_score(true), "");
        assert_eq!(s.banner(), "Turn: 1, white (AB), (0, 2, 4)");
    }

    #[test]
    fn test_play_turn_swaps_sides() {
        let mut s = session(GameConfig::default(), "A\nn\ne\n");
        let turn = s.play_turn().unwrap();

        assert_eq!(turn, Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        assert_eq!(s.to_move(), Side::Blue);
        assert_eq!(s.turn(), 2);
        assert_eq!(s.records().len(), 1);
        assert_eq!(s.banner(), "Turn: 2, blue (YZ)");
    }

    #[test]
    fn test_automated_turn_is_echoed() {
        let config = GameConfig::default()
            .with_player(Side::White, PlayerKind::Random)
            .with_seed(4);
        let mut s = session(config, "");
        let turn = s.play_turn().unwrap();
        assert_eq!(output(s), format!("{}\n", turn));
    }

    #[test]
    fn test_failed_undo_keeps_turn_and_side() {
        use crate::core::Position;
        use crate::history::{HistoryError, Snapshot};

        let mut s = session(GameConfig::default(), "A\nn\ne\n");
        s.play_turn().unwrap();
        let live = s.state().clone();

        let mut broken = GameState::new();
        broken.board.set_occupant(Position::new(3, 3), None);
        s.history.push_undo(Snapshot::capture(&broken).unwrap());

        assert!(matches!(
            s.undo(),
            Err(GameError::History(HistoryError::Exhausted { discarded: 1 }))
        ));
        assert_eq!(s.state(), &live);
        assert_eq!((s.turn(), s.to_move()), (2, Side::Blue));
        assert!(!s.history().can_redo());
    }

    #[test]
    fn test_undo_redo_adjusts_turn() {
        let config = GameConfig::default().with_undo_redo(true);
        let mut s = session(config, "A\nn\ne\n");
        let opening = s.state().clone();

        s.history.next(&s.state).unwrap();
        s.play_turn().unwrap();
        let after = s.state().clone();

        assert!(s.undo().unwrap());
        assert_eq!(s.state(), &opening);
        assert_eq!((s.turn(), s.to_move()), (1, Side::White));

        assert!(s.redo().unwrap());
        assert_eq!(s.state(), &after);
        assert_eq!((s.turn(), s.to_move()), (2, Side::Blue));

        assert!(!s.redo().unwrap());
        assert_eq!((s.turn(), s.to_move()), (2, Side::Blue));
    }

    #[test]
    fn test_run_to_completion() {
        let config = GameConfig::default()
            .with_player(Side::White, PlayerKind::Heuristic)
            .with_player(Side::Blue, PlayerKind::Random)
            .with_seed(17);
        let mut s = session(config, "");
        let result = s.run().unwrap();

        let text = output(s);
        assert!(text.starts_with("+--+--+--+--+--+\n"));
        assert!(text.contains("Turn: 1, white (AB)\n"));
        assert!(text.ends_with(&format!("{}\n", result)));
    }

    #[test]
    fn test_history_prompt_eof() {
        let config = GameConfig::default()
            .with_player(Side::White, PlayerKind::Random)
            .with_player(Side::Blue, PlayerKind::Random)
            .with_undo_redo(true)
            .with_seed(1);
        let mut s = session(config, "");
        assert!(matches!(s.run(), Err(GameError::InputClosed)));
    }
}
