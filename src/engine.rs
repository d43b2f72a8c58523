//! Engine facade: move computation under an optional deadline
//!
//! The engine ties the pieces together: it runs the heuristic selector,
//! optionally racing it against a wall-clock budget, and encodes the
//! chosen coordinate with the shared position codec. The budget is
//! advisory: if it fires first the selector is re-run synchronously so
//! that a move is always produced, and the abandoned worker result is
//! simply discarded (the worker owns its own copy of the board, so it
//! cannot touch shared state after abandonment).

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Cell, Pos};
use crate::codec::PositionCodec;
use crate::search::{select_move, Rule};

/// Result of a move computation with timing metadata.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen coordinate
    pub pos: Pos,
    /// Protocol encoding of the coordinate
    pub position: String,
    /// Selection rule that produced the move
    pub rule: Rule,
    /// Wall-clock time spent, in milliseconds
    pub time_ms: u64,
    /// True when the budget fired and the synchronous fallback answered
    pub deadline_missed: bool,
}

/// Move-selection engine.
///
/// Owns the position codec, the only state shared across commands;
/// everything else is rebuilt per command from the parsed board state.
#[derive(Debug, Default)]
pub struct Engine {
    codec: PositionCodec,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            codec: PositionCodec::new(),
        }
    }

    /// Compute the move for `player`, racing `budget` when one is given.
    ///
    /// Without a budget (or with a zero budget) the selector runs on the
    /// calling thread; its cost is bounded, so this is safe. With a
    /// budget, a worker thread owning a clone of the board races a
    /// deadline timer. Whichever finishes first wins; a missed deadline
    /// falls back to the same bounded selector run synchronously, so the
    /// caller always gets a move.
    pub fn compute_move(
        &self,
        board: &Board,
        player: Cell,
        budget: Option<Duration>,
    ) -> MoveResult {
        let start = Instant::now();
        let (selection, deadline_missed) = match budget {
            Some(limit) if !limit.is_zero() => {
                let (tx, rx) = mpsc::channel();
                let mut worker_board = board.clone();
                thread::spawn(move || {
                    // A dropped receiver turns this send into a no-op;
                    // the abandoned result is discarded either way.
                    let _ = tx.send(select_move(&mut worker_board, player));
                });
                match rx.recv_timeout(limit) {
                    Ok(selection) => (selection, false),
                    Err(_) => (select_move(&mut board.clone(), player), true),
                }
            }
            _ => (select_move(&mut board.clone(), player), false),
        };

        let position = self.codec.encode(board.size(), selection.pos);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            rule = ?selection.rule,
            %position,
            time_ms,
            deadline_missed,
            "move selected"
        );
        MoveResult {
            pos: selection.pos,
            position,
            rule: selection.rule,
            time_ms,
            deadline_missed,
        }
    }

    /// Shared position codec.
    #[inline]
    pub fn codec(&self) -> &PositionCodec {
        &self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronous_move_on_empty_board() {
        let engine = Engine::new();
        let board = Board::new(3, 3).unwrap();
        let result = engine.compute_move(&board, Cell::X, None);
        assert_eq!(result.position, "b2");
        assert_eq!(result.rule, Rule::Opening);
        assert!(!result.deadline_missed);
    }

    #[test]
    fn test_budget_still_produces_a_move() {
        let engine = Engine::new();
        let board = Board::new(19, 5).unwrap();
        // A 1ns budget all but guarantees the timer fires first; the
        // fallback must still answer with a valid in-bounds move.
        let result = engine.compute_move(&board, Cell::O, Some(Duration::from_nanos(1)));
        assert!(result.pos.row < 19 && result.pos.col < 19);
        assert_eq!(result.pos, Pos::new(9, 9));
    }

    #[test]
    fn test_generous_budget_uses_worker_result() {
        let engine = Engine::new();
        let board = Board::new(3, 3).unwrap();
        let result = engine.compute_move(&board, Cell::X, Some(Duration::from_secs(5)));
        assert_eq!(result.position, "b2");
        assert!(!result.deadline_missed);
    }

    #[test]
    fn test_zero_budget_means_no_race() {
        let engine = Engine::new();
        let board = Board::new(5, 3).unwrap();
        let result = engine.compute_move(&board, Cell::X, Some(Duration::ZERO));
        assert_eq!(result.position, "c3");
        assert!(!result.deadline_missed);
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let engine = Engine::new();
        let board = Board::from_state_str("X__/OO_/__X", 3).unwrap();
        let before = board.clone();
        let _ = engine.compute_move(&board, Cell::X, Some(Duration::from_millis(50)));
        assert_eq!(board, before);
    }
}
