//! Center-weighted heuristic move selection
//!
//! This is deliberately a shallow local policy, not a game-tree search:
//! it looks for one-move wins and blocks inside a fixed window around
//! the board center and otherwise spirals outward for the nearest empty
//! cell. Worst-case cost is O(win_length^2) probes, which keeps a move
//! answerable under a hard wall-clock budget.

use crate::board::{Board, Cell, Pos};
use crate::rules::check_win;

/// Which rule of the selection policy produced a move.
///
/// Rules are tried in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The exact center cell was free
    Opening,
    /// A cell in the center window completes our run
    WinningMove,
    /// A cell in the center window would complete the opponent's run
    BlockingMove,
    /// Nearest empty cell found by spiraling out from the center
    Spiral,
    /// No empty cell found; the top-left cell is returned regardless
    Fallback,
}

/// A selected move together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub pos: Pos,
    pub rule: Rule,
}

/// Pick a move for `player`.
///
/// Speculative placements made while probing are always reverted, so the
/// board is unchanged when this returns. The board is total-scan free:
/// only the center window and the spiral rings are ever visited.
pub fn select_move(board: &mut Board, player: Cell) -> Selection {
    let size = board.size();
    let center = Pos::new(size / 2, size / 2);

    if board.is_empty(center) {
        return Selection {
            pos: center,
            rule: Rule::Opening,
        };
    }

    // Window around the center where threats are checked. Computed once
    // and shared by the win and block scans.
    let radius = board.win_length();
    let lo = center.row.saturating_sub(radius);
    let hi = (size - 1).min(center.row + radius);

    for (mark, rule) in [
        (player, Rule::WinningMove),
        (player.opponent(), Rule::BlockingMove),
    ] {
        for i in lo..=hi {
            for j in lo..=hi {
                let pos = Pos::new(i, j);
                if board.is_empty(pos) && wins_if_placed(board, pos, mark) {
                    return Selection { pos, rule };
                }
            }
        }
    }

    // Spiral out from the center. Each ring rescans its interior rather
    // than walking only the perimeter; downstream consumers depend on
    // this exact visit order, so keep it.
    for r in 1..=(size / 2) as i32 {
        for i in -r..=r {
            for j in -r..=r {
                let row = center.row as i32 + i;
                let col = center.col as i32 + j;
                if Pos::is_valid(row, col, size) {
                    let pos = Pos::new(row as usize, col as usize);
                    if board.is_empty(pos) {
                        return Selection {
                            pos,
                            rule: Rule::Spiral,
                        };
                    }
                }
            }
        }
    }

    Selection {
        pos: Pos::new(0, 0),
        rule: Rule::Fallback,
    }
}

/// Place `mark` at `pos`, run the win check, and revert before returning.
fn wins_if_placed(board: &mut Board, pos: Pos, mark: Cell) -> bool {
    board.place(pos, mark);
    let wins = check_win(board, pos, mark);
    board.clear(pos);
    wins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_state(state: &str, win_length: usize) -> Board {
        Board::from_state_str(state, win_length).unwrap()
    }

    #[test]
    fn test_opening_plays_center() {
        for size in [1, 3, 4, 9, 10, 19] {
            let mut board = Board::new(size, 3).unwrap();
            let selection = select_move(&mut board, Cell::X);
            assert_eq!(selection.pos, Pos::new(size / 2, size / 2));
            assert_eq!(selection.rule, Rule::Opening);
        }
    }

    #[test]
    fn test_takes_winning_move() {
        // X about to complete the middle row of a 3x3
        let mut board = from_state("O__/XX_/__O", 3);
        let selection = select_move(&mut board, Cell::X);
        assert_eq!(selection.pos, Pos::new(1, 2));
        assert_eq!(selection.rule, Rule::WinningMove);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O threatens the middle row; X has no win anywhere
        let mut board = from_state("X__/OO_/__X", 3);
        let selection = select_move(&mut board, Cell::X);
        assert_eq!(selection.pos, Pos::new(1, 2));
        assert_eq!(selection.rule, Rule::BlockingMove);
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both sides threaten on the same 5x5 board; rule order must
        // pick our win, not the block.
        let mut board = from_state("5/XX1OO/2X2/2O2/5", 3);
        let selection = select_move(&mut board, Cell::X);
        assert_eq!(selection.rule, Rule::WinningMove);
        board.place(selection.pos, Cell::X);
        assert!(crate::rules::check_win(&board, selection.pos, Cell::X));
    }

    #[test]
    fn test_spiral_takes_nearest_empty() {
        // Center occupied, no threats: the radius-1 ring starts at the
        // cell above-left of center.
        let mut board = from_state("3/1X1/3", 3);
        let selection = select_move(&mut board, Cell::O);
        assert_eq!(selection.pos, Pos::new(0, 0));
        assert_eq!(selection.rule, Rule::Spiral);
    }

    #[test]
    fn test_spiral_scan_order_is_row_major_per_ring() {
        // Radius-1 ring with (2, 1) left empty: the ring is visited
        // row-major, so (2, 1) beats the empties at (2, 3) and (3, 2).
        let mut board = from_state("5/1XOX1/3O1/1X1X1/5", 5);
        board.place(Pos::new(2, 2), Cell::X);
        let selection = select_move(&mut board, Cell::O);
        assert_eq!(selection.pos, Pos::new(2, 1));
        assert_eq!(selection.rule, Rule::Spiral);
    }

    #[test]
    fn test_full_board_falls_back_to_origin() {
        let mut board = from_state("XOX/OXO/OXO", 3);
        let selection = select_move(&mut board, Cell::O);
        assert_eq!(selection.pos, Pos::new(0, 0));
        assert_eq!(selection.rule, Rule::Fallback);
    }

    #[test]
    fn test_board_is_unchanged_after_selection() {
        let mut board = from_state("X__/OO_/__X", 3);
        let before = board.clone();
        let _ = select_move(&mut board, Cell::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_threat_outside_window_is_invisible() {
        // Known scope trade-off: a threat far from the center window is
        // not seen, the spiral just takes the nearest empty cell.
        let mut board = Board::new(19, 3).unwrap();
        board.place(Pos::new(9, 9), Cell::X);
        board.place(Pos::new(0, 0), Cell::O);
        board.place(Pos::new(0, 1), Cell::O);
        let selection = select_move(&mut board, Cell::X);
        assert_eq!(selection.rule, Rule::Spiral);
        assert_eq!(selection.pos, Pos::new(8, 8));
    }
}
