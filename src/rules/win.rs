//! Win condition checking for variable win-length lines

use crate::board::{Board, Cell, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the mark at `pos` completes a win-length run.
///
/// Assumes `pos` already holds `mark`; this function does not place it.
/// Each direction is two bounded scans (forward, then backward) sharing
/// one running count, each stopping at the first edge or foreign cell.
/// Cost is O(win_length) per direction, independent of board size, which
/// is what keeps repeated speculative checks in the selector affordable.
pub fn check_win(board: &Board, pos: Pos, mark: Cell) -> bool {
    let size = board.size();
    let need = board.win_length();
    for (dr, dc) in DIRECTIONS {
        let mut count = 1;
        for i in 1..need as i32 {
            match pos.step(dr, dc, i, size) {
                Some(next) if board.get(next) == mark => count += 1,
                _ => break,
            }
        }
        for i in 1..need as i32 {
            match pos.step(-dr, -dc, i, size) {
                Some(prev) if board.get(prev) == mark => count += 1,
                _ => break,
            }
        }
        if count >= need {
            return true;
        }
    }
    false
}
