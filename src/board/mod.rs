//! Board representation for the N-in-a-row engine

pub mod grid;


// Re-exports
pub use grid::Board;

/// Largest board edge the engine accepts.
pub const MAX_BOARD_SIZE: usize = 100;

/// Win-length used when a `move` command does not carry one.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Wire character for this cell.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `i` times along the direction `(dr, dc)`, or `None` when the
    /// result leaves a `size` x `size` board.
    #[inline]
    pub fn step(self, dr: i32, dc: i32, i: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr * i;
        let c = self.col as i32 + dc * i;
        if Self::is_valid(r, c, size) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}
