//! Variable-size grid with run-length state parsing

use super::{Cell, Pos, MAX_BOARD_SIZE};
use crate::codec::column_code;
use crate::error::Error;

const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Square game board built fresh for every `move` command.
///
/// Cells are mutated only during speculative lookahead inside the move
/// selector; every speculative placement is reverted before the selector
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// `win_length` is clamped to `1..=size` so the win invariant holds
    /// for any requested value.
    pub fn new(size: usize, win_length: usize) -> Result<Self, Error> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(Error::InvalidBoardState(format!(
                "unsupported board size {size} (max {MAX_BOARD_SIZE})"
            )));
        }
        Ok(Self {
            size,
            win_length: win_length.clamp(1, size),
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Parse the wire board-state notation.
    ///
    /// Rows are separated by `/`; within a row, `X` and `O` place marks,
    /// `_` is a single empty cell and a digit group is one greedy
    /// multi-digit empty-run count. The board size is inferred from the
    /// state itself: with two or more rows it is the row count, with a
    /// single row the cells are taken as a row-major dump of a square
    /// board whose edge is the square root of the cell count.
    pub fn from_state_str(state: &str, win_length: usize) -> Result<Self, Error> {
        let rows: Vec<&str> = state.split('/').collect();
        if rows.len() == 1 {
            let cells = expand_row(rows[0])?;
            let size = square_edge(cells.len()).ok_or_else(|| {
                Error::InvalidBoardState(format!(
                    "{} cells do not form a square board",
                    cells.len()
                ))
            })?;
            let mut board = Self::new(size, win_length)?;
            board.cells = cells;
            Ok(board)
        } else {
            let size = rows.len();
            let mut board = Self::new(size, win_length)?;
            for (r, row) in rows.iter().enumerate() {
                let cells = expand_row(row)?;
                if cells.len() != size {
                    return Err(Error::InvalidBoardState(format!(
                        "row {} decodes to {} columns, expected {}",
                        r + 1,
                        cells.len(),
                        size
                    )));
                }
                board.cells[r * size..(r + 1) * size].copy_from_slice(&cells);
            }
            Ok(board)
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a mark (no validation, used for speculative lookahead)
    #[inline]
    pub fn place(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    /// Remove a mark
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row * self.size + pos.col] = Cell::Empty;
    }

    /// Serialize back to the wire notation, with empty runs written as
    /// decimal counts.
    pub fn to_state_string(&self) -> String {
        let mut out = String::new();
        for r in 0..self.size {
            if r > 0 {
                out.push('/');
            }
            let mut run = 0;
            for c in 0..self.size {
                match self.get(Pos::new(r, c)) {
                    Cell::Empty => run += 1,
                    cell => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(cell.to_char());
                    }
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }
        out
    }

    /// Human-readable grid with column headers and row numbers.
    ///
    /// Diagnostic output only; not part of the wire protocol.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        out.push_str("  ");
        for col in 0..self.size {
            let code = column_code(col);
            out.push_str(&code);
            // Pad single-letter headers to the same width as two-letter ones
            out.push_str(if code.len() == 1 { "  " } else { " " });
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&format!("{:2}", row + 1));
            for col in 0..self.size {
                out.push(' ');
                out.push(self.get(Pos::new(row, col)).to_char());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

/// Decode one row of the state notation into its cells.
fn expand_row(row: &str) -> Result<Vec<Cell>, Error> {
    let mut cells = Vec::new();
    let mut chars = row.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '0'..='9' => {
                let mut count = ch as usize - '0' as usize;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    count = count * 10 + d as usize;
                    if count > MAX_CELLS {
                        return Err(Error::InvalidBoardState(format!(
                            "empty-run count {count} overflows the board"
                        )));
                    }
                    chars.next();
                }
                if cells.len() + count > MAX_CELLS {
                    return Err(Error::InvalidBoardState(format!(
                        "empty-run count {count} overflows the board"
                    )));
                }
                cells.resize(cells.len() + count, Cell::Empty);
            }
            '_' => cells.push(Cell::Empty),
            'X' => cells.push(Cell::X),
            'O' => cells.push(Cell::O),
            other => {
                return Err(Error::InvalidBoardState(format!(
                    "unrecognized character {other:?} in board state"
                )));
            }
        }
        if cells.len() > MAX_CELLS {
            return Err(Error::InvalidBoardState(
                "board state exceeds the maximum board size".into(),
            ));
        }
    }
    Ok(cells)
}

/// Edge length of a square board with `n` cells, if `n` is a perfect square.
fn square_edge(n: usize) -> Option<usize> {
    (1..=MAX_BOARD_SIZE).find(|s| s * s == n)
}
