//! Position encoding between grid coordinates and protocol strings
//!
//! Positions travel on the wire as a column letter-code followed by a
//! 1-based row number ("a1", "h8", "aa15"). Columns 0-25 use a single
//! letter; columns 26 and up use two letters where the first is
//! `'a' + col / 26 - 1` and the second `'a' + col % 26`. The offset in
//! the first letter is part of the wire format and must be preserved.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::board::Pos;
use crate::error::Error;

/// Letter-code for a column index.
///
/// Supports columns up to 675 (two-letter codes); the board module caps
/// sizes well below that.
pub fn column_code(col: usize) -> String {
    if col >= 26 {
        let hi = (b'a' + (col / 26 - 1) as u8) as char;
        let lo = (b'a' + (col % 26) as u8) as char;
        format!("{hi}{lo}")
    } else {
        ((b'a' + col as u8) as char).to_string()
    }
}

/// Memoized mapping between coordinates and protocol position strings.
///
/// One table of `size * size` strings is built on first use per board
/// size and is immutable afterwards; the mutex only guards the
/// first-use insertion, so concurrent readers cannot observe a
/// half-built table.
#[derive(Debug, Default)]
pub struct PositionCodec {
    tables: Mutex<HashMap<usize, Arc<Vec<String>>>>,
}

impl PositionCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Protocol string for `pos` on a `size` x `size` board.
    #[must_use]
    pub fn encode(&self, size: usize, pos: Pos) -> String {
        self.table(size)[pos.row * size + pos.col].clone()
    }

    /// Parse a position string, case-insensitively.
    ///
    /// The trailing digits are the 1-based row; the remainder is the
    /// column letter-code (one or two letters). Fails with
    /// [`Error::InvalidPosition`] when the string is too short, the row
    /// is missing or zero, the column code is not 1-2 letters, or either
    /// coordinate falls outside the board.
    pub fn decode(&self, text: &str, size: usize) -> Result<Pos, Error> {
        let invalid = || Error::InvalidPosition(text.to_string());

        let trimmed = text.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = text.len() - trimmed.len();
        if text.len() < 2 || digits == 0 || trimmed.is_empty() {
            return Err(invalid());
        }

        let row: usize = text[trimmed.len()..].parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        let row = row - 1;

        let code = trimmed.to_ascii_lowercase();
        let col = match code.as_bytes() {
            [c] if c.is_ascii_lowercase() => (c - b'a') as usize,
            [hi, lo] if hi.is_ascii_lowercase() && lo.is_ascii_lowercase() => {
                ((hi - b'a') as usize + 1) * 26 + (lo - b'a') as usize
            }
            _ => return Err(invalid()),
        };

        if row >= size || col >= size {
            return Err(invalid());
        }
        Ok(Pos::new(row, col))
    }

    /// Lookup table for one board size, built at most once.
    fn table(&self, size: usize) -> Arc<Vec<String>> {
        let mut tables = self.tables.lock().expect("position table lock poisoned");
        tables
            .entry(size)
            .or_insert_with(|| Arc::new(build_table(size)))
            .clone()
    }
}

fn build_table(size: usize) -> Vec<String> {
    let mut table = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            table.push(format!("{}{}", column_code(col), row + 1));
        }
    }
    table
}
