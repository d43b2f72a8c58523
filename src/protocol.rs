//! st3p line protocol: command parsing and dispatch
//!
//! One command per line on stdin, responses on stdout. Parse failures
//! are diagnostics, never fatal: the offending line is logged and
//! skipped and the loop keeps reading. Lines that match no command are
//! ignored without output.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{trace, warn};

use crate::board::{Board, Cell, DEFAULT_WIN_LENGTH};
use crate::engine::Engine;
use crate::error::Error;

/// Identity reported by the `identify` command.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub author: String,
    pub version: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").replace('_', "-"),
            author: "st3p developers".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Parsed `move` command.
///
/// Shape: `move <boardState> <player> [time ms:<N>] [win-length <N>]`.
/// Unknown options and unparsable option values are skipped rather than
/// failing the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub state: String,
    pub player: Cell,
    pub budget: Option<Duration>,
    pub win_length: usize,
}

impl MoveRequest {
    /// Parse a full `move` command line.
    pub fn parse(line: &str, default_win_length: usize) -> Result<Self, Error> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(Error::InvalidCommand(format!(
                "move needs a board state and a player: {line:?}"
            )));
        }

        let state = parts[1].to_string();
        let player = match parts[2].chars().next() {
            Some('X') | Some('x') => Cell::X,
            Some('O') | Some('o') => Cell::O,
            _ => {
                return Err(Error::InvalidCommand(format!(
                    "unknown player {:?}",
                    parts[2]
                )));
            }
        };

        let mut budget = None;
        let mut win_length = default_win_length;
        let mut i = 3;
        while i < parts.len() {
            match parts[i] {
                "time" => {
                    if let Some(arg) = parts.get(i + 1).and_then(|a| a.strip_prefix("ms:")) {
                        if let Ok(ms) = arg.parse::<u64>() {
                            if ms > 0 {
                                budget = Some(Duration::from_millis(ms));
                            }
                        }
                        i += 1;
                    }
                }
                "win-length" => {
                    if let Some(arg) = parts.get(i + 1) {
                        if let Ok(n) = arg.parse::<usize>() {
                            if n > 0 {
                                win_length = n;
                            }
                        }
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        Ok(Self {
            state,
            player,
            budget,
            win_length,
        })
    }
}

/// Protocol loop: reads commands, answers them, stops on `quit` or EOF.
pub struct ProtocolHandler {
    engine: Engine,
    identity: Identity,
    default_win_length: usize,
}

impl ProtocolHandler {
    #[must_use]
    pub fn new(identity: Identity, default_win_length: usize) -> Self {
        Self {
            engine: Engine::new(),
            identity,
            default_win_length: default_win_length.max(1),
        }
    }

    /// Process commands from `input`, writing responses to `output`.
    ///
    /// Returns when `quit` is received or the input ends. Blank lines
    /// and unrecognized commands are ignored.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle_line(line, &mut output)? {
                break;
            }
        }
        Ok(())
    }

    /// Dispatch one command line. Returns `false` on `quit`.
    fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> io::Result<bool> {
        if line.starts_with("st3p version") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            // Too few fields: silently ignored, like any unknown line
            if parts.len() >= 3 {
                writeln!(output, "st3p version {} ok", parts[2])?;
            }
        } else if line == "identify" {
            writeln!(output, "identify name {}", self.identity.name)?;
            writeln!(output, "identify author {}", self.identity.author)?;
            writeln!(output, "identify version {}", self.identity.version)?;
            writeln!(output, "identify ok")?;
        } else if line.starts_with("move") {
            match self.handle_move(line) {
                Ok(position) => writeln!(output, "best {position}")?,
                Err(err) => warn!(%err, "dropping malformed move command"),
            }
        } else if line == "quit" {
            return Ok(false);
        }
        output.flush()?;
        Ok(true)
    }

    /// Parse and answer one `move` command.
    fn handle_move(&self, line: &str) -> Result<String, Error> {
        let request = MoveRequest::parse(line, self.default_win_length)?;
        let board = Board::from_state_str(&request.state, request.win_length)?;
        trace!(size = board.size(), "parsed board\n{}", board.to_display_string());
        let result = self
            .engine
            .compute_move(&board, request.player, request.budget);
        Ok(result.position)
    }
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new(Identity::default(), DEFAULT_WIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_move() {
        let req = MoveRequest::parse("move ___/___/___ X", 3).unwrap();
        assert_eq!(req.state, "___/___/___");
        assert_eq!(req.player, Cell::X);
        assert_eq!(req.budget, None);
        assert_eq!(req.win_length, 3);
    }

    #[test]
    fn test_parse_move_options() {
        let req = MoveRequest::parse("move 9 O time ms:250 win-length 4", 3).unwrap();
        assert_eq!(req.player, Cell::O);
        assert_eq!(req.budget, Some(Duration::from_millis(250)));
        assert_eq!(req.win_length, 4);
    }

    #[test]
    fn test_parse_skips_bad_option_values() {
        let req = MoveRequest::parse("move 9 X time ms:soon win-length nope", 3).unwrap();
        assert_eq!(req.budget, None);
        assert_eq!(req.win_length, 3);
    }

    #[test]
    fn test_parse_nonpositive_time_means_no_budget() {
        let req = MoveRequest::parse("move 9 X time ms:0", 3).unwrap();
        assert_eq!(req.budget, None);
    }

    #[test]
    fn test_parse_rejects_short_line() {
        assert!(MoveRequest::parse("move 9", 3).is_err());
        assert!(MoveRequest::parse("move", 3).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_player() {
        assert!(MoveRequest::parse("move 9 Q", 3).is_err());
    }
}
