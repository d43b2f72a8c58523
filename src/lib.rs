//! N-in-a-row engine speaking the st3p line protocol
//!
//! A bot for the tic-tac-toe/gomoku family on variable-size boards. It
//! reads commands from a line-oriented stream, decodes a compact board
//! state, picks a move with a bounded center-weighted heuristic, and
//! answers in the same protocol.
//!
//! # Architecture
//!
//! - [`board`]: variable-size grid and the run-length state notation
//! - [`codec`]: memoized coordinate <-> "a1"/"aa15" position mapping
//! - [`rules`]: win detection around a just-placed mark
//! - [`search`]: the heuristic move-selection policy
//! - [`engine`]: move computation under an optional deadline race
//! - [`protocol`]: the st3p command loop
//!
//! # Quick Start
//!
//! ```
//! use st3p::{Board, Cell, Engine};
//!
//! let engine = Engine::new();
//! let board = Board::from_state_str("___/___/___", 3).unwrap();
//! let result = engine.compute_move(&board, Cell::X, None);
//! assert_eq!(result.position, "b2");
//! ```
//!
//! # Move Selection
//!
//! The selector tries, in order: the exact center cell, a winning cell
//! in the center window, a cell blocking the opponent in the same
//! window, the nearest empty cell spiraling out from the center, and
//! finally the top-left corner. It is intentionally not a game-tree
//! search; its cost is bounded so a move is always ready quickly.

pub mod board;
pub mod codec;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
pub use codec::PositionCodec;
pub use engine::{Engine, MoveResult};
pub use error::Error;
pub use protocol::{Identity, ProtocolHandler};
pub use search::{select_move, Rule, Selection};
