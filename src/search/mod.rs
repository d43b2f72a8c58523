//! Heuristic move selection

pub mod selector;

// Re-exports
pub use selector::{select_move, Rule, Selection};
