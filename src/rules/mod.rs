//! Game rules for the N-in-a-row family
//!
//! Only one rule exists in this family: a placed mark wins when it
//! completes a run of the board's win-length in any line direction.

pub mod win;

// Re-exports for convenient access
pub use win::check_win;
