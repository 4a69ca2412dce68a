//! Game rules for Qubic.
//!
//! Pure functions and value types for evaluating a board. Rules are kept
//! apart from board storage so the controller and the contracts can share
//! them.

pub mod validate;
pub mod win;

pub use validate::validate;
pub use win::{Line, LineFamily, WinDetector};
