//! Qubic terminal shell.
//!
//! Wraps the [`qubic_rules`] engine with the pieces an application needs
//! around it:
//!
//! - **Config**: TOML settings for board size, input handling and output
//! - **Input**: text to commands, with opt-in 1-based numbering and clamping
//! - **Session**: the single owner of the live game state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod session;

pub use config::{ConfigError, InputConfig, MAX_SIZE, OutputConfig, OutputFormat, QubicConfig};
pub use input::{Command, InputAdapter, InputError};
pub use session::{GameSession, SessionEvent, Snapshot};
