//! Command-line interface for qubic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Qubic - 3D tic-tac-toe rules engine
#[derive(Parser, Debug)]
#[command(name = "qubic")]
#[command(about = "Play Qubic (tic-tac-toe on a cube) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "qubic.toml")]
        config: PathBuf,

        /// Board edge length (overrides config)
        #[arg(long)]
        size: Option<usize>,

        /// Read coordinates as 1-based
        #[arg(long)]
        one_based: bool,

        /// Clamp coordinates into range instead of rejecting them
        #[arg(long)]
        clamp: bool,

        /// Print snapshots as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a list of moves and print the final snapshot
    Replay {
        /// Moves as `x,y,z`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "qubic.toml")]
        config: PathBuf,

        /// Board edge length (overrides config)
        #[arg(long)]
        size: Option<usize>,

        /// Read coordinates as 1-based
        #[arg(long)]
        one_based: bool,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the winning lines for a board size
    Lines {
        /// Board edge length
        #[arg(long, default_value = "4")]
        size: usize,
    },
}
