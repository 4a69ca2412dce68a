//! Qubic - Unified CLI
//!
//! Terminal front end for the Qubic rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use cli::{Cli, Command};
use qubic::{GameSession, InputAdapter, OutputFormat, QubicConfig, SessionEvent};
use qubic_rules::{LineFamily, WinDetector};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  x y z     claim a cell (also x,y,z)
  reset     start a new game
  show      print the board
  help      print this message
  quit      leave";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            one_based,
            clamp,
            json,
        } => {
            let config = QubicConfig::load_or_default(&config)?
                .with_overrides(size, one_based, clamp, json)?;
            run_play(&config)
        }
        Command::Replay {
            moves,
            config,
            size,
            one_based,
            json,
        } => {
            let config = QubicConfig::load_or_default(&config)?
                .with_overrides(size, one_based, false, json)?;
            run_replay(&config, &moves)
        }
        Command::Lines { size } => run_lines(size),
    }
}

/// Logs go to stderr so stdout carries only snapshots.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Interactive loop over stdin.
#[instrument(skip(config), fields(size = config.size()))]
fn run_play(config: &QubicConfig) -> Result<()> {
    let adapter = InputAdapter::new(*config.size(), *config.input());
    let format = *config.output().format();
    let mut session = GameSession::new(*config.size());

    info!(%format, "Starting interactive session");
    println!("{HELP}\n");
    print_snapshot(&session, format)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("{}> ", session.state().current_player());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match adapter.parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.handle(command) {
            SessionEvent::Moved | SessionEvent::Reset | SessionEvent::Shown => {
                print_snapshot(&session, format)?;
            }
            SessionEvent::Rejected(e) => println!("Rejected: {e}"),
            SessionEvent::Help => println!("{HELP}"),
            SessionEvent::Quit => break,
        }
    }

    info!("Session ended");
    Ok(())
}

/// Applies `moves` from a fresh game and prints the final snapshot.
#[instrument(skip(config), fields(size = config.size()))]
fn run_replay(config: &QubicConfig, moves: &[String]) -> Result<()> {
    let adapter = InputAdapter::new(*config.size(), *config.input());
    let mut session = GameSession::new(*config.size());

    for (i, raw) in moves.iter().enumerate() {
        let command = adapter
            .parse(raw)
            .with_context(|| format!("move {} ({raw:?})", i + 1))?;
        let qubic::Command::Move(_) = command else {
            bail!("move {} ({raw:?}) is not a coordinate", i + 1);
        };
        if let SessionEvent::Rejected(e) = session.handle(command) {
            return Err(anyhow!(e).context(format!("move {} ({raw:?})", i + 1)));
        }
    }

    print_snapshot(&session, *config.output().format())
}

/// Prints every winning line for an N-cube, grouped by family.
#[instrument]
fn run_lines(size: usize) -> Result<()> {
    let config = QubicConfig::default().with_overrides(Some(size), false, false, false)?;
    let detector = WinDetector::new(*config.size());

    for family in LineFamily::iter() {
        println!("{family} ({})", detector.count(family));
        for line in detector.lines().iter().filter(|l| *l.family() == family) {
            let cells: Vec<String> = line.cells().iter().map(|c| c.to_string()).collect();
            println!("  {}", cells.join(" "));
        }
    }
    println!("total {}", detector.lines().len());
    Ok(())
}

fn print_snapshot(session: &GameSession, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", session.render_text()),
        OutputFormat::Json => println!("{}", session.render_json()?),
    }
    Ok(())
}
