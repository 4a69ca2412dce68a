//! Single-owner game session.
//!
//! The session holds the only live [`GameState`] and is the one place that
//! calls into the rules engine, so calls are serialised by construction.
//! Rejected moves are logged and reported here; the engine itself stays
//! silent about them.

use crate::input::Command;
use qubic_rules::{GameController, GameState, GameStatus, Line, MoveError};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// What happened in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A move was accepted.
    Moved,
    /// A move was rejected; the state is unchanged.
    Rejected(MoveError),
    /// A new game was started.
    Reset,
    /// The snapshot was requested.
    Shown,
    /// Usage was requested.
    Help,
    /// The session should end.
    Quit,
}

/// Serialisable view of the session for display collaborators.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Full game state.
    pub state: &'a GameState,
    /// Derived status.
    pub status: GameStatus,
    /// The completed line, once the game is won.
    pub winning_line: Option<&'a Line>,
}

/// A game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    controller: GameController,
    state: GameState,
}

impl GameSession {
    /// Creates a session with a fresh game on a board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let controller = GameController::new(size);
        let state = controller.reset();
        info!(size, "Created game session");
        Self { controller, state }
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Handles one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> SessionEvent {
        match command {
            Command::Move(coord) => match self.controller.apply_move(&self.state, coord) {
                Ok(next) => {
                    info!(%coord, status = %next.status(), "Move accepted");
                    self.state = next;
                    SessionEvent::Moved
                }
                Err(e) => {
                    warn!(%coord, error = %e, "Move rejected");
                    SessionEvent::Rejected(e)
                }
            },
            Command::Reset => {
                self.state = self.controller.reset();
                info!("Game reset");
                SessionEvent::Reset
            }
            Command::Show => SessionEvent::Shown,
            Command::Help => SessionEvent::Help,
            Command::Quit => SessionEvent::Quit,
        }
    }

    /// Returns the serialisable snapshot.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: &self.state,
            status: self.state.status(),
            winning_line: self.controller.winning_line(&self.state),
        }
    }

    /// Renders the snapshot as pretty JSON.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Renders the snapshot as text: status, last move, board slices.
    pub fn render_text(&self) -> String {
        let state = &self.state;
        let mut out = match state.status() {
            GameStatus::InProgress => format!("{} to move\n", state.current_player()),
            GameStatus::Won(player) => format!("{} wins!\n", player),
        };
        if let Some(last) = state.last_move() {
            out.push_str(&format!("Last move: {}\n", last));
        }
        if let Some(line) = self.controller.winning_line(state) {
            let cells: Vec<String> = line.cells().iter().map(|c| c.to_string()).collect();
            out.push_str(&format!(
                "Winning line ({}): {}\n",
                line.family(),
                cells.join(" ")
            ));
        }
        out.push_str(&state.board().to_string());
        out
    }
}
