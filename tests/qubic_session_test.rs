//! Tests for the session and input adapter working together.

use qubic::{Command, GameSession, InputAdapter, InputConfig, InputError, SessionEvent};
use qubic_rules::{Coordinate, MoveError, Player};

fn play(session: &mut GameSession, adapter: &InputAdapter, lines: &[&str]) -> Vec<SessionEvent> {
    lines
        .iter()
        .map(|line| session.handle(adapter.parse(line).expect("Parsable input")))
        .collect()
}

#[test]
fn test_typed_game_to_win() {
    let adapter = InputAdapter::new(4, InputConfig::default());
    let mut session = GameSession::new(4);

    let events = play(
        &mut session,
        &adapter,
        &["0 0 0", "1 0 0", "0 1 1", "2,0,0", "0 2 2", "3 0 0", "0 3 3"],
    );

    assert!(events.iter().all(|e| *e == SessionEvent::Moved));
    assert_eq!(session.state().winner(), Some(Player::PlayerA));
    assert!(session.render_text().starts_with("Player A wins!"));

    assert_eq!(
        session.handle(adapter.parse("1 1 1").unwrap()),
        SessionEvent::Rejected(MoveError::GameOver)
    );
    assert_eq!(session.handle(adapter.parse("reset").unwrap()), SessionEvent::Reset);
    assert_eq!(session.state().current_player(), Player::PlayerA);
    assert!(session.state().history().is_empty());
}

#[test]
fn test_one_based_input_reaches_engine_zero_based() {
    let adapter = InputAdapter::new(4, InputConfig::new(true, false));
    let mut session = GameSession::new(4);

    play(&mut session, &adapter, &["1 1 1", "4 4 4"]);

    let history = session.state().history();
    assert_eq!(history[0].coordinate, Coordinate::new(0, 0, 0));
    assert_eq!(history[1].coordinate, Coordinate::new(3, 3, 3));
}

#[test]
fn test_out_of_range_rejected_by_engine_without_clamp() {
    let adapter = InputAdapter::new(4, InputConfig::default());
    let mut session = GameSession::new(4);

    let event = session.handle(adapter.parse("4 0 0").unwrap());
    assert_eq!(
        event,
        SessionEvent::Rejected(MoveError::OutOfBounds {
            coordinate: Coordinate::new(4, 0, 0),
            size: 4
        })
    );
    assert!(session.state().history().is_empty());
}

#[test]
fn test_clamped_input_lands_on_edge() {
    let adapter = InputAdapter::new(4, InputConfig::new(true, true));
    let mut session = GameSession::new(4);

    assert_eq!(
        session.handle(adapter.parse("9 0 2").unwrap()),
        SessionEvent::Moved
    );
    assert_eq!(
        session.state().last_move().map(|m| m.coordinate),
        Some(Coordinate::new(3, 0, 1))
    );
}

#[test]
fn test_bad_input_never_reaches_session() {
    let adapter = InputAdapter::new(4, InputConfig::default());
    assert_eq!(adapter.parse("1 2"), Err(InputError::WrongArity(2)));
    assert_eq!(adapter.parse("quit"), Ok(Command::Quit));
}
