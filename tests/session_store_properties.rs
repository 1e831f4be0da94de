//! Property-based tests for the session booking state machine and store.

use proptest::prelude::*;
use session_booking_ui::models::Session;
use session_booking_ui::state::{apply, SessionCommand, SessionState};
use session_booking_ui::stores::SessionStore;

// ============================================================================
// Generators
// ============================================================================

/// Small id space so that duplicates and cancels of booked ids are common
fn arb_session_id() -> impl Strategy<Value = String> {
    "s[0-5]"
}

fn arb_session() -> impl Strategy<Value = Session> {
    (arb_session_id(), "[A-Za-z ]{1,16}", (0u32..8).prop_map(|half_hours| f64::from(half_hours) / 2.0))
        .prop_map(|(id, title, duration)| Session::new(id, title).with_duration(duration))
}

fn arb_command() -> impl Strategy<Value = SessionCommand> {
    prop_oneof![
        arb_session().prop_map(SessionCommand::Book),
        arb_session_id().prop_map(SessionCommand::Cancel),
    ]
}

fn run(commands: &[SessionCommand]) -> SessionState {
    commands
        .iter()
        .fold(SessionState::new(), |state, command| apply(&state, command))
}

fn ids(state: &SessionState) -> Vec<String> {
    state.upcoming_sessions.iter().map(|s| s.id.clone()).collect()
}

proptest! {
    #[test]
    fn booked_ids_stay_unique(commands in prop::collection::vec(arb_command(), 0..40)) {
        let state = run(&commands);
        let mut seen = ids(&state);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), state.len());
    }

    #[test]
    fn cancel_inverts_book_for_fresh_ids(
        commands in prop::collection::vec(arb_command(), 0..20),
        session in arb_session(),
    ) {
        let state = run(&commands);
        prop_assume!(!state.contains(&session.id));

        let booked = apply(&state, &SessionCommand::Book(session.clone()));
        let restored = apply(&booked, &SessionCommand::Cancel(session.id));

        prop_assert_eq!(restored, state);
    }

    #[test]
    fn cancel_of_absent_id_is_noop(
        commands in prop::collection::vec(arb_command(), 0..20),
        session_id in arb_session_id(),
    ) {
        let state = run(&commands);
        prop_assume!(!state.contains(&session_id));

        prop_assert_eq!(apply(&state, &SessionCommand::Cancel(session_id)), state);
    }

    #[test]
    fn booking_present_id_is_noop(
        commands in prop::collection::vec(arb_command(), 1..20),
        title in "[A-Za-z]{1,8}",
    ) {
        let state = run(&commands);
        prop_assume!(!state.is_empty());

        let existing_id = state.upcoming_sessions[0].id.clone();
        let duplicate = Session::new(existing_id, title).with_summary("changed");

        prop_assert_eq!(apply(&state, &SessionCommand::Book(duplicate)), state);
    }

    #[test]
    fn store_follows_pure_transitions(commands in prop::collection::vec(arb_command(), 0..40)) {
        let store = SessionStore::new();
        for command in &commands {
            store.dispatch(command.clone());
        }
        prop_assert_eq!(store.snapshot(), run(&commands));
    }

    #[test]
    fn dispatch_reports_change_exactly_when_state_changes(
        commands in prop::collection::vec(arb_command(), 0..20),
        command in arb_command(),
    ) {
        let store = SessionStore::new();
        for c in &commands {
            store.dispatch(c.clone());
        }
        let before = store.snapshot();

        let changed = store.dispatch(command);

        prop_assert_eq!(changed, store.snapshot() != before);
    }
}

#[test]
fn booking_order_is_preserved() {
    let store = SessionStore::new();
    let a = Session::new("a", "A");
    let b = Session::new("b", "B");

    store.book_session(a.clone());
    store.book_session(b.clone());
    assert_eq!(store.upcoming_sessions(), vec![a, b.clone()]);

    store.cancel_session("a");
    assert_eq!(store.upcoming_sessions(), vec![b]);
}

#[test]
fn yoga_booking_scenario() {
    let store = SessionStore::new();
    let yoga = Session::new("s1", "Yoga")
        .with_summary("Morning flow")
        .with_date("2025-01-10")
        .with_duration(1.0);

    store.book_session(yoga.clone());
    assert_eq!(store.upcoming_sessions(), vec![yoga.clone()]);

    store.book_session(Session::new("s1", "Boxing").with_duration(3.0));
    assert_eq!(store.upcoming_sessions(), vec![yoga.clone()]);

    store.cancel_session("s2");
    assert_eq!(store.upcoming_sessions(), vec![yoga]);

    store.cancel_session("s1");
    assert!(store.upcoming_sessions().is_empty());
}
