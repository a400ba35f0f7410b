use runlines::engine::{Continuation, RunState, Sequencer};
use runlines::types::{CommandOutcome, LoopMode};

#[test]
fn once_mode_walks_to_the_end_and_stops() {
    let seq = Sequencer::new(3, LoopMode::Once, false);
    assert_eq!(seq.next_index(0), Some(1));
    assert_eq!(seq.next_index(1), Some(2));
    assert_eq!(seq.next_index(2), None);
}

#[test]
fn cycle_mode_wraps_around() {
    let seq = Sequencer::new(3, LoopMode::Cycle, false);
    assert_eq!(seq.next_index(0), Some(1));
    assert_eq!(seq.next_index(2), Some(0));

    let single = Sequencer::new(1, LoopMode::Cycle, false);
    assert_eq!(single.next_index(0), Some(0));
}

#[test]
fn empty_sequence_has_no_next_index() {
    assert_eq!(Sequencer::new(0, LoopMode::Cycle, true).next_index(0), None);
    assert_eq!(Sequencer::new(0, LoopMode::Once, true).next_index(0), None);
}

#[test]
fn failure_stops_unless_errors_are_ignored() {
    let strict = Sequencer::new(2, LoopMode::Once, false);
    assert_eq!(strict.after(&CommandOutcome::Success), Continuation::Continue);
    assert_eq!(strict.after(&CommandOutcome::Exited(2)), Continuation::Stop);
    assert_eq!(
        strict.after(&CommandOutcome::LaunchFailed("no such file".into())),
        Continuation::Stop
    );

    let lenient = Sequencer::new(2, LoopMode::Once, true);
    assert_eq!(lenient.after(&CommandOutcome::Exited(2)), Continuation::Continue);
    assert_eq!(
        lenient.after(&CommandOutcome::LaunchFailed("no such file".into())),
        Continuation::Continue
    );
}

#[test]
fn run_state_counts_outcomes() {
    let mut state = RunState::new();
    state.record(&CommandOutcome::Success);
    state.record(&CommandOutcome::Exited(1));
    state.record(&CommandOutcome::LaunchFailed("boom".into()));
    state.record(&CommandOutcome::Success);

    assert_eq!(state.ok(), 2);
    assert_eq!(state.fail(), 2);
    assert_eq!(state.dispatched(), 4);
}

#[test]
fn failure_messages_match_progress_output() {
    assert_eq!(CommandOutcome::Exited(2).to_string(), "Exit code = 2");
    assert_eq!(
        CommandOutcome::LaunchFailed("failed to launch 'x'".into()).to_string(),
        "failed to launch 'x'"
    );
}
