//! Scenario tests against the daily routine configuration.

use statewise::{MachineConfig, MachineError, StateMachine};

const ROUTINE: &str = r#"{
    "initial": "normal",
    "states": {
        "normal":   { "transitions": { "study": "busy" } },
        "busy":     { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
        "hungry":   { "transitions": { "eat": "normal" } },
        "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
    }
}"#;

fn routine() -> StateMachine {
    let config = MachineConfig::from_json(ROUTINE).unwrap();
    StateMachine::new(config).unwrap()
}

#[test]
fn initial_state_is_normal() {
    assert_eq!(routine().current_state(), "normal");
}

#[test]
fn change_state_accepts_any_casing() {
    let mut machine = routine();
    for name in ["busy", "HUNGRY", "Sleeping", "nOrMaL"] {
        machine.change_state(name).unwrap();
        assert_eq!(machine.current_state(), name.to_lowercase().as_str());
    }
}

#[test]
fn change_state_to_unknown_state_fails() {
    let mut machine = routine();
    machine.change_state("busy").unwrap();

    let err = machine.change_state("course").unwrap_err();

    assert!(matches!(err, MachineError::InvalidState { ref state } if state == "course"));
    assert_eq!(machine.current_state(), "busy");
}

#[test]
fn trigger_cycles_through_the_day() {
    let mut machine = routine();
    machine.trigger("study").unwrap();
    assert_eq!(machine.current_state(), "busy");
    machine.trigger("get_hungry").unwrap();
    assert_eq!(machine.current_state(), "hungry");
    machine.trigger("eat").unwrap();
    assert_eq!(machine.current_state(), "normal");
}

#[test]
fn trigger_with_undefined_event_fails() {
    let mut machine = routine();
    machine.trigger("study").unwrap();

    let err = machine.trigger("eat").unwrap_err();

    assert_eq!(
        err,
        MachineError::InvalidTransition {
            event: "eat".to_string(),
            state: "busy".to_string(),
        }
    );
    assert_eq!(machine.current_state(), "busy");
}

#[test]
fn get_states_lists_all_states() {
    assert_eq!(
        routine().get_states(None),
        vec!["normal", "busy", "hungry", "sleeping"]
    );
}

#[test]
fn get_states_filters_by_event() {
    let machine = routine();
    assert_eq!(machine.get_states(Some("get_hungry")), vec!["busy", "sleeping"]);
    assert_eq!(machine.get_states(Some("study")), vec!["normal"]);
}

#[test]
fn undo_after_change_state() {
    let mut machine = routine();
    machine.change_state("hungry").unwrap();

    assert!(machine.undo());
    assert_eq!(machine.current_state(), "normal");
    assert!(!machine.undo());
}

#[test]
fn redo_after_undo() {
    let mut machine = routine();
    machine.change_state("hungry").unwrap();
    machine.undo();

    assert!(machine.redo());
    assert_eq!(machine.current_state(), "hungry");
    assert!(!machine.redo());
}

#[test]
fn forward_move_after_undo_disables_redo() {
    let mut machine = routine();
    machine.trigger("study").unwrap();
    machine.undo();
    machine.trigger("study").unwrap();
    assert!(!machine.redo());

    machine.undo();
    machine.change_state("sleeping").unwrap();
    assert!(!machine.redo());
}

#[test]
fn clear_history_disables_undo_and_redo() {
    let mut machine = routine();
    machine.trigger("study").unwrap();
    machine.trigger("get_tired").unwrap();
    machine.undo();

    machine.clear_history();

    assert!(!machine.undo());
    assert!(!machine.redo());
    assert_eq!(machine.current_state(), "busy");
}

#[test]
fn reset_returns_to_initial_state() {
    let mut machine = routine();
    machine.trigger("study").unwrap();
    machine.trigger("get_tired").unwrap();
    machine.trigger("get_hungry").unwrap();

    machine.reset();

    assert_eq!(machine.current_state(), "normal");
    assert!(!machine.undo());
    assert!(!machine.redo());
}

#[test]
fn config_is_not_mutated_by_the_machine() {
    let config = MachineConfig::from_json(ROUTINE).unwrap();
    let mut machine = StateMachine::new(config.clone()).unwrap();
    machine.trigger("study").unwrap();
    machine.undo();
    machine.reset();

    assert_eq!(machine.config(), &config);
}
