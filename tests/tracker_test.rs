use hr_dashboard_client::tracker::{
    connector_states, stage_states, ConnectorState, StageState,
};

#[test]
fn first_undecided_stage_after_completions_is_current() {
    let states = stage_states(&[Some(true), None, None]);
    assert_eq!(
        states,
        vec![StageState::Completed, StageState::Current, StageState::Pending]
    );
}

#[test]
fn failure_is_terminal_and_does_not_auto_fail_later_stages() {
    let states = stage_states(&[Some(true), Some(false), None]);
    assert_eq!(
        states,
        vec![StageState::Completed, StageState::Failed, StageState::Pending]
    );
}

#[test]
fn untouched_pipeline_starts_at_the_first_stage() {
    let states = stage_states(&[None, None, None]);
    assert_eq!(
        states,
        vec![StageState::Current, StageState::Pending, StageState::Pending]
    );
}

#[test]
fn fully_completed_pipeline_has_no_current_stage() {
    let states = stage_states(&[Some(true), Some(true)]);
    assert!(states.iter().all(|s| *s == StageState::Completed));
}

#[test]
fn connectors_color_behind_decided_stages() {
    assert_eq!(
        connector_states(&[Some(true), None, None]),
        vec![ConnectorState::Progressed, ConnectorState::Neutral]
    );
    assert_eq!(
        connector_states(&[Some(true), Some(false), None]),
        vec![ConnectorState::Progressed, ConnectorState::Progressed]
    );
}

#[test]
fn connector_edges() {
    assert!(connector_states(&[]).is_empty());
    assert!(connector_states(&[None]).is_empty());
}
