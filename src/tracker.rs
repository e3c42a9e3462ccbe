//! Interview-stage tracker: turns a candidate's ordered tri-state stage
//! flags into the node and connector states the timeline renders from.

use crate::models::interview::StageProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Completed,
    Failed,
    /// The frontier of progress: the first undecided stage whose
    /// predecessors all completed.
    Current,
    Pending,
}

/// A failed stage is terminal: stages after it stay `Pending`, never
/// `Current`, and are never auto-failed.
pub fn stage_states(flags: &[Option<bool>]) -> Vec<StageState> {
    let mut states = Vec::with_capacity(flags.len());
    let mut frontier_open = true;
    for flag in flags {
        let state = match flag {
            Some(true) => StageState::Completed,
            Some(false) => {
                frontier_open = false;
                StageState::Failed
            }
            None => {
                if frontier_open {
                    frontier_open = false;
                    StageState::Current
                } else {
                    StageState::Pending
                }
            }
        };
        states.push(state);
    }
    states
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorState {
    Progressed,
    Neutral,
}

/// One connector per adjacent stage pair: colored when the leading stage has
/// a decided outcome (completed or failed).
pub fn connector_states(flags: &[Option<bool>]) -> Vec<ConnectorState> {
    if flags.is_empty() {
        return Vec::new();
    }
    flags[..flags.len() - 1]
        .iter()
        .map(|flag| {
            if flag.is_some() {
                ConnectorState::Progressed
            } else {
                ConnectorState::Neutral
            }
        })
        .collect()
}

pub fn progress_states(progress: &[StageProgress]) -> Vec<StageState> {
    let flags: Vec<Option<bool>> = progress.iter().map(|p| p.is_completed).collect();
    stage_states(&flags)
}
