use std::sync::Arc;

use crate::timer::Timer;

/// Snapshot of the store
///
/// `timers` is shared between snapshots. Starting or stopping keeps the same
/// list, adding a timer allocates a new one, so an older snapshot is never
/// changed by a later command.
#[derive(Debug, Clone, PartialEq)]
pub struct TimersState {
    pub is_running: bool,
    /// Timers in insertion (display) order
    pub timers: Arc<[Timer]>,
}

impl TimersState {
    /// Initial state: running, no timers
    pub fn new() -> Self {
        TimersState {
            is_running: true,
            timers: Arc::from(Vec::new()),
        }
    }

    /// Whether both snapshots point at the same timer list
    pub fn shares_timers_with(&self, other: &TimersState) -> bool {
        Arc::ptr_eq(&self.timers, &other.timers)
    }
}

impl Default for TimersState {
    fn default() -> Self {
        Self::new()
    }
}

/// Store action enum
#[derive(Debug, Clone, PartialEq)]
pub enum TimersAction {
    AddTimer(Timer),
    StartTimers,
    StopTimers,
}

impl TimersAction {
    /// Stable tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            TimersAction::AddTimer(_) => "ADD_TIMER",
            TimersAction::StartTimers => "START_TIMERS",
            TimersAction::StopTimers => "STOP_TIMERS",
        }
    }
}

/// Compute the next state from the current one and an action
///
/// Pure and total. Each action changes only the field it names; every other
/// field is carried over from `state` untouched.
pub fn reduce(state: &TimersState, action: TimersAction) -> TimersState {
    match action {
        TimersAction::AddTimer(timer) => {
            let timers: Vec<Timer> = state
                .timers
                .iter()
                .cloned()
                .chain(std::iter::once(timer))
                .collect();
            TimersState {
                timers: Arc::from(timers),
                ..state.clone()
            }
        }
        TimersAction::StartTimers => TimersState {
            is_running: true,
            ..state.clone()
        },
        TimersAction::StopTimers => TimersState {
            is_running: false,
            ..state.clone()
        },
    }
}
