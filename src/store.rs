use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::state::{reduce, TimersAction, TimersState};
use crate::timer::Timer;

/// Owner of one timers store instance
///
/// Dropping the store unmounts it: every handle sees `is_mounted() == false`
/// and later commands are discarded.
#[derive(Debug)]
pub struct TimersStore {
    shared: Arc<Shared>,
}

/// Handle for reading and updating a timers store
///
/// Clones observe the same instance.
#[derive(Debug, Clone)]
pub struct TimersHandle {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    /// Instance name for logging
    name: String,

    /// Current state. Every update goes through `reduce` under the channel's lock.
    state_tx: watch::Sender<TimersState>,

    /// Cancelled when the owning store is dropped
    unmount_token: CancellationToken,
}

impl TimersStore {
    /// Create a store holding `initial`
    pub fn new(name: String, initial: TimersState) -> Self {
        let (state_tx, _) = watch::channel(initial);

        log::info!("Timers store '{}' mounted", name);

        TimersStore {
            shared: Arc::new(Shared {
                name,
                state_tx,
                unmount_token: CancellationToken::new(),
            }),
        }
    }

    /// Get a handle to this store
    pub fn handle(&self) -> TimersHandle {
        TimersHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Drop for TimersStore {
    fn drop(&mut self) {
        self.shared.unmount_token.cancel();
        log::info!("Timers store '{}' unmounted", self.shared.name);
    }
}

impl TimersHandle {
    /// Apply an action to the store
    pub fn dispatch(&self, action: TimersAction) {
        if self.shared.unmount_token.is_cancelled() {
            log::warn!(
                "Timers store '{}' is unmounted, dropping {}",
                self.shared.name,
                action.kind()
            );
            return;
        }

        log::debug!("Timers store '{}' applying {}", self.shared.name, action.kind());
        self.shared
            .state_tx
            .send_modify(|state| *state = reduce(state, action));
    }

    /// Append a timer to the end of the list
    pub fn add_timer(&self, timer: Timer) {
        self.dispatch(TimersAction::AddTimer(timer));
    }

    pub fn start_timers(&self) {
        self.dispatch(TimersAction::StartTimers);
    }

    pub fn stop_timers(&self) {
        self.dispatch(TimersAction::StopTimers);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TimersState {
        self.shared.state_tx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.shared.state_tx.borrow().is_running
    }

    pub fn timers(&self) -> Arc<[Timer]> {
        Arc::clone(&self.shared.state_tx.borrow().timers)
    }

    /// Receiver notified with every new state
    pub fn subscribe(&self) -> watch::Receiver<TimersState> {
        self.shared.state_tx.subscribe()
    }

    /// Whether the owning store is still alive
    pub fn is_mounted(&self) -> bool {
        !self.shared.unmount_token.is_cancelled()
    }

    /// Wait until the owning store is dropped
    pub async fn unmounted(&self) {
        self.shared.unmount_token.cancelled().await
    }

    /// Whether both handles point at the same store
    pub fn same_store(&self, other: &TimersHandle) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}
