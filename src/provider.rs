use std::future::Future;

use crate::error::StoreError;
use crate::state::TimersState;
use crate::store::{TimersHandle, TimersStore};

tokio::task_local! {
    static CURRENT_STORE: TimersHandle;
}

/// Makes one store available to everything run inside its scope
///
/// The store lives exactly as long as the scope. Code inside the scope reaches
/// it through [`use_timers_store`] without threading a parameter; code that
/// prefers explicit injection can take [`TimersProvider::handle`] instead.
///
/// Task-local scopes do not follow `tokio::spawn`. Resolve the handle before
/// spawning and move it into the task.
#[derive(Debug)]
pub struct TimersProvider {
    store: TimersStore,
}

impl TimersProvider {
    /// Create a provider with the initial state
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, TimersState::new())
    }

    /// Create a provider starting from `state`
    pub fn with_state(name: impl Into<String>, state: TimersState) -> Self {
        TimersProvider {
            store: TimersStore::new(name.into(), state),
        }
    }

    pub fn handle(&self) -> TimersHandle {
        self.store.handle()
    }

    /// Run `f` with the store installed, then unmount it
    pub async fn scope<F>(self, f: F) -> F::Output
    where
        F: Future,
    {
        let handle = self.store.handle();
        let output = CURRENT_STORE.scope(handle, f).await;
        drop(self.store);
        output
    }

    /// Synchronous version of [`TimersProvider::scope`]
    pub fn sync_scope<F, R>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let handle = self.store.handle();
        let output = CURRENT_STORE.sync_scope(handle, f);
        drop(self.store);
        output
    }
}

/// Get the store of the innermost enclosing provider
///
/// Returns [`StoreError::OutsideProvider`] when no provider scope is active.
pub fn use_timers_store() -> Result<TimersHandle, StoreError> {
    CURRENT_STORE
        .try_with(TimersHandle::clone)
        .map_err(|_| StoreError::OutsideProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Timer;

    #[test]
    fn test_accessor_outside_provider_fails() {
        let result = use_timers_store();
        assert_eq!(result.unwrap_err(), StoreError::OutsideProvider);
        assert_eq!(
            StoreError::OutsideProvider.to_string(),
            "store accessed outside provider scope"
        );
    }

    #[tokio::test]
    async fn test_accessor_outside_provider_fails_in_async_context() {
        assert!(matches!(
            use_timers_store(),
            Err(StoreError::OutsideProvider)
        ));
    }

    #[tokio::test]
    async fn test_children_observe_same_instance() {
        let provider = TimersProvider::new("test");
        let outer = provider.handle();

        provider
            .scope(async {
                let first = use_timers_store().unwrap();
                first.add_timer(Timer::new("Study", 600.0));

                let second = use_timers_store().unwrap();
                assert!(first.same_store(&second));
                assert_eq!(&*second.timers(), &[Timer::new("Study", 600.0)]);
                assert!(second.is_running());
            })
            .await;

        assert_eq!(outer.timers().len(), 1);
    }

    #[tokio::test]
    async fn test_stop_add_start_through_accessor() {
        TimersProvider::new("test")
            .scope(async {
                let store = use_timers_store().unwrap();
                store.stop_timers();
                store.add_timer(Timer::new("Break", 300.0));
                store.start_timers();

                let state = store.state();
                assert!(state.is_running);
                assert_eq!(&*state.timers, &[Timer::new("Break", 300.0)]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_scope_end_unmounts_store() {
        let provider = TimersProvider::new("test");
        let handle = provider.handle();

        let inner = provider.scope(async { use_timers_store() }).await.unwrap();

        assert!(inner.same_store(&handle));
        assert!(!handle.is_mounted());
        assert!(use_timers_store().is_err());
        handle.unmounted().await;
    }

    #[test]
    fn test_nested_provider_shadows_outer() {
        TimersProvider::new("outer").sync_scope(|| {
            let outer = use_timers_store().unwrap();
            outer.add_timer(Timer::new("Outer", 1.0));

            TimersProvider::new("inner").sync_scope(|| {
                let inner = use_timers_store().unwrap();
                assert!(!inner.same_store(&outer));
                assert!(inner.timers().is_empty());
                inner.stop_timers();
            });

            let again = use_timers_store().unwrap();
            assert!(again.same_store(&outer));
            assert!(again.is_running());
            assert_eq!(again.timers().len(), 1);
        });
    }

    #[test]
    fn test_with_state_seeds_store() {
        let seeded = TimersState {
            is_running: false,
            ..TimersState::new()
        };

        let running = TimersProvider::with_state("test", seeded)
            .sync_scope(|| use_timers_store().map(|store| store.is_running()));

        assert_eq!(running, Ok(false));
    }
}
