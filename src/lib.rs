//! # Timers Store
//!
//! A reducer-backed store for a list of named timers and a running flag,
//! shared with a tree of consumers through a scoped provider.
//!
//! Timers here are display values. Nothing counts down or fires.
//!
//! ## Features
//!
//! - **Pure Reducer**: `(state, action) -> state` over three actions
//! - **Snapshots**: Old states stay valid after later commands
//! - **Scoped Provider**: Consumers reach the store without parameter threading
//! - **Change Notification**: Subscribe to every new state via a watch channel
//! - **Fail Fast**: Accessing the store outside a provider is an error, never a default
//!
//! ## Quick Start
//!
//! ```rust
//! use timers_store::{use_timers_store, Timer, TimersProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     TimersProvider::new("my_timers")
//!         .scope(async {
//!             let store = use_timers_store()?;
//!
//!             store.add_timer(Timer::new("Study", 600.0));
//!             store.stop_timers();
//!
//!             let state = store.state();
//!             assert!(!state.is_running);
//!             assert_eq!(state.timers.len(), 1);
//!             Ok::<(), Box<dyn std::error::Error>>(())
//!         })
//!         .await
//! }
//! ```

mod error;
mod provider;
mod state;
mod store;
mod timer;

pub use error::StoreError;
pub use provider::{use_timers_store, TimersProvider};
pub use state::{reduce, TimersAction, TimersState};
pub use store::{TimersHandle, TimersStore};
pub use timer::Timer;
