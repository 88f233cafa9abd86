//! Basic usage example for the timers store

use timers_store::{use_timers_store, Timer, TimersHandle, TimersProvider, TimersState};

fn render(state: &TimersState) {
    let status = if state.is_running { "running" } else { "stopped" };
    println!("Timers ({}):", status);
    for timer in state.timers.iter() {
        println!("  {} - {}s", timer.name, timer.duration);
    }
}

/// A consumer that redraws on every state change until the store unmounts
async fn watch_store(store: TimersHandle) {
    let mut rx = store.subscribe();
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&rx.borrow_and_update());
            }
            _ = store.unmounted() => break,
        }
    }
    println!("Store unmounted, watcher done");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    TimersProvider::new("example_timers")
        .scope(async {
            let store = use_timers_store()?;

            // Scopes don't follow spawn, so hand the watcher its own handle
            let watcher = tokio::spawn(watch_store(store.clone()));

            store.add_timer(Timer::new("Study", 600.0));
            tokio::task::yield_now().await;
            store.add_timer(Timer::new("Break", 300.0));
            tokio::task::yield_now().await;
            store.stop_timers();
            tokio::task::yield_now().await;

            Ok::<_, Box<dyn std::error::Error>>(watcher)
        })
        .await?
        .await?;

    // Outside the provider the store is unreachable
    match use_timers_store() {
        Ok(_) => println!("unexpected: store reachable outside provider"),
        Err(e) => println!("As expected: {}", e),
    }

    Ok(())
}
