use std::future::Future;

use tokio::task::JoinSet;
use tracing::{debug, instrument, trace};

use crate::error::Result;

/// Runs every unit concurrently and collects their outputs.
///
/// All units are spawned before any is awaited, so they are in flight
/// together. Results arrive in completion order, which callers must treat as
/// unspecified. The first unit to fail decides the outcome: its error is
/// returned immediately and the remaining in-flight units are detached to
/// finish on their own, their results discarded. An empty unit set resolves
/// with an empty collection without suspending.
#[instrument(level = "trace", skip(units))]
pub async fn run_all<I, F, T>(units: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let mut workers = JoinSet::new();
    for unit in units {
        workers.spawn(unit);
    }
    debug!(unit_count = workers.len(), "Spawned all units");

    let mut results = Vec::with_capacity(workers.len());
    while let Some(joined) = workers.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            // The unit itself died (panicked) instead of reporting an error.
            Err(join_error) => {
                workers.detach_all();
                return Err(join_error.into());
            }
        };
        match outcome {
            Ok(value) => {
                trace!(pending = workers.len(), "Unit finished");
                results.push(value);
            }
            Err(error) => {
                workers.detach_all();
                return Err(error);
            }
        }
    }

    debug!(result_count = results.len(), "All units finished");
    Ok(results)
}
