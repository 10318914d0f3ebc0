use std::time::Instant;

use tracing::debug;

/// Runs file IO inline on the UI thread and logs how long it took.
pub fn run_blocking<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    debug!(label, elapsed_ms = started.elapsed().as_millis() as u64, "blocking task done");
    result
}
