use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Awaits `operation`; on error logs a warning tagged with `component` and
/// returns `fallback()` instead.
pub async fn resilient<T, E, Fut, F>(component: &'static str, operation: Fut, fallback: F) -> T
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> T,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            warn!(component = component, error = %e, "External call failed, using fallback");
            fallback()
        }
    }
}
