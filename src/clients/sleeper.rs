//! Injectable delay used between retry attempts.
//!
//! Production code waits with [`TokioSleeper`]. Tests substitute a
//! recording implementation so retry loops run without wall-clock waits.

use std::time::Duration;

use async_trait::async_trait;

/// Waits for a given duration before the next attempt.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use shopify_client::clients::Sleeper;
/// use std::sync::Mutex;
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct RecordingSleeper(Mutex<Vec<Duration>>);
///
/// #[async_trait]
/// impl Sleeper for RecordingSleeper {
///     async fn sleep(&self, duration: Duration) {
///         self.0.lock().unwrap().push(duration);
///     }
/// }
/// ```
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Completes once `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_sleeper_advances_timer() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_secs(2)).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
