//! Bounded exponential-backoff retry for rate-limited model calls.
//!
//! This is the sole automatic-recovery path in the system. It keys on the
//! typed `RateLimited` variant — never on error-message strings — so the
//! transport decides what counts as rate limiting and this policy only
//! decides how patiently to wait it out.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::AnalysisError;

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

/// Wraps a fallible async operation with bounded exponential backoff.
///
/// Defaults: 3 retries starting at 1 s, doubling each time (1 s, 2 s, 4 s).
/// A non-rate-limit failure, or exhaustion of the retry budget, propagates
/// the failure unchanged to the caller.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: DEFAULT_INITIAL_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// Runs `operation`, retrying on `RateLimited` while attempts remain.
    /// The sleep before retry `n` (0-based) is `initial_delay * 2^n`.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> Result<T, AnalysisError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AnalysisError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_rate_limited() && attempt < self.max_retries => {
                    let delay = self.initial_delay * 2u32.pow(attempt);
                    warn!(
                        "rate limited, retrying in {}ms (retry {}/{})",
                        delay.as_millis(),
                        attempt + 1,
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
