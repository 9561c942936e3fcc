// SPDX-License-Identifier: MIT
//! Fixed-interval polling of a completion probe.
//!
//! Provides [`poll_until_finished`] — a loop that sleeps one interval,
//! evaluates the probe, and repeats while the probe reports the run as
//! still in progress.

use std::time::Duration;

use tracing::trace;

use crate::error::HarnessError;
use crate::probe::CompletionProbe;
use crate::signal::CompletionSignal;

/// Configuration for [`poll_until_finished`].
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive predicate evaluations.
    ///
    /// Default: 100 ms
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
        }
    }
}

impl PollConfig {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Create a config suitable for quick unit tests (no real waiting).
    pub fn instant() -> Self {
        Self {
            interval: Duration::from_millis(1),
        }
    }
}

/// Poll `probe` every `config.interval` until it yields a finished signal,
/// then return the runner's success flag.
///
/// There is deliberately no attempt cap, no backoff, and no overall
/// timeout: a page that never finishes keeps the harness polling forever.
/// Ticks are strictly serialized — each evaluation completes before the
/// next sleep starts — and the first finished signal ends the loop, so no
/// poll ever observes state after a terminal decision. Probe errors are
/// fatal and propagate immediately.
pub async fn poll_until_finished<P: CompletionProbe>(
    probe: &P,
    config: &PollConfig,
) -> Result<bool, HarnessError> {
    let mut attempt: u64 = 0;
    loop {
        tokio::time::sleep(config.interval).await;
        attempt += 1;
        match probe.poll().await? {
            CompletionSignal::Running => {
                trace!(attempt, "test runner still working");
            }
            CompletionSignal::Finished(success) => {
                trace!(attempt, success, "test runner finished");
                return Ok(success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_100ms() {
        assert_eq!(PollConfig::default().interval, Duration::from_millis(100));
    }

    #[test]
    fn instant_is_faster_than_default() {
        assert!(PollConfig::instant().interval < PollConfig::default().interval);
    }
}
