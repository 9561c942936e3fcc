// SPDX-License-Identifier: MIT
//! Harness configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::poll::PollConfig;

/// Knobs for a harness run.
///
/// Everything except the target URL lives here; the URL is the single
/// positional argument and is passed separately.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Delay between completion-predicate evaluations, in milliseconds.
    /// Defaults to 100.
    pub poll_interval_ms: u64,

    /// Run the browser without a visible window. Defaults to true.
    pub headless: bool,

    /// Viewport width in pixels. Defaults to 1280.
    pub viewport_width: u32,

    /// Viewport height in pixels. Defaults to 720.
    pub viewport_height: u32,

    /// Explicit browser binary to launch. `None` probes PATH for a known
    /// Chromium build.
    pub browser: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            browser: None,
        }
    }
}

impl HarnessConfig {
    /// Poll-loop view of this config.
    pub fn poll(&self) -> PollConfig {
        PollConfig::new(Duration::from_millis(self.poll_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.poll_interval_ms, 100);
        assert!(config.headless);
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 720);
        assert!(config.browser.is_none());
    }

    #[test]
    fn poll_view_carries_the_interval() {
        let config = HarnessConfig {
            poll_interval_ms: 250,
            ..HarnessConfig::default()
        };
        assert_eq!(config.poll().interval, Duration::from_millis(250));
    }
}
