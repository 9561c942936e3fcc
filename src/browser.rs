// SPDX-License-Identifier: MIT
//! Chromium page session — the one shared resource of a harness run.
//!
//! Strategy:
//!   1. `detect_browser()` searches PATH for a supported browser binary
//!      (skipped when an explicit binary is configured).
//!   2. `PageSession::launch()` starts it headless over the DevTools
//!      protocol and spawns the event-handler task the connection needs to
//!      make progress.
//!   3. `navigate()` drives the single page load; `console_messages()`
//!      exposes the page's console as a stream of formatted lines; the
//!      `CompletionProbe` impl re-evaluates the completion predicate on
//!      every poll.
//!
//! The session is created once and owned for the rest of the process
//! lifetime; there is no re-navigation and no second page.

use std::path::PathBuf;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig, HeadlessMode};
use chromiumoxide::cdp::js_protocol::runtime::{EventConsoleApiCalled, RemoteObject};
use chromiumoxide::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::probe::{CompletionProbe, COMPLETION_PREDICATE};
use crate::signal::CompletionSignal;

/// Browser binaries to probe on PATH, in preference order.
const CANDIDATE_BROWSERS: &[&str] = &["chromium", "chrome", "google-chrome", "chromium-browser"];

/// One launched browser plus the single page it navigates.
pub struct PageSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl PageSession {
    /// Launch a browser and open a blank page.
    ///
    /// Fails with [`HarnessError::NoBrowser`] when no binary can be found
    /// and with [`HarnessError::Session`] when the process or the protocol
    /// handshake cannot be brought up.
    pub async fn launch(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let executable = match &config.browser {
            Some(path) => path.clone(),
            None => detect_browser().ok_or(HarnessError::NoBrowser)?,
        };
        debug!(browser = %executable.display(), "launching browser");

        let browser_config = BrowserConfig::builder()
            .chrome_executable(executable)
            .no_sandbox()
            .headless_mode(if config.headless {
                HeadlessMode::True
            } else {
                HeadlessMode::False
            })
            .window_size(config.viewport_width, config.viewport_height)
            .build()
            .map_err(HarnessError::Session)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| HarnessError::Session(e.to_string()))?;

        // The handler stream must be driven for any protocol call to
        // complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!(err = %e, "browser event error");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| HarnessError::Session(e.to_string()))?;

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Load `url` and wait for the navigation to finish.
    ///
    /// Any load problem is a terminal [`HarnessError::Navigation`]; there
    /// is no retry, and no timeout either — a server that never answers
    /// keeps the harness waiting.
    pub async fn navigate(&self, url: &str) -> Result<(), HarnessError> {
        let nav_err = |e: chromiumoxide::error::CdpError| HarnessError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        };
        self.page.goto(url).await.map_err(nav_err)?;
        self.page.wait_for_navigation().await.map_err(nav_err)?;
        debug!(url, "navigation complete");
        Ok(())
    }

    /// The page's console output as a stream of formatted lines, one per
    /// `console.*` call, in emission order.
    ///
    /// Install this before navigating so output emitted while the page
    /// boots is not lost.
    pub async fn console_messages(
        &self,
    ) -> Result<impl futures_util::Stream<Item = String> + Unpin, HarnessError> {
        let events = self
            .page
            .event_listener::<EventConsoleApiCalled>()
            .await
            .map_err(|e| HarnessError::Session(e.to_string()))?;
        Ok(events.map(|event| format_console_args(&event.args)))
    }

    /// Close the browser and stop the event-handler task.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            debug!(err = %e, "browser close failed");
        }
        self.handler_task.abort();
    }
}

#[async_trait]
impl CompletionProbe for PageSession {
    /// One fresh read of the page's test-runner state.
    async fn poll(&self) -> Result<CompletionSignal, HarnessError> {
        let outcome = self
            .page
            .evaluate(COMPLETION_PREDICATE)
            .await
            .map_err(|e| HarnessError::Evaluate(e.to_string()))?;
        Ok(CompletionSignal::from_value(outcome.value()))
    }
}

/// Find the first known browser binary on PATH, candidates in preference
/// order.
fn detect_browser() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for candidate in CANDIDATE_BROWSERS {
        for dir in std::env::split_paths(&path_var) {
            let full = dir.join(candidate);
            if full.is_file() {
                debug!(browser = %full.display(), "headless browser detected on PATH");
                return Some(full);
            }
        }
    }
    None
}

/// Render console-call arguments the way a console would print them:
/// values joined by single spaces, strings bare (no quotes), other
/// serializable values as JSON, remote-only objects by their protocol
/// description.
fn format_console_args(args: &[RemoteObject]) -> String {
    args.iter()
        .map(format_remote_object)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_remote_object(obj: &RemoteObject) -> String {
    if let Some(value) = &obj.value {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    } else if let Some(description) = &obj.description {
        description.clone()
    } else {
        "undefined".to_string()
    }
}
