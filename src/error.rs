// SPDX-License-Identifier: MIT
//! Harness error taxonomy.
//!
//! Every variant is fatal: the harness prints a diagnostic, logs the
//! cause, and exits 1. Nothing here is retried or recovered from.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// No Chrome/Chromium binary found on PATH and none was configured.
    #[error(
        "no headless browser found on PATH; install Chromium or Chrome, or pass --browser <path>"
    )]
    NoBrowser,

    /// The browser could not be launched or the session could not be set up.
    #[error("browser session error: {0}")]
    Session(String),

    /// The page load did not complete successfully.
    #[error("failed to open {url}: {reason}")]
    Navigation { url: String, reason: String },

    /// The completion predicate could not be evaluated in the page.
    #[error("failed to evaluate completion predicate: {0}")]
    Evaluate(String),
}
