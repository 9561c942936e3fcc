// SPDX-License-Identifier: MIT
//! The capability the page under test must expose.

use async_trait::async_trait;

use crate::error::HarnessError;
use crate::signal::CompletionSignal;

/// In-page expression the harness polls. `G_testRunner` is the well-known
/// global the page under test installs; the harness only ever reads it.
pub const COMPLETION_PREDICATE: &str =
    r#"G_testRunner.isFinished() ? G_testRunner.isSuccess() : "_running""#;

/// A side-effect-free read of the page's completion state.
///
/// The live browser session implements this against the loaded page; tests
/// inject scripted probes so the poll loop runs without a browser or real
/// timers.
#[async_trait]
pub trait CompletionProbe {
    async fn poll(&self) -> Result<CompletionSignal, HarnessError>;
}
