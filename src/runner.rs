// SPDX-License-Identifier: MIT
//! Harness orchestration — the load → poll → verdict chain.

use futures_util::{Stream, StreamExt};
use tracing::{debug, info};

use crate::browser::PageSession;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::outcome::RunOutcome;
use crate::poll::{poll_until_finished, PollConfig};
use crate::probe::CompletionProbe;

/// Run the harness against `url`: load the page, relay its console, poll
/// its test runner, and reduce the verdict to a [`RunOutcome`].
///
/// The user-facing diagnostic lines go to stdout as the run progresses;
/// ambient tracing goes to stderr so the product output stays clean.
pub async fn run_suite(config: &HarnessConfig, url: &str) -> Result<RunOutcome, HarnessError> {
    println!("Loading URL: {url}");

    let session = PageSession::launch(config).await?;

    // Install the relay before the load so console output emitted while
    // the page boots is not lost.
    let mut console = session.console_messages().await?;

    if let Err(e) = session.navigate(url).await {
        debug!(err = %e, "navigation failed");
        println!("Failed to open {url}");
        drop(console);
        session.close().await;
        return Ok(RunOutcome::NavigationFailed);
    }

    println!("Running test.");
    let success = drive(&session, &mut console, &config.poll(), |line| {
        println!("Test console: {line}");
    })
    .await?;

    let outcome = if success {
        println!("Test succeeded.");
        RunOutcome::Passed
    } else {
        println!("*** Test failed! ***");
        RunOutcome::Failed
    };
    info!(outcome = outcome.as_str(), url, "test run finished");

    drop(console);
    session.close().await;
    Ok(outcome)
}

/// Drive the poll loop and the console relay on one task.
///
/// The poll future is pinned once and polled across iterations; console
/// messages take priority, so output queued before the terminal decision
/// is relayed before the verdict is returned. Once the verdict is in, the
/// loop exits and no further poll or relay happens.
pub async fn drive<P, S, F>(
    probe: &P,
    console: &mut S,
    poll_config: &PollConfig,
    mut relay: F,
) -> Result<bool, HarnessError>
where
    P: CompletionProbe,
    S: Stream<Item = String> + Unpin,
    F: FnMut(String),
{
    let verdict = poll_until_finished(probe, poll_config);
    tokio::pin!(verdict);

    loop {
        tokio::select! {
            biased;

            Some(line) = console.next() => {
                relay(line);
            }

            result = &mut verdict => {
                return result;
            }
        }
    }
}
