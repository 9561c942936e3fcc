// SPDX-License-Identifier: MIT
//! pagetest — load a URL in a headless browser, wait for the page's
//! embedded test runner to finish, exit 0 on pass and 1 on anything else.

use clap::Parser;
use pagetest::cli::{single_url, USAGE_DIAGNOSTIC};
use pagetest::config::HarnessConfig;
use pagetest::error::HarnessError;
use pagetest::outcome::RunOutcome;
use pagetest::runner::run_suite;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "pagetest",
    about = "Headless browser unit-test harness",
    version
)]
struct Args {
    /// Target URL to load and test (exactly one)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Milliseconds between completion-predicate evaluations
    #[arg(long, env = "PAGETEST_POLL_INTERVAL_MS", default_value_t = 100)]
    poll_interval_ms: u64,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Browser binary to launch instead of probing PATH
    #[arg(long, env = "PAGETEST_BROWSER")]
    browser: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PAGETEST_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Init once — must happen before any tracing calls. Logs go to
    // stderr; stdout belongs to the harness diagnostics.
    let log_level = args.log.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    // Single exit point: every path reduces to one code applied here.
    let code = match run(&args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!(err = %e, "harness run failed");
            eprintln!("Error: {e}");
            1
        }
    };
    std::process::exit(code);
}

async fn run(args: &Args) -> Result<RunOutcome, HarnessError> {
    let Some(url) = single_url(&args.urls) else {
        println!("{USAGE_DIAGNOSTIC}");
        return Ok(RunOutcome::UsageError);
    };

    let config = HarnessConfig {
        poll_interval_ms: args.poll_interval_ms,
        headless: !args.headed,
        browser: args.browser.clone(),
        ..HarnessConfig::default()
    };

    run_suite(&config, url).await
}
