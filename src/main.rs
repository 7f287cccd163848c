//! shortcut-probe: resolve key presses against a shortcut binding table
//!
//! Reads one JSON request per line on stdin and writes one JSON response
//! per line on stdout. Logs go to stderr.
//!
//! ```text
//! $ echo '{"type":"key","key":"z","modifiers":["Control"]}' | shortcut-probe
//! {"type":"hit","bindings":["undo"]}
//! ```

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hotspot_input::config::Config;
use hotspot_input::lifecycle::ShutdownSignal;
use hotspot_input::probe::Probe;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize logging; development builds default to debug output
    let default_filter = if config.build_mode.is_dev() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter))
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        build_mode = %config.build_mode,
        "shortcut-probe starting"
    );

    let bindings = config.load_bindings()?;
    info!(
        count = bindings.len(),
        source = ?config.bindings_path,
        "bindings loaded"
    );

    let probe = Probe::new(bindings);
    let shutdown = ShutdownSignal::new();

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = probe.serve(stdin, stdout) => {
            match result {
                Ok(()) => info!("input closed"),
                Err(e) => error!(?e, "probe error"),
            }
        }

        _ = async {
            if let Err(e) = shutdown.wait().await {
                warn!(?e, "failed to register signal handlers, running until input closes");
                std::future::pending::<()>().await;
            }
        } => {
            info!("shutdown signal received");
        }
    }

    info!("shortcut-probe stopped");

    Ok(())
}
