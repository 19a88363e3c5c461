//! trellis - a terminal project board with drag-driven status transitions.
//!
//! This is the main binary that loads configuration, initializes logging,
//! and launches the TUI application.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use trellis_config::Config;
use trellis_protocol::{Registry, demo::seed_demo_items};
use trellis_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_logging()?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // One registry per process, handed to the app by reference
    let registry = Registry::shared();
    if config.demo {
        seed_demo_items(&registry).context("seeding demo items")?;
    }

    let mut terminal = terminal::setup_terminal(config.mouse)?;
    let mut app = App::new(registry).with_tick_rate(config.tick_rate());

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Initializes tracing with an env-filtered layer writing to a log file.
///
/// Logging goes to `trellis.log` instead of stderr so the alternate screen
/// stays intact. Set `TRELLIS_LOG` to adjust the filter; logging is off by
/// default.
fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var("TRELLIS_LOG") else {
        return Ok(());
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("trellis.log")
        .context("opening trellis.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
