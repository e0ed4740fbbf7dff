use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_signals::cli::{run, Cli};
use resume_signals::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (.env, then process environment)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for JSON output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-signals v{}", env!("CARGO_PKG_VERSION"));

    let output = run(cli.command, &config, &mut std::io::stdin().lock()).map_err(|e| {
        error!(code = e.code(), "{e}");
        e
    })?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;

    Ok(())
}
