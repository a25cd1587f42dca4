//! Shrinkray - batch image resizing web service.
//!
//! Accepts a batch of image URLs and/or direct uploads, resizes each to a
//! target width, and returns a single JPEG or a zip archive.
//!
//! # Usage
//!
//! ```bash
//! # Serve with defaults (127.0.0.1:8080)
//! shrinkray
//!
//! # Custom bind and config
//! shrinkray --host 0.0.0.0 --port 9000 --config ./shrinkray.toml
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Shrinkray - batch image resizing web service.
#[derive(Parser, Debug)]
#[command(name = "shrinkray")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicitly passed config path must load; the default location
    // falls back to defaults with a warning.
    // Note: logging isn't initialized yet, so use eprintln for the warning.
    let mut config = match &cli.config {
        Some(path) => shrinkray_core::Config::load_from(path)?,
        None => match shrinkray_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration."
                );
                shrinkray_core::Config::default()
            }
        },
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    shrinkray::logging::init_from_config(&config, cli.verbose, cli.json_logs);
    tracing::debug!("Shrinkray v{}", shrinkray_core::VERSION);

    shrinkray::server::run(config).await
}
