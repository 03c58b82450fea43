//! `numsign-server` entry point.
//!
//! Loads [`ServerConfig`] (file, then `NUMSIGN_*` env, then flags) and
//! serves until killed.

use std::path::PathBuf;

use clap::Parser;
use numsign_server::{ConfigOverrides, ServerConfig};

/// HTTP service classifying numbers as POSITIVE, NEGATIVE or ZERO
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Config file (default: $NUMSIGN_CONFIG or ~/.config/numsign/server.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind; 0 picks an ephemeral port
    #[arg(long)]
    port: Option<u16>,

    /// Number of worker threads
    #[arg(long)]
    workers: Option<usize>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            workers: self.workers,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::resolve(args.config.as_deref(), &args.overrides())?;

    tracing::info!(
        "numsign-server v{} starting ({} worker(s))",
        env!("CARGO_PKG_VERSION"),
        config.workers
    );
    numsign_server::serve(&config)?;
    Ok(())
}
