//! rice-dash — an always-on-top grid of launcher icons and live system stats.
//!
//! Run with:  `RUST_LOG=info rice-dash [path/to/widgets.json]`

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rice-dash v{} starting", env!("CARGO_PKG_VERSION"));

    let widgets_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(dash_config::default_widgets_path);

    dash_window::run(widgets_path.clone())
        .with_context(|| format!("dashboard failed (widget list: {})", widgets_path.display()))
}
