use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Routes log records to stderr so stdout carries only rename lines.
/// Warnings such as online fallbacks are always shown; `verbose` adds the
/// per-bone debug trail.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(verbose)
        .without_time()
        .try_init();
    Ok(())
}
