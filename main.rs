use std::io::{self, Write};

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use word_index::{demo, Result};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // stdout carries only the tables
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!("word-index demo started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&mut out) {
        error!("demo failed: {}", e);
        return Err(e);
    }
    out.flush()?;
    Ok(())
}
