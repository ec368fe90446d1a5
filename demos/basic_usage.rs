//! Basic logger usage example
//!
//! Demonstrates the per-level macros against the process-wide logger.
//!
//! Run with: cargo run --example basic_usage

use duolog::{debug, error, fatal, info, trace, warn, Config, Level, Result};

fn main() -> Result<()> {
    duolog::init(Config::new("logs.txt", Level::Trace))?;

    trace!("trace message");
    debug!("debug message");
    info!("info message");
    warn!("warn message");
    error!("error message");
    fatal!("fatal message");

    duolog::deinit();

    Ok(())
}
