//! File logging example
//!
//! Demonstrates level filtering, the mute switch, and the init/deinit cycle
//! against both the console and the log file.
//!
//! Run with: cargo run --example file_logging

use duolog::{debug, info, warn, Config, Level, Result};

fn main() -> Result<()> {
    duolog::init(Config::new("application.log", Level::Debug))?;

    info!("Application started");
    debug!("Loading configuration...");
    info!("Configuration loaded successfully");
    warn!("Using default settings for some options");

    // Raise the threshold; debug chatter stops reaching either sink
    duolog::set_level(Level::Info);
    debug!("Connection pool details (hidden)");

    for i in 1..=5 {
        info!("Processing item {}/5", i);
        if i == 3 {
            warn!("Item 3 took longer than expected");
        }
    }

    // Nothing gets through while muted, not even errors
    duolog::mute();
    info!("This message is suppressed");
    duolog::unmute();

    info!("All operations completed");

    duolog::deinit();

    println!("Check 'application.log' for the full log output");

    Ok(())
}
