//! sendkeys - translate a string to QEMU monitor "sendkey" commands
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        Args (clap)  →  Settings          │
//! ├──────────────────────────────────────────┤
//! │  Tokenizer  →  Key map  →  Sender        │
//! │                              ↓           │
//! │          stdout  |  sh -c COMMAND        │
//! └──────────────────────────────────────────┘
//! ```

mod cli;
mod constants;
mod error;
mod keys;
mod sender;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::Settings;
use sender::{CommandSink, Sender, StreamSink};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit here, before anything is emitted
    let args = cli::Args::parse();
    let settings = Settings::from(args);

    info!(
        "sendkeys: delay={:?} command={:?} input={:?}",
        settings.delay, settings.command, settings.input
    );

    let sent = match settings.command {
        Some(command) => Sender::new(CommandSink::new(command), settings.delay)
            .run(&settings.input)
            .context("Failed to pipe key commands")?,
        None => Sender::new(StreamSink::new(std::io::stdout().lock()), settings.delay)
            .run(&settings.input)
            .context("Failed to write key commands")?,
    };

    info!("sendkeys: {} key commands sent", sent);
    Ok(())
}
