use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::{config::Config, error::ConfigError};

mod clips;
mod cmds;
mod config;
mod error;
mod ffmpeg;

/// Concatenates every ordered triple of clips into a short, skipping shorts
/// that already exist.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct CombinerCli {}

fn log_level() -> log::LevelFilter {
    std::env::var("CLIP_COMBINER_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

fn run() -> Result<()> {
    simplelog::SimpleLogger::init(log_level(), Default::default())?;

    let config = Config::default();
    log::debug!("{:#?}", config);
    cmds::handle_commands(&config)?;
    println!("\nDone! Shorts created based on configuration.");
    Ok(())
}

fn main() -> ExitCode {
    let _args = CombinerCli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            match e.downcast_ref::<ConfigError>() {
                Some(e) => ExitCode::from(e.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}
