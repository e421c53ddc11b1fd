//! StegoCraft - steganography you can read
//!
//! A CLI for hiding short messages in text spacing, image pixels or audio samples.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use commands::{CapacityCommand, CommandExecutor, HideCommand, RevealCommand};
use stegocraft::StegoConfig;

/// StegoCraft - steganography you can read
///
/// Hides a message in the spacing between words of a text, in the red channel
/// of an image (PNG, BMP) or in the samples of a WAV file, one bit at a time.
#[derive(Parser)]
#[command(name = "stegocraft")]
#[command(version)]
#[command(about = "Hide and reveal messages with whitespace, image and audio LSB steganography")]
#[command(long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.stegocraft/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (shows capacity planning and bit counts)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a cover file
    Hide(HideCommand),

    /// Reveal a message hidden in a file
    ///
    /// NOTE: Unless --strict is given this never fails on odd input, it prints
    /// whatever printable characters it finds or "No hidden message found".
    Reveal(RevealCommand),

    /// Show how many units a cover has and how many a message needs
    Capacity(CapacityCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("Failed to initialize logging")?;

    let config = match &cli.config {
        Some(path) => StegoConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StegoConfig::load().context("Failed to load config")?,
    };

    match cli.command {
        Commands::Hide(cmd) => cmd.execute(&config),
        Commands::Reveal(cmd) => cmd.execute(&config),
        Commands::Capacity(cmd) => cmd.execute(&config),
    }
}
