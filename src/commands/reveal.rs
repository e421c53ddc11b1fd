//! Reveal command - extract a hidden message from a stego file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use stegocraft::{Cover, CoverMedium, DecodePolicy, MediumKind, RevealedMessage, StegoConfig};

use super::{load_medium, CommandExecutor};

/// Reveal a message hidden in a file.
#[derive(Args, Debug)]
pub struct RevealCommand {
    /// Path to the stego file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Medium kind: text, image or audio (detected from extension by default)
    #[arg(short, long)]
    pub kind: Option<MediumKind>,

    /// Maximum number of units (boundaries, pixels, samples) to scan
    #[arg(long)]
    pub max_units: Option<usize>,

    /// Fail on a missing terminator or unprintable characters
    #[arg(long)]
    pub strict: bool,
}

impl RevealCommand {
    fn policy(&self, config: &StegoConfig) -> DecodePolicy {
        if self.strict {
            DecodePolicy::Strict
        } else {
            config.decode_policy
        }
    }
}

impl RevealCommand {
    /// `--max-units`, then the configured limit, then the medium's default.
    fn scan_limit(&self, stego: &CoverMedium, config: &StegoConfig) -> usize {
        self.max_units
            .or_else(|| config.scan_limit_for(stego.kind()))
            .unwrap_or_else(|| stego.default_scan_limit())
    }

    /// Loads the stego file and decodes whatever it carries.
    pub fn reveal(&self, config: &StegoConfig) -> Result<RevealedMessage> {
        let stego = load_medium(&self.input, self.kind)?;

        let limit = self.scan_limit(&stego, config);
        log::debug!("scanning up to {} units of {} medium", limit, stego.kind());

        stego
            .extract_within(limit, self.policy(config))
            .context("Failed to reveal message")
    }
}

impl CommandExecutor for RevealCommand {
    fn execute(&self, config: &StegoConfig) -> Result<()> {
        let revealed = self.reveal(config)?;
        println!("{}", revealed);
        Ok(())
    }
}
