//! Hide command - embed a message in a cover file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use stegocraft::{can_embed, Cover, CoverMedium, MediumKind, Message, StegoConfig};

use super::{load_cover, CommandExecutor};

/// Hide a message in a cover file.
///
/// The technique follows the cover's extension unless --kind is given:
/// - .txt, .md: spacing between words (single space = 0, double space = 1)
/// - .png, .bmp: least significant bit of each pixel's red channel
/// - .wav: least significant bit of each 16-bit sample
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Path to the cover file
    #[arg(short, long, required_unless_present = "sample", conflicts_with = "sample")]
    pub cover: Option<PathBuf>,

    /// Use built-in sample text 1, 2 or 3 as the cover
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub sample: Option<u8>,

    /// Message to hide (printable ASCII survives reveal)
    #[arg(short, long)]
    pub message: String,

    /// Where to write the stego file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Medium kind: text, image or audio (detected from extension by default)
    #[arg(short, long)]
    pub kind: Option<MediumKind>,

    /// Lengthen a text cover with filler words when it is too short
    #[arg(long)]
    pub fill: bool,
}

impl HideCommand {
    /// Embeds the message and writes the stego file, returning the stego medium.
    pub fn hide(&self, config: &StegoConfig) -> Result<CoverMedium> {
        let mut cover = load_cover(self.cover.as_ref(), self.sample, self.kind)?;
        let message = Message::new(&self.message).context("Message cannot be hidden")?;

        let report = can_embed(&cover, &message);
        if !report.fits && self.fill {
            cover = match cover {
                CoverMedium::Text(text) => {
                    log::info!("cover short by {} words, adding filler", report.deficit());
                    let filler = config.filler();
                    CoverMedium::Text(text.extend_with_filler(report.deficit(), &filler[..]))
                }
                other => bail!("--fill only works with text covers, got {}", other.kind()),
            };
        }

        // Reveal reads no further than the configured scan limit.
        let report = can_embed(&cover, &message);
        let required = report.required;
        let limit = config
            .scan_limit_for(cover.kind())
            .unwrap_or_else(|| cover.default_scan_limit());
        if report.fits && required > limit {
            bail!(
                "Message needs {} units but reveal scans only {} of a {} medium; \
                 raise the {} scan limit in the config to at least {}",
                required,
                limit,
                cover.kind(),
                cover.kind(),
                required
            );
        }

        let stego = cover
            .embed_message(&message)
            .context("Failed to hide message")?;

        stego
            .save(&self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        Ok(stego)
    }
}

impl CommandExecutor for HideCommand {
    fn execute(&self, config: &StegoConfig) -> Result<()> {
        let stego = self.hide(config)?;
        let message = Message::new(&self.message)?;

        let report = can_embed(&stego, &message);
        println!(
            "Hidden {} characters in {} cover ({} of {} units used)",
            message.len(),
            stego.kind(),
            report.required,
            report.available
        );
        println!("Wrote {}", self.output.display());
        if stego.kind() != MediumKind::Text {
            eprintln!("WARNING: re-encoding this file with a lossy format destroys the message.");
        }

        Ok(())
    }
}
