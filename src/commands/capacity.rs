//! Capacity command - check whether a message fits a cover.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use stegocraft::{can_embed, CoverMedium, MediumKind, Message, StegoConfig};

use super::{load_cover, CommandExecutor};

/// Show how many units a cover has and how many a message needs.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Path to the cover file
    #[arg(short, long, required_unless_present = "sample", conflicts_with = "sample")]
    pub cover: Option<PathBuf>,

    /// Use built-in sample text 1, 2 or 3 as the cover
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub sample: Option<u8>,

    /// Message to plan for
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Medium kind: text, image or audio (detected from extension by default)
    #[arg(short, long)]
    pub kind: Option<MediumKind>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self, _config: &StegoConfig) -> Result<()> {
        let cover = load_cover(self.cover.as_ref(), self.sample, self.kind)?;
        let message = Message::new(&self.message).context("Message cannot be hidden")?;
        let report = can_embed(&cover, &message);

        println!("Medium:    {}", cover.kind());
        if let CoverMedium::Sample(audio) = &cover {
            println!(
                "Audio:     {} samples at {} Hz ({:.2}s)",
                audio.sample_count(),
                audio.sample_rate(),
                audio.duration_secs()
            );
        }
        println!("Available: {} units", report.available);
        println!("Required:  {} units ({} characters)", report.required, message.len());
        if report.fits {
            println!("Fits:      yes ({} units spare)", report.spare());
        } else {
            println!("Fits:      no (short by {} units)", report.deficit());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stegocraft::SampleCover;

    #[test]
    fn test_capacity_for_sample_and_audio() {
        let config = StegoConfig::default();
        let sample = CapacityCommand {
            cover: None,
            sample: Some(3),
            message: "far too long for this little cover".to_string(),
            kind: None,
        };
        sample.execute(&config).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        SampleCover::new(vec![0.2; 4000], 8000).save(&path).unwrap();
        let audio = CapacityCommand {
            cover: Some(path),
            sample: None,
            message: "hello".to_string(),
            kind: None,
        };
        audio.execute(&config).unwrap();
    }

    #[test]
    fn test_capacity_rejects_wide_message() {
        let cmd = CapacityCommand {
            cover: None,
            sample: Some(1),
            message: "snow \u{2603}".to_string(),
            kind: None,
        };
        assert!(cmd.execute(&StegoConfig::default()).is_err());
    }
}
