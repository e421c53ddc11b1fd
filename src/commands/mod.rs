//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod hide;
mod reveal;

pub use capacity::CapacityCommand;
pub use hide::HideCommand;
pub use reveal::RevealCommand;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use stegocraft::{CoverMedium, MediumKind, StegoConfig, TextCover, SAMPLE_COVERS};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, config: &StegoConfig) -> Result<()>;
}

/// Loads a cover from a file, or a built-in sample text (1-based).
fn load_cover(
    path: Option<&PathBuf>,
    sample: Option<u8>,
    kind: Option<MediumKind>,
) -> Result<CoverMedium> {
    match (path, sample) {
        (_, Some(n)) => {
            let text = SAMPLE_COVERS
                .get(usize::from(n).saturating_sub(1))
                .with_context(|| format!("No sample cover {}", n))?;
            Ok(CoverMedium::Text(TextCover::parse(text)))
        }
        (Some(path), None) => load_medium(path, kind),
        (None, None) => bail!("Provide a cover file or --sample"),
    }
}

fn load_medium(path: &Path, kind: Option<MediumKind>) -> Result<CoverMedium> {
    CoverMedium::from_file(path, kind)
        .with_context(|| format!("Failed to read cover from {}", path.display()))
}
