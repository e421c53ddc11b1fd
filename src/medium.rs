//! Cover media.
//!
//! [`Cover`] is implemented by every medium: it knows how many units it has and
//! how to read and write one bit per unit. Planning, framing and decoding are
//! shared through the trait's provided methods.
//!
//! [`CoverMedium`] wraps the three concrete covers for callers that pick the
//! technique at runtime (e.g. from a file extension).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::capacity::can_embed;
use crate::codec::{self, BitSequence, DecodePolicy, Message, RevealedMessage};
use crate::error::StegoError;
use crate::stego::{PixelCover, SampleCover};
use crate::text::TextCover;

/// A medium that carries one bit per addressable unit.
pub trait Cover: Sized {
    /// Units available for embedding.
    fn available_units(&self) -> usize;

    /// Returns a copy with `bits` written into the leading units.
    ///
    /// Callers guarantee `bits.len() <= self.available_units()`.
    fn write_bits(&self, bits: &BitSequence) -> Self;

    /// Reads one bit from each of the first `max_units` units.
    fn read_bits(&self, max_units: usize) -> BitSequence;

    /// How many units [`Cover::extract`] scans.
    fn default_scan_limit(&self) -> usize {
        self.available_units()
    }

    /// Hides `message` and returns the stego medium.
    fn embed(&self, message: &str) -> Result<Self, StegoError> {
        let message = Message::new(message)?;
        self.embed_message(&message)
    }

    /// Hides an already validated message.
    ///
    /// Fails with [`StegoError::InsufficientCapacity`] before anything is written.
    fn embed_message(&self, message: &Message) -> Result<Self, StegoError> {
        let report = can_embed(self, message);
        log::debug!(
            "planning {} characters: {} units required, {} available",
            message.len(),
            report.required,
            report.available
        );
        report.ensure_fits()?;
        if report.required > self.default_scan_limit() {
            log::warn!(
                "message needs {} units but extract scans {}; use extract_within({})",
                report.required,
                self.default_scan_limit(),
                report.required
            );
        }

        let bits = codec::encode(message);
        Ok(self.write_bits(&bits))
    }

    /// Reveals a message, scanning [`Cover::default_scan_limit`] units.
    fn extract(&self, policy: DecodePolicy) -> Result<RevealedMessage, StegoError> {
        self.extract_within(self.default_scan_limit(), policy)
    }

    /// Reveals a message, scanning at most `max_units` units.
    fn extract_within(
        &self,
        max_units: usize,
        policy: DecodePolicy,
    ) -> Result<RevealedMessage, StegoError> {
        let bits = self.read_bits(max_units);
        log::debug!("read {} bits from at most {} units", bits.len(), max_units);
        codec::decode(&bits, policy)
    }
}

/// The technique a cover uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediumKind {
    Text,
    Image,
    Audio,
}

impl MediumKind {
    /// Detects the kind from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, StegoError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" | "text" | "md" => Ok(MediumKind::Text),
            "png" | "bmp" => Ok(MediumKind::Image),
            "wav" | "wave" => Ok(MediumKind::Audio),
            _ => Err(StegoError::UnsupportedMediumFormat(format!(
                "cannot tell the medium of {} from its extension",
                path.display()
            ))),
        }
    }
}

impl FromStr for MediumKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(MediumKind::Text),
            "image" | "img" => Ok(MediumKind::Image),
            "audio" | "wav" => Ok(MediumKind::Audio),
            other => Err(format!(
                "unknown medium '{}', expected text, image or audio",
                other
            )),
        }
    }
}

impl fmt::Display for MediumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediumKind::Text => "text",
            MediumKind::Image => "image",
            MediumKind::Audio => "audio",
        };
        f.write_str(name)
    }
}

/// Any supported cover.
#[derive(Debug, Clone)]
pub enum CoverMedium {
    Text(TextCover),
    Pixel(PixelCover),
    Sample(SampleCover),
}

impl CoverMedium {
    /// Loads a cover, detecting its kind from the extension unless given.
    pub fn from_file(path: &Path, kind: Option<MediumKind>) -> Result<Self, StegoError> {
        let kind = match kind {
            Some(kind) => kind,
            None => MediumKind::from_path(path)?,
        };

        match kind {
            MediumKind::Text => Ok(CoverMedium::Text(TextCover::from_file(path)?)),
            MediumKind::Image => Ok(CoverMedium::Pixel(PixelCover::from_file(path)?)),
            MediumKind::Audio => Ok(CoverMedium::Sample(SampleCover::from_file(path)?)),
        }
    }

    /// Writes the medium in its native format.
    ///
    /// The extension of `path` must name the same kind, so the file can be
    /// loaded back without an explicit kind.
    pub fn save(&self, path: &Path) -> Result<(), StegoError> {
        let target = MediumKind::from_path(path)?;
        if target != self.kind() {
            return Err(StegoError::UnsupportedMediumFormat(format!(
                "cannot write a {} medium to {}, which names a {} file",
                self.kind(),
                path.display(),
                target
            )));
        }

        match self {
            CoverMedium::Text(cover) => cover.save(path),
            CoverMedium::Pixel(cover) => cover.save(path),
            CoverMedium::Sample(cover) => cover.save(path),
        }
    }

    pub fn kind(&self) -> MediumKind {
        match self {
            CoverMedium::Text(_) => MediumKind::Text,
            CoverMedium::Pixel(_) => MediumKind::Image,
            CoverMedium::Sample(_) => MediumKind::Audio,
        }
    }
}

impl Cover for CoverMedium {
    fn available_units(&self) -> usize {
        match self {
            CoverMedium::Text(cover) => cover.available_units(),
            CoverMedium::Pixel(cover) => cover.available_units(),
            CoverMedium::Sample(cover) => cover.available_units(),
        }
    }

    fn write_bits(&self, bits: &BitSequence) -> Self {
        match self {
            CoverMedium::Text(cover) => CoverMedium::Text(cover.write_bits(bits)),
            CoverMedium::Pixel(cover) => CoverMedium::Pixel(cover.write_bits(bits)),
            CoverMedium::Sample(cover) => CoverMedium::Sample(cover.write_bits(bits)),
        }
    }

    fn read_bits(&self, max_units: usize) -> BitSequence {
        match self {
            CoverMedium::Text(cover) => cover.read_bits(max_units),
            CoverMedium::Pixel(cover) => cover.read_bits(max_units),
            CoverMedium::Sample(cover) => cover.read_bits(max_units),
        }
    }

    fn default_scan_limit(&self) -> usize {
        match self {
            CoverMedium::Text(cover) => cover.default_scan_limit(),
            CoverMedium::Pixel(cover) => cover.default_scan_limit(),
            CoverMedium::Sample(cover) => cover.default_scan_limit(),
        }
    }
}

impl From<TextCover> for CoverMedium {
    fn from(cover: TextCover) -> Self {
        CoverMedium::Text(cover)
    }
}

impl From<PixelCover> for CoverMedium {
    fn from(cover: PixelCover) -> Self {
        CoverMedium::Pixel(cover)
    }
}

impl From<SampleCover> for CoverMedium {
    fn from(cover: SampleCover) -> Self {
        CoverMedium::Sample(cover)
    }
}
