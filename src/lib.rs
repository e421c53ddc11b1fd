//! # StegoCraft - steganography you can read
//!
//! StegoCraft hides a short text message inside a cover medium and reveals it
//! again. It is a teaching tool: every technique is a plain one-bit-per-unit
//! scheme that is easy to follow and easy to detect.
//!
//! ## Techniques
//!
//! - **Whitespace** ([`text`]): one bit per word boundary. A single space is
//!   `0`, a double space is `1`.
//! - **Image LSB** ([`stego::image`]): one bit per pixel, stored in the least
//!   significant bit of the red channel.
//! - **Audio LSB** ([`stego::audio`]): one bit per sample, stored in the least
//!   significant bit of the sample quantized to 16 bits.
//!
//! All three share the same message framing ([`codec`]): 8 bits per character,
//! big-endian, followed by the 16-bit terminator `1111111111111110`.
//!
//! ## Example Usage
//!
//! ```rust
//! use stegocraft::{Cover, DecodePolicy, RevealedMessage, TextCover};
//!
//! let cover = TextCover::parse(&"lorem ipsum ".repeat(40));
//! let stego = cover.embed("Hi").unwrap();
//!
//! let revealed = stego.extract(DecodePolicy::Lenient).unwrap();
//! assert_eq!(revealed, RevealedMessage::Found("Hi".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: message <-> bit sequence framing
//! - [`capacity`]: capacity planning
//! - [`text`]: whitespace steganography
//! - [`stego`]: image and audio LSB steganography
//! - [`medium`]: the [`Cover`] trait and the [`CoverMedium`] union
//! - [`config`]: TOML configuration

/// Framing convention version.
///
/// Version 2 terminates messages with the 16-bit pattern `1111111111111110`.
/// Version 1 used an 8-bit `11111111` terminator and cannot be read.
pub const CODEC_VERSION: u8 = 2;

/// Default number of audio samples scanned when revealing.
pub const DEFAULT_AUDIO_SCAN_LIMIT: usize = 100_000;

pub mod capacity;
pub mod codec;
pub mod config;
pub mod error;
pub mod medium;
pub mod stego;
pub mod text;

pub use capacity::{can_embed, plan, required_units, CapacityReport};
pub use codec::{BitSequence, DecodePolicy, Message, RevealedMessage, TERMINATOR};
pub use config::{ConfigError, StegoConfig};
pub use error::{MalformedReason, StegoError};
pub use medium::{Cover, CoverMedium, MediumKind};
pub use stego::{PixelCover, SampleCover};
pub use text::{TextCover, SAMPLE_COVERS};
