//! Sample LSB steganography.
//!
//! Supports:
//! - Image LSB steganography (PNG, BMP), red channel only
//! - Audio LSB steganography (WAV), first channel only

pub mod audio;
pub mod image;

pub use self::audio::SampleCover;
pub use self::image::PixelCover;
