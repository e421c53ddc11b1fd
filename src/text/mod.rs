//! Whitespace steganography.
//!
//! Bits live in the spacing between words: a single space is `0` and a double
//! space is `1`. Word content is never touched.

pub mod cover;
pub mod samples;
pub mod whitespace;

pub use cover::TextCover;
pub use samples::{sample_filler_words, SAMPLE_COVERS};
pub use whitespace::{hide_in_text, reveal_from_text};
