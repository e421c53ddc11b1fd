//! Message framing shared by every technique.
//!
//! A message is written as one byte per character (big-endian bit order)
//! followed by [`TERMINATOR`]. Extraction scans for the first terminator and
//! throws away whatever comes after it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedReason, StegoError};

/// End-of-message marker, `1111111111111110`.
pub const TERMINATOR: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// Bits used per character.
pub const BITS_PER_CHAR: usize = 8;

/// Text shown when nothing could be revealed.
pub const NO_MESSAGE_FOUND: &str = "No hidden message found";

/// Returns true for byte values the decoder keeps: printable ASCII, LF and CR.
pub fn is_revealable(code: u8) -> bool {
    matches!(code, 32..=126 | 10 | 13)
}

/// A message whose characters all fit in one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    len: usize,
}

impl Message {
    /// Validates `text` for embedding.
    ///
    /// Characters above U+00FF are rejected. Characters that fit in a byte but
    /// are dropped by the decoder are accepted with a warning.
    pub fn new(text: &str) -> Result<Self, StegoError> {
        let mut len = 0;
        for (position, character) in text.chars().enumerate() {
            let code = character as u32;
            if code > 0xFF {
                return Err(StegoError::UnsupportedCharacter {
                    character,
                    position,
                });
            }
            if !is_revealable(code as u8) {
                log::warn!(
                    "character {:?} at position {} will be dropped on reveal",
                    character,
                    position
                );
            }
            len += 1;
        }

        Ok(Self {
            text: text.to_string(),
            len,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes of UTF-8).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character codes in order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        // Validated in `new`, every code fits in a byte.
        self.text.chars().map(|c| c as u32 as u8)
    }
}

/// An ordered sequence of bits, one `0` or `1` per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Parses a string of `0` and `1` characters. Returns `None` on any other character.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Some(0),
                '1' => Some(1),
                _ => None,
            })
            .collect::<Option<Vec<u8>>>()
            .map(|bits| Self { bits })
    }

    /// Appends one bit. Any non-zero value counts as `1`.
    pub fn push(&mut self, bit: u8) {
        self.bits.push(u8::from(bit != 0));
    }

    /// Appends the 8 bits of `byte`, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        for shift in (0..8).rev() {
            self.bits.push((byte >> shift) & 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Index of the first terminator, if any.
    pub fn find_terminator(&self) -> Option<usize> {
        self.bits
            .windows(TERMINATOR.len())
            .position(|window| window == TERMINATOR)
    }
}

impl FromIterator<u8> for BitSequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut sequence = BitSequence::new();
        for bit in iter {
            sequence.push(bit);
        }
        sequence
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

/// How to treat anomalies while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Missing terminator and out-of-range bytes are tolerated.
    #[default]
    Lenient,
    /// Missing terminator and out-of-range bytes are errors.
    Strict,
}

/// Result of a reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealedMessage {
    Found(String),
    NotFound,
}

impl RevealedMessage {
    pub fn is_found(&self) -> bool {
        matches!(self, RevealedMessage::Found(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RevealedMessage::Found(message) => Some(message),
            RevealedMessage::NotFound => None,
        }
    }
}

impl fmt::Display for RevealedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealedMessage::Found(message) => f.write_str(message),
            RevealedMessage::NotFound => f.write_str(NO_MESSAGE_FOUND),
        }
    }
}

/// Number of bits `message` occupies once framed.
pub fn framed_len(message: &Message) -> usize {
    message.len() * BITS_PER_CHAR + TERMINATOR.len()
}

/// Frames a message: its bytes followed by the terminator.
pub fn encode(message: &Message) -> BitSequence {
    let mut bits = BitSequence::with_capacity(framed_len(message));
    for code in message.codes() {
        bits.push_byte(code);
    }
    for bit in TERMINATOR {
        bits.push(bit);
    }
    bits
}

/// Recovers a message from extracted bits.
///
/// Bits after the first terminator are ignored and a trailing partial byte is
/// discarded. Under [`DecodePolicy::Lenient`] a missing terminator means the
/// whole sequence is message data and bytes outside printable ASCII, LF and CR
/// are dropped.
pub fn decode(bits: &BitSequence, policy: DecodePolicy) -> Result<RevealedMessage, StegoError> {
    let body = match bits.find_terminator() {
        Some(index) => &bits.as_slice()[..index],
        None => {
            if policy == DecodePolicy::Strict {
                return Err(MalformedReason::TerminatorNotFound.into());
            }
            log::debug!("no terminator in {} bits, decoding all of them", bits.len());
            bits.as_slice()
        }
    };

    let mut message = String::with_capacity(body.len() / BITS_PER_CHAR);
    for (position, chunk) in body.chunks_exact(BITS_PER_CHAR).enumerate() {
        let code = chunk.iter().fold(0u8, |acc, bit| (acc << 1) | (bit & 1));
        if is_revealable(code) {
            message.push(code as char);
        } else if policy == DecodePolicy::Strict {
            return Err(MalformedReason::InvalidCharacterCode { code, position }.into());
        }
    }

    if message.is_empty() {
        Ok(RevealedMessage::NotFound)
    } else {
        Ok(RevealedMessage::Found(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitSequence {
        BitSequence::from_binary_str(s).unwrap()
    }

    #[test]
    fn test_encode_hi() {
        let message = Message::new("Hi").unwrap();
        assert_eq!(
            encode(&message).to_string(),
            "01001000011010011111111111111110"
        );
    }

    #[test]
    fn test_encode_empty_is_terminator_only() {
        let message = Message::new("").unwrap();
        assert_eq!(encode(&message).to_string(), "1111111111111110");
    }

    #[test]
    fn test_message_rejects_wide_characters() {
        let result = Message::new("caf\u{e9} \u{263a}");
        assert!(matches!(
            result,
            Err(StegoError::UnsupportedCharacter {
                character: '\u{263a}',
                position: 5
            })
        ));
    }

    #[test]
    fn test_message_len_counts_characters() {
        let message = Message::new("\u{e9}t\u{e9}").unwrap();
        assert_eq!(message.len(), 3);
        assert_eq!(framed_len(&message), 40);
    }

    #[test]
    fn test_decode_ignores_trailing_noise() {
        let mut sequence = encode(&Message::new("OK").unwrap());
        for bit in [1, 0, 1, 1, 0, 0, 1] {
            sequence.push(bit);
        }
        let revealed = decode(&sequence, DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::Found("OK".to_string()));
    }

    #[test]
    fn test_decode_without_terminator_lenient() {
        // "A" then three stray bits, no terminator
        let revealed = decode(&bits("01000001101"), DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::Found("A".to_string()));
    }

    #[test]
    fn test_decode_without_terminator_strict() {
        let result = decode(&bits("01000001"), DecodePolicy::Strict);
        assert!(matches!(
            result,
            Err(StegoError::MalformedStego(MalformedReason::TerminatorNotFound))
        ));
    }

    #[test]
    fn test_decode_drops_unprintable_bytes() {
        // 0x07 (bell), 'a', 0x80, then terminator
        let sequence = bits(concat!("00000111", "01100001", "10000000", "1111111111111110"));
        let revealed = decode(&sequence, DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::Found("a".to_string()));

        let strict = decode(&sequence, DecodePolicy::Strict);
        assert!(matches!(
            strict,
            Err(StegoError::MalformedStego(MalformedReason::InvalidCharacterCode {
                code: 7,
                position: 0
            }))
        ));
    }

    #[test]
    fn test_decode_keeps_newlines() {
        let sequence = encode(&Message::new("a\r\nb").unwrap());
        let revealed = decode(&sequence, DecodePolicy::Strict).unwrap();
        assert_eq!(revealed.message(), Some("a\r\nb"));
    }

    #[test]
    fn test_decode_empty_is_not_found() {
        let revealed = decode(&BitSequence::new(), DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::NotFound);
        assert_eq!(revealed.to_string(), NO_MESSAGE_FOUND);
    }

    #[test]
    fn test_terminator_inside_body_truncates_early() {
        // 0xFF 0xFE spells the terminator, so "cd" is lost
        let message = Message::new("ab\u{ff}\u{fe}cd").unwrap();
        let revealed = decode(&encode(&message), DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::Found("ab".to_string()));
    }

    #[test]
    fn test_find_terminator_in_long_run_of_ones() {
        // 'i' ends in a 1, so the run is 16 ones long before the final 0
        let sequence = encode(&Message::new("i").unwrap());
        assert_eq!(sequence.find_terminator(), Some(8));
    }

    #[test]
    fn test_from_binary_str_rejects_other_characters() {
        assert!(BitSequence::from_binary_str("0102").is_none());
        assert_eq!(bits("").len(), 0);
    }
}
