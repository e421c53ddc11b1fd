//! Bit <-> spacing mapping for [`TextCover`].

use crate::codec::{BitSequence, DecodePolicy, RevealedMessage};
use crate::error::StegoError;
use crate::medium::Cover;

use super::cover::TextCover;

const ZERO: &str = " ";
const ONE: &str = "  ";

/// Bit carried by a whitespace run, if any.
///
/// Only runs of exactly one or two characters carry a bit. Longer runs are
/// ordinary formatting and are skipped.
fn classify_run(run: &str) -> Option<u8> {
    let mut chars = run.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), None, None) => Some(0),
        (Some(_), Some(_), None) => Some(1),
        _ => None,
    }
}

impl Cover for TextCover {
    fn available_units(&self) -> usize {
        self.boundaries().len()
    }

    fn write_bits(&self, bits: &BitSequence) -> Self {
        let boundaries = (0..self.boundaries().len())
            .map(|i| match bits.get(i) {
                Some(1) => ONE.to_string(),
                _ => ZERO.to_string(),
            })
            .collect();

        TextCover::from_parts(self.words().to_vec(), boundaries)
    }

    fn read_bits(&self, max_units: usize) -> BitSequence {
        self.boundaries()
            .iter()
            .take(max_units)
            .filter_map(|run| classify_run(run))
            .collect()
    }
}

/// Hides `message` in the spacing of `cover` and returns the new text.
pub fn hide_in_text(cover: &str, message: &str) -> Result<String, StegoError> {
    Ok(TextCover::parse(cover).embed(message)?.render())
}

/// Reveals a message hidden in the spacing of `stego`.
pub fn reveal_from_text(stego: &str, policy: DecodePolicy) -> Result<RevealedMessage, StegoError> {
    TextCover::parse(stego).extract(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        (0..count)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_classify_run() {
        assert_eq!(classify_run(" "), Some(0));
        assert_eq!(classify_run("\n"), Some(0));
        assert_eq!(classify_run("  "), Some(1));
        assert_eq!(classify_run(" \t"), Some(1));
        assert_eq!(classify_run("   "), None);
        assert_eq!(classify_run(""), None);
    }

    #[test]
    fn test_spacing_pattern_for_hi() {
        let stego = TextCover::parse(&words(100)).embed("Hi").unwrap();
        let pattern: String = stego
            .boundaries()
            .iter()
            .take(32)
            .map(|run| if run == ONE { '1' } else { '0' })
            .collect();

        assert_eq!(pattern, "01001000011010011111111111111110");
        assert!(stego.boundaries()[32..].iter().all(|run| run == ZERO));
    }

    #[test]
    fn test_words_unchanged() {
        let cover = TextCover::parse(&words(60));
        let stego = cover.embed("abc").unwrap();
        assert_eq!(stego.words(), cover.words());
        assert!(!stego.render().ends_with(' '));
        assert!(!stego.render().starts_with(' '));
    }

    #[test]
    fn test_embed_is_deterministic() {
        let cover = words(80);
        assert_eq!(
            hide_in_text(&cover, "same").unwrap(),
            hide_in_text(&cover, "same").unwrap()
        );
    }

    #[test]
    fn test_empty_message_too_big_for_short_cover() {
        let result = hide_in_text("The quick brown fox jumps", "");
        assert!(matches!(
            result,
            Err(StegoError::InsufficientCapacity {
                required: 16,
                available: 4
            })
        ));
    }

    #[test]
    fn test_string_roundtrip() {
        let stego = hide_in_text(&words(200), "Meet at noon.").unwrap();
        let revealed = reveal_from_text(&stego, DecodePolicy::Strict).unwrap();
        assert_eq!(revealed.message(), Some("Meet at noon."));
    }

    #[test]
    fn test_long_runs_are_skipped() {
        let stego = hide_in_text(&words(40), "A").unwrap();
        // A paragraph break in front of the hidden bits carries no bit.
        let padded = format!("Intro.\n\n\n{}", stego);
        let revealed = reveal_from_text(&padded, DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed.message(), Some("A"));
    }

    #[test]
    fn test_plain_prose_reveals_nothing() {
        let revealed = reveal_from_text("Just an ordinary sentence.", DecodePolicy::Lenient).unwrap();
        assert_eq!(revealed, RevealedMessage::NotFound);
    }
}
