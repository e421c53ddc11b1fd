//! Text covers: words plus the whitespace between them.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::StegoError;

/// A cover text split into words and the whitespace runs between them.
///
/// There is exactly one run per boundary between consecutive words. Whitespace
/// before the first word and after the last one is not part of the cover.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextCover {
    words: Vec<String>,
    boundaries: Vec<String>,
}

impl TextCover {
    /// Splits `text` on maximal whitespace runs.
    pub fn parse(text: &str) -> Self {
        let mut words = Vec::new();
        let mut boundaries = Vec::new();
        let mut word = String::new();
        let mut run = String::new();

        for c in text.trim().chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                run.push(c);
            } else {
                if !run.is_empty() {
                    boundaries.push(std::mem::take(&mut run));
                }
                word.push(c);
            }
        }
        if !word.is_empty() {
            words.push(word);
        }

        Self { words, boundaries }
    }

    /// Builds a cover from parts. `boundaries` must have one entry per gap.
    pub(crate) fn from_parts(words: Vec<String>, boundaries: Vec<String>) -> Self {
        debug_assert_eq!(boundaries.len(), words.len().saturating_sub(1));
        Self { words, boundaries }
    }

    /// Reads and parses a text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StegoError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Writes the rendered text to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StegoError> {
        fs::write(path, self.render())?;
        Ok(())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn boundaries(&self) -> &[String] {
        &self.boundaries
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Joins words with their boundary runs.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.boundaries[i - 1]);
            }
            out.push_str(word);
        }
        out
    }

    /// Appends filler words until `units` more boundaries exist.
    ///
    /// Entries of `filler` are split on whitespace and used in order,
    /// cycling as needed. New boundaries are single spaces. With no usable
    /// filler words the cover is returned unchanged.
    pub fn extend_with_filler<S: AsRef<str>>(&self, units: usize, filler: &[S]) -> Self {
        let pool: Vec<&str> = filler
            .iter()
            .flat_map(|entry| entry.as_ref().split_whitespace())
            .collect();

        let mut extended = self.clone();
        if pool.is_empty() || units == 0 {
            return extended;
        }

        let target = self.boundaries.len() + units;
        for word in pool.iter().cycle() {
            if extended.boundaries.len() >= target {
                break;
            }
            if !extended.words.is_empty() {
                extended.boundaries.push(" ".to_string());
            }
            extended.words.push((*word).to_string());
        }

        log::debug!(
            "extended cover from {} to {} words",
            self.words.len(),
            extended.words.len()
        );
        extended
    }
}

impl fmt::Display for TextCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts_boundaries() {
        let cover = TextCover::parse("The quick brown fox jumps");
        assert_eq!(cover.word_count(), 5);
        assert_eq!(cover.boundaries().len(), 4);
    }

    #[test]
    fn test_parse_keeps_mixed_runs() {
        let cover = TextCover::parse("  one\ttwo  \n three ");
        assert_eq!(cover.words(), &["one", "two", "three"]);
        assert_eq!(cover.boundaries(), &["\t", "  \n "]);
        assert_eq!(cover.render(), "one\ttwo  \n three");
    }

    #[test]
    fn test_parse_empty() {
        let cover = TextCover::parse("   \n ");
        assert_eq!(cover.word_count(), 0);
        assert!(cover.boundaries().is_empty());
        assert_eq!(cover.render(), "");
    }

    #[test]
    fn test_extend_with_filler() {
        let cover = TextCover::parse("hello world");
        let extended = cover.extend_with_filler(3, &["alpha beta"]);
        assert_eq!(extended.render(), "hello world alpha beta alpha");
        assert_eq!(extended.boundaries().len(), 4);
    }

    #[test]
    fn test_extend_empty_cover() {
        let extended = TextCover::default().extend_with_filler(2, &["a", "b"]);
        assert_eq!(extended.render(), "a b a");
    }

    #[test]
    fn test_extend_without_filler_is_noop() {
        let cover = TextCover::parse("hello world");
        let empty: [&str; 0] = [];
        assert_eq!(cover.extend_with_filler(5, &empty), cover);
        assert_eq!(cover.extend_with_filler(5, &["   "]), cover);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.txt");
        let cover = TextCover::parse("a  b c");
        cover.save(&path).unwrap();
        assert_eq!(TextCover::from_file(&path).unwrap(), cover);
    }
}
