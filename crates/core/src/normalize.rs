//! Cleanup for scraped page text.
//!
//! Strips citation markers and edit links, normalizes Unicode and
//! whitespace, and decides which paragraphs and headings are worth keeping.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse multiple whitespace characters into one.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Regex to match bracketed numeric citation markers like `[12]`.
static CITATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Edit link text that wiki engines append to headings.
const EDIT_MARKER: &str = "[edit]";

/// Text cleaner for scraped paragraphs and headings.
#[derive(Debug, Clone)]
pub struct SourceCleaner {
    /// Paragraphs must be longer than this to be kept.
    min_paragraph_chars: usize,
    /// Headings must be longer than this to be kept.
    min_heading_chars: usize,
}

impl Default for SourceCleaner {
    fn default() -> Self {
        Self {
            min_paragraph_chars: 50,
            min_heading_chars: 3,
        }
    }
}

impl SourceCleaner {
    /// Create a cleaner with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length a paragraph must exceed to be kept.
    pub fn with_min_paragraph_chars(mut self, chars: usize) -> Self {
        self.min_paragraph_chars = chars;
        self
    }

    /// Set the length a heading must exceed to be kept.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }

    /// Clean a body paragraph.
    ///
    /// - Applies NFC normalization
    /// - Removes citation markers (`[1]`, `[23]`)
    /// - Collapses whitespace runs (including newlines) to single spaces
    /// - Trims leading/trailing whitespace
    pub fn clean_paragraph(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        let text = CITATION_REGEX.replace_all(&text, "");
        collapse_whitespace(&text)
    }

    /// Clean a section heading, dropping any `[edit]` link text.
    pub fn clean_heading(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        collapse_whitespace(&text.replace(EDIT_MARKER, ""))
    }

    /// Whether a cleaned paragraph is substantial enough to keep.
    pub fn accept_paragraph(&self, text: &str) -> bool {
        text.chars().count() > self.min_paragraph_chars
    }

    /// Whether a cleaned heading is substantial enough to keep.
    pub fn accept_heading(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().count() > self.min_heading_chars
    }

    /// Clean every paragraph and keep the accepted ones, in order.
    pub fn paragraphs<I, S>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|t| self.clean_paragraph(t.as_ref()))
            .filter(|t| self.accept_paragraph(t))
            .collect()
    }

    /// Clean every heading and keep the accepted ones, in order.
    pub fn headings<I, S>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|t| self.clean_heading(t.as_ref()))
            .filter(|t| self.accept_heading(t))
            .collect()
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_citations() {
        let cleaner = SourceCleaner::new();

        assert_eq!(
            cleaner.clean_paragraph("Rust is fast.[1] It is also safe.[23]"),
            "Rust is fast. It is also safe."
        );
        // Non-numeric brackets are left alone.
        assert_eq!(cleaner.clean_paragraph("See [note a]"), "See [note a]");
    }

    #[test]
    fn test_collapse_whitespace() {
        let cleaner = SourceCleaner::new();

        assert_eq!(cleaner.clean_paragraph("  Hello \t\n  world  "), "Hello world");
    }

    #[test]
    fn test_unicode_composition() {
        let cleaner = SourceCleaner::new();

        // "e" followed by a combining acute accent becomes a single "é".
        assert_eq!(cleaner.clean_paragraph("Caf\u{0065}\u{0301}"), "Caf\u{00e9}");
    }

    #[test]
    fn test_clean_heading() {
        let cleaner = SourceCleaner::new();

        assert_eq!(cleaner.clean_heading("History[edit]"), "History");
        assert_eq!(cleaner.clean_heading("  Early   life [edit] "), "Early life");
    }

    #[test]
    fn test_accept_paragraph_threshold() {
        let cleaner = SourceCleaner::new();

        assert!(!cleaner.accept_paragraph(&"a".repeat(50)));
        assert!(cleaner.accept_paragraph(&"a".repeat(51)));
    }

    #[test]
    fn test_accept_heading_threshold() {
        let cleaner = SourceCleaner::new();

        assert!(!cleaner.accept_heading(""));
        assert!(!cleaner.accept_heading("Use"));
        assert!(cleaner.accept_heading("Uses"));
    }

    #[test]
    fn test_paragraphs_filters_after_cleaning() {
        let cleaner = SourceCleaner::new().with_min_paragraph_chars(10);

        // Length is measured after citations are removed.
        let kept = cleaner.paragraphs(["Short[1][2][3]", "Long enough paragraph[4]"]);
        assert_eq!(kept, vec!["Long enough paragraph"]);
    }

    #[test]
    fn test_headings_drops_edit_only() {
        let cleaner = SourceCleaner::new();

        let kept = cleaner.headings(vec!["[edit]".to_string(), "Contents".to_string()]);
        assert_eq!(kept, vec!["Contents"]);
    }

    #[test]
    fn test_custom_heading_threshold() {
        let cleaner = SourceCleaner::new().with_min_heading_chars(0);
        assert!(cleaner.accept_heading("A"));
    }
}
