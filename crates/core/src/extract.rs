//! Key sentence extraction.
//!
//! Picks short, sentence-like fragments from a block of prose using nothing
//! but length heuristics. Output order always follows the input text.

use crate::types::BULLETS_PER_SLIDE;
use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a run of sentence terminators.
static SENTENCE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Selects candidate key sentences from free text.
#[derive(Debug, Clone)]
pub struct KeyPointExtractor {
    /// Fragments must be longer than this to be considered at all.
    min_fragment_chars: usize,
    /// Accepted sentences must be longer than this.
    min_sentence_chars: usize,
    /// Accepted sentences must be shorter than this.
    max_sentence_chars: usize,
}

impl Default for KeyPointExtractor {
    fn default() -> Self {
        Self {
            min_fragment_chars: 20,
            min_sentence_chars: 30,
            max_sentence_chars: 200,
        }
    }
}

impl KeyPointExtractor {
    /// Create an extractor with the default length thresholds (20 / 30 / 200).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length a fragment must exceed to survive the initial split.
    pub fn with_min_fragment_chars(mut self, chars: usize) -> Self {
        self.min_fragment_chars = chars;
        self
    }

    /// Set the exclusive bounds on accepted sentence length.
    pub fn with_sentence_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_sentence_chars = min;
        self.max_sentence_chars = max.max(min);
        self
    }

    /// Extract up to `num_points` key sentences from `text`.
    ///
    /// Only the first `2 * num_points` surviving fragments are examined, so a
    /// text full of overlong sentences can yield fewer points than asked for.
    /// Never fails; unusable input gives an empty list.
    pub fn extract(&self, text: &str, num_points: usize) -> Vec<String> {
        let mut points = Vec::with_capacity(num_points.min(BULLETS_PER_SLIDE));
        if num_points == 0 {
            return points;
        }

        let candidates = SENTENCE_BREAK_REGEX
            .split(text)
            .map(str::trim)
            .filter(|s| char_len(s) > self.min_fragment_chars)
            .take(num_points.saturating_mul(2));

        for sentence in candidates {
            let len = char_len(sentence);
            if len > self.min_sentence_chars && len < self.max_sentence_chars {
                points.push(sentence.to_string());
            }
            if points.len() >= num_points {
                break;
            }
        }

        points
    }
}

/// Extract key points with the default thresholds.
pub fn extract_key_points(text: &str, num_points: usize) -> Vec<String> {
    KeyPointExtractor::new().extract(text, num_points)
}

/// Length in Unicode scalar values.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Keep at most `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
