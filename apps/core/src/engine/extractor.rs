//! Span extraction: dates, currency amounts, key sentences.
//!
//! Fixed pattern grammars over the raw (non-lowercased) text. Matches are
//! stored as-is — no calendar validation, no numeric parsing. Absence of
//! matches yields empty sequences, never an error.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::categories::KeywordTable;

/// Maximum key points retained per document.
pub const MAX_KEY_POINTS: usize = 5;

// Compile patterns once at startup; a malformed literal is a build bug.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // D[./-]D[./-]Y with 1-2 digit day/month and 2-4 digit year.
    Regex::new(r"\d{1,2}[./-]\d{1,2}[./-]\d{2,4}").expect("Invalid regex: date pattern")
});

static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Space-grouped digits, optional decimal part, then € or "euros".
    Regex::new(r"(?i)\d+(?:\s*\d+)*(?:[,.]\d+)?\s*(?:€|euros)")
        .expect("Invalid regex: amount pattern")
});

/// Pattern-grammar extractor over a shared keyword vocabulary.
#[derive(Debug, Clone)]
pub struct Extractor {
    table: Arc<KeywordTable>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(KeywordTable::french_legal())
    }
}

impl Extractor {
    pub fn new(table: Arc<KeywordTable>) -> Self {
        Self { table }
    }

    /// All non-overlapping date matches, raw and in text order.
    ///
    /// Duplicates are kept if the same date occurs multiple times.
    pub fn extract_dates(&self, text: &str) -> Vec<String> {
        DATE_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// All non-overlapping currency amounts, trimmed raw substrings in
    /// text order. The currency marker match is case-insensitive.
    pub fn extract_amounts(&self, text: &str) -> Vec<String> {
        AMOUNT_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }

    /// The first [`MAX_KEY_POINTS`] sentences containing a vocabulary
    /// keyword from any category.
    ///
    /// Sentences are split on `.`, `!`, `?`, trimmed, and must be longer
    /// than 10 characters. Order of appearance wins: scanning stops once
    /// the cap is reached.
    pub fn extract_key_points(&self, text: &str) -> Vec<String> {
        let mut points = Vec::new();

        for raw in text.split(['.', '!', '?']) {
            let sentence = raw.trim();
            if sentence.chars().count() <= 10 {
                continue;
            }

            let lowered = sentence.to_lowercase();
            if self.table.vocabulary().any(|keyword| lowered.contains(keyword)) {
                points.push(sentence.to_string());
                if points.len() == MAX_KEY_POINTS {
                    break;
                }
            }
        }

        points
    }
}
