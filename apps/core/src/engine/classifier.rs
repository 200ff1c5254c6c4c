//! Rule-based category classification.
//!
//! Scores text against per-category keyword lists by plain substring
//! containment — no word-boundary checks, so "licenciements" matches the
//! keyword "licenciement". That imprecision is part of the observable
//! contract and must not be tightened here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::categories::{Category, Domain, KeywordTable};

/// Result of classifying one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Best-matching category, or the domain fallback on zero score.
    pub category: Category,
    /// Count of distinct matched keywords for that category.
    pub score: usize,
}

/// Keyword-scoring classifier over a shared table.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<KeywordTable>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KeywordTable::french_legal())
    }
}

impl Classifier {
    pub fn new(table: Arc<KeywordTable>) -> Self {
        Self { table }
    }

    /// The table this classifier scores against.
    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Classify a text for the given domain.
    ///
    /// The input is lowercased once; each keyword contributes at most 1 to
    /// its category's score regardless of repeat occurrences. Only a
    /// strictly greater score replaces the running best, so ties keep the
    /// category registered first. A zero score for every category resolves
    /// to the domain fallback.
    pub fn classify(&self, text: &str, domain: Domain) -> ClassificationResult {
        let haystack = text.to_lowercase();

        let mut best = domain.fallback();
        let mut best_score = 0usize;

        for (category, keywords) in self.table.entries() {
            let score = keywords
                .iter()
                .filter(|keyword| haystack.contains(keyword.as_str()))
                .count();

            if score > best_score {
                best_score = score;
                best = category;
            }
        }

        debug!(category = %best, score = best_score, "classified text");

        ClassificationResult {
            category: best,
            score: best_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::categories::OverlapPolicy;

    #[test]
    fn single_labor_keyword_wins() {
        let classifier = Classifier::default();

        let result = classifier.classify("J'ai reçu une lettre de licenciement", Domain::Document);
        assert_eq!(result.category, Category::LaborDispute);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn condo_text_scores_condo() {
        let classifier = Classifier::default();

        let result = classifier.classify(
            "Le syndic refuse de convoquer l'assemblée des copropriétaires",
            Domain::Document,
        );
        assert_eq!(result.category, Category::CondoDispute);
        // syndic + assemblée + copropriétaire (substring of copropriétaires)
        assert_eq!(result.score, 3);
    }

    #[test]
    fn zero_score_falls_back_per_domain() {
        let classifier = Classifier::default();

        let doc = classifier.classify("Rien de juridique ici", Domain::Document);
        assert_eq!(doc.category, Category::Undetermined);
        assert_eq!(doc.score, 0);

        let chat = classifier.classify("Rien de juridique ici", Domain::Conversation);
        assert_eq!(chat.category, Category::General);
        assert_eq!(chat.score, 0);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let classifier = Classifier::default();

        let result = classifier.classify("", Domain::Document);
        assert_eq!(result.category, Category::Undetermined);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let classifier = Classifier::default();

        let result = classifier.classify(
            "licenciement licenciement licenciement",
            Domain::Document,
        );
        assert_eq!(result.score, 1);
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        let classifier = Classifier::default();

        // "licenciements" (plural) still contains "licenciement".
        let result = classifier.classify("Des licenciements massifs", Domain::Document);
        assert_eq!(result.category, Category::LaborDispute);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn tie_keeps_first_registered_category() {
        // Rig both categories to score exactly 2 on the same text.
        let entries = vec![
            (
                Category::LaborDispute,
                vec!["alpha".to_string(), "beta".to_string()],
            ),
            (
                Category::CondoDispute,
                vec!["gamma".to_string(), "delta".to_string()],
            ),
        ];
        let table = KeywordTable::new(entries, OverlapPolicy::Reject).unwrap();
        let classifier = Classifier::new(Arc::new(table));

        let result = classifier.classify("alpha beta gamma delta", Domain::Document);
        assert_eq!(result.category, Category::LaborDispute);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = Classifier::default();
        let text = "Mon employeur conteste le préavis de mon contrat de travail";

        let first = classifier.classify(text, Domain::Document);
        for _ in 0..10 {
            assert_eq!(classifier.classify(text, Domain::Document), first);
        }
    }
}
