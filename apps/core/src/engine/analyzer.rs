//! Document analysis orchestration.
//!
//! Pure composition of the classifier and the extractor over text already
//! produced by the ingestion boundary. No side effects; identical input
//! text yields an identical analysis.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::categories::{Category, Domain, KeywordTable};
use super::classifier::Classifier;
use super::extractor::Extractor;

/// Structured analysis of one document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub category: Category,
    /// Raw date substrings, in text order.
    pub dates: Vec<String>,
    /// Trimmed raw amount substrings, in text order.
    pub amounts: Vec<String>,
    /// Up to five salient sentences, in document order.
    pub key_points: Vec<String>,
}

/// Analyzer combining classification and span extraction.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    classifier: Classifier,
    extractor: Extractor,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(KeywordTable::french_legal())
    }
}

impl DocumentAnalyzer {
    pub fn new(table: Arc<KeywordTable>) -> Self {
        Self {
            classifier: Classifier::new(Arc::clone(&table)),
            extractor: Extractor::new(table),
        }
    }

    /// Analyze already-extracted document text.
    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        let classification = self.classifier.classify(text, Domain::Document);

        let analysis = DocumentAnalysis {
            category: classification.category,
            dates: self.extractor.extract_dates(text),
            amounts: self.extractor.extract_amounts(text),
            key_points: self.extractor.extract_key_points(text),
        };

        info!(
            category = %analysis.category,
            score = classification.score,
            dates = analysis.dates.len(),
            amounts = analysis.amounts.len(),
            key_points = analysis.key_points.len(),
            "document analyzed"
        );

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE: &str = "Lettre de licenciement remise le 12/05/2024. \
        Votre préavis débute immédiatement. \
        Une indemnité de 2 500 € vous sera versée.";

    #[test]
    fn analysis_combines_all_signals() {
        let analyzer = DocumentAnalyzer::default();

        let analysis = analyzer.analyze(NOTICE);
        assert_eq!(analysis.category, Category::LaborDispute);
        assert_eq!(analysis.dates, vec!["12/05/2024"]);
        assert_eq!(analysis.amounts, vec!["2 500 €"]);
        assert_eq!(analysis.key_points.len(), 3);
    }

    #[test]
    fn analysis_is_idempotent() {
        let analyzer = DocumentAnalyzer::default();

        let first = analyzer.analyze(NOTICE);
        let second = analyzer.analyze(NOTICE);
        assert_eq!(first, second);
    }

    #[test]
    fn unmatched_document_is_undetermined() {
        let analyzer = DocumentAnalyzer::default();

        let analysis = analyzer.analyze("Recette de la tarte aux pommes");
        assert_eq!(analysis.category, Category::Undetermined);
        assert!(analysis.dates.is_empty());
        assert!(analysis.amounts.is_empty());
        assert!(analysis.key_points.is_empty());
    }

    #[test]
    fn empty_text_is_not_an_error() {
        let analyzer = DocumentAnalyzer::default();

        let analysis = analyzer.analyze("");
        assert_eq!(analysis.category, Category::Undetermined);
        assert!(analysis.key_points.is_empty());
    }
}
