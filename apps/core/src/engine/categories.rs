//! Legal domain categories and the shared keyword tables.
//!
//! Keyword lists are the fixed trigger vocabularies of the rule-based
//! classifier. A table is built once at startup, validated, and shared
//! read-only across the engine; it is never mutated at runtime.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;

/// Trigger keywords for labor-tribunal disputes (conseil de prud'hommes).
const LABOR_KEYWORDS: &[&str] = &[
    "licenciement",
    "contrat",
    "travail",
    "salarié",
    "employeur",
    "préavis",
    "indemnité",
];

/// Trigger keywords for condominium disputes (copropriété).
const CONDO_KEYWORDS: &[&str] = &[
    "assemblée",
    "syndic",
    "charges",
    "copropriétaire",
    "immeuble",
    "règlement",
];

/// Subject-matter category of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Labor-tribunal dispute (prud'hommes).
    LaborDispute,
    /// Condominium dispute (copropriété).
    CondoDispute,
    /// No legal domain detected in a conversational message.
    General,
    /// No legal domain detected in an uploaded document.
    Undetermined,
}

impl Category {
    /// Returns the wire tag for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LaborDispute => "labor_dispute",
            Category::CondoDispute => "condo_dispute",
            Category::General => "general",
            Category::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which caller a classification serves.
///
/// Selects where a zero-score text lands: documents fall back to
/// [`Category::Undetermined`], chat messages to [`Category::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Document,
    Conversation,
}

impl Domain {
    pub fn fallback(&self) -> Category {
        match self {
            Domain::Document => Category::Undetermined,
            Domain::Conversation => Category::General,
        }
    }
}

/// How table validation reacts to a keyword listed more than once.
///
/// Scoring assumes every keyword belongs to exactly one category; a shared
/// keyword makes tie behavior depend on list order alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Refuse the table with a configuration error.
    #[default]
    Reject,
    /// Accept the table but log each duplicate.
    Warn,
}

/// Insertion-ordered mapping from category to its trigger keywords.
///
/// Iteration order is significant: the classifier resolves score ties in
/// favor of the category registered first.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Validate and build a table.
    ///
    /// Every keyword must be non-empty and lowercase. Keywords listed more
    /// than once (within one category or across categories) are handled per
    /// `policy`.
    pub fn new(
        entries: Vec<(Category, Vec<String>)>,
        policy: OverlapPolicy,
    ) -> Result<Self, AppError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (category, keywords) in &entries {
            for keyword in keywords {
                if keyword.is_empty() {
                    return Err(AppError::Config(format!(
                        "empty keyword under category '{category}'"
                    )));
                }
                if *keyword != keyword.to_lowercase() {
                    return Err(AppError::Config(format!(
                        "keyword '{keyword}' under category '{category}' must be lowercase"
                    )));
                }
                if !seen.insert(keyword.as_str()) {
                    match policy {
                        OverlapPolicy::Reject => {
                            return Err(AppError::Config(format!(
                                "keyword '{keyword}' is listed more than once (last seen under '{category}')"
                            )));
                        }
                        OverlapPolicy::Warn => {
                            warn!(
                                keyword = keyword.as_str(),
                                category = %category,
                                "duplicate keyword in table; scoring is ambiguous for it"
                            );
                        }
                    }
                }
            }
        }
        Ok(Self { entries })
    }

    /// Built-in French legal vocabulary: labor tribunal first, then
    /// condominium. Registration order decides tie-breaks.
    pub fn french_legal() -> Arc<Self> {
        let entries = vec![
            (Category::LaborDispute, owned(LABOR_KEYWORDS)),
            (Category::CondoDispute, owned(CONDO_KEYWORDS)),
        ];
        // Built-in lists are disjoint and lowercase; construction cannot fail.
        let table = Self::new(entries, OverlapPolicy::Reject)
            .expect("built-in keyword table is valid");
        Arc::new(table)
    }

    /// Categories and their keyword lists, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(category, keywords)| (*category, keywords.as_slice()))
    }

    /// Keyword list of one category, in list order.
    pub fn keywords(&self, category: Category) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// The full cross-category vocabulary, in table order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .flat_map(|(_, keywords)| keywords.iter().map(String::as_str))
    }
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_string()).collect()
}
