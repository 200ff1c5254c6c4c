//! Conversational response engine.
//!
//! Tags each incoming message with the classifier, derives the matched
//! keywords, and resolves a templated reply through a fixed fallback chain.
//! Keeps a short FIFO window of recent messages per engine instance.
//!
//! One engine per logical conversation: `process` takes `&mut self`, so a
//! shared instance needs external mutual exclusion.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::categories::{Category, Domain};
use super::classifier::Classifier;
use crate::error::AppError;

/// Most recent user messages retained per engine (FIFO, oldest evicted).
pub const MEMORY_CAPACITY: usize = 5;

/// Catalog key of a category's fallback template.
const DEFAULT_KEY: &str = "default";

/// Cross-domain conversational keywords, checked after category keywords,
/// in this order.
const GENERAL_KEYWORDS: &[&str] = &["bonjour", "merci", "aide"];

const LABOR_TEMPLATES: &[(&str, &str)] = &[
    (
        DEFAULT_KEY,
        "Je peux vous aider avec votre dossier prud'hommal. Pourriez-vous me donner plus de détails?",
    ),
    (
        "licenciement",
        "Pour un licenciement, il est important de vérifier la procédure suivie et les motifs invoqués. Avez-vous reçu une lettre de licenciement?",
    ),
    (
        "contrat",
        "Les détails de votre contrat de travail sont essentiels. S'agit-il d'un CDI, CDD ou autre type de contrat?",
    ),
    (
        "indemnité",
        "Pour les indemnités, nous devons examiner votre ancienneté et les circonstances de la rupture du contrat.",
    ),
];

const CONDO_TEMPLATES: &[(&str, &str)] = &[
    (
        DEFAULT_KEY,
        "Je peux vous aider avec votre dossier de copropriété. Quelle est la nature du problème?",
    ),
    (
        "charges",
        "Pour contester des charges, il faut vérifier leur répartition selon le règlement de copropriété. Avez-vous accès à ce document?",
    ),
    (
        "syndic",
        "Pour un litige avec le syndic, nous devons examiner ses obligations légales et contractuelles. Quelle est la nature du différend?",
    ),
    // Not a classification keyword, so unreachable through the keyword
    // path today; kept to match the production catalog.
    (
        "travaux",
        "Concernant les travaux en copropriété, la décision doit être prise en assemblée générale. Avez-vous le procès-verbal?",
    ),
];

const GENERAL_TEMPLATES: &[(&str, &str)] = &[
    (
        DEFAULT_KEY,
        "Bienvenue sur LexAide. Je peux vous aider avec vos questions juridiques concernant les prud'hommes ou la copropriété. Quelle est votre question?",
    ),
    ("bonjour", "Bonjour! Comment puis-je vous aider aujourd'hui?"),
    (
        "merci",
        "Je vous en prie. N'hésitez pas si vous avez d'autres questions.",
    ),
    (
        "aide",
        "Je peux vous aider à analyser des documents, générer des rapports ou répondre à vos questions juridiques.",
    ),
];

/// Reply returned for one processed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub message: String,
    pub category: Category,
}

/// Canned reply templates, keyed by category and keyword.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    templates: HashMap<Category, HashMap<String, String>>,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(Category::LaborDispute, owned_map(LABOR_TEMPLATES));
        templates.insert(Category::CondoDispute, owned_map(CONDO_TEMPLATES));
        templates.insert(Category::General, owned_map(GENERAL_TEMPLATES));
        Self { templates }
    }
}

impl ResponseCatalog {
    /// Build a custom catalog.
    ///
    /// The general `default` template must exist: it is the terminal rule
    /// of the lookup chain.
    pub fn new(templates: HashMap<Category, HashMap<String, String>>) -> Result<Self, AppError> {
        let has_terminal = templates
            .get(&Category::General)
            .is_some_and(|m| m.contains_key(DEFAULT_KEY));
        if !has_terminal {
            return Err(AppError::Config(
                "response catalog must define a 'default' template for the general category"
                    .to_string(),
            ));
        }
        Ok(Self { templates })
    }

    fn template(&self, category: Category, key: &str) -> Option<&str> {
        self.templates
            .get(&category)
            .and_then(|by_keyword| by_keyword.get(key))
            .map(String::as_str)
    }

    /// Waterfall lookup, first defined template wins:
    /// category/keyword, general/keyword, category/default, general/default.
    pub fn resolve(&self, category: Category, keyword: Option<&str>) -> &str {
        if let Some(keyword) = keyword {
            if let Some(reply) = self.template(category, keyword) {
                return reply;
            }
            if let Some(reply) = self.template(Category::General, keyword) {
                return reply;
            }
        }
        if let Some(reply) = self.template(category, DEFAULT_KEY) {
            return reply;
        }
        self.template(Category::General, DEFAULT_KEY)
            .unwrap_or(GENERAL_TEMPLATES[0].1)
    }
}

fn owned_map(templates: &[(&str, &str)]) -> HashMap<String, String> {
    templates
        .iter()
        .map(|(key, reply)| ((*key).to_string(), (*reply).to_string()))
        .collect()
}

/// Stateful conversation handler for one logical session.
pub struct ConversationEngine {
    classifier: Classifier,
    catalog: ResponseCatalog,
    memory: VecDeque<String>,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

impl ConversationEngine {
    pub fn new(classifier: Classifier) -> Self {
        Self::with_catalog(classifier, ResponseCatalog::default())
    }

    pub fn with_catalog(classifier: Classifier, catalog: ResponseCatalog) -> Self {
        Self {
            classifier,
            catalog,
            memory: VecDeque::with_capacity(MEMORY_CAPACITY + 1),
        }
    }

    /// Handle one user message and produce a templated reply.
    pub fn process(&mut self, message: &str) -> ResponsePayload {
        self.remember(message);

        let result = self.classifier.classify(message, Domain::Conversation);
        let keywords = self.matched_keywords(message, result.category);
        let reply = self
            .catalog
            .resolve(result.category, keywords.first().map(String::as_str));

        debug!(
            category = %result.category,
            keyword = keywords.first().map(String::as_str),
            "resolved conversational reply"
        );

        ResponsePayload {
            message: reply.to_string(),
            category: result.category,
        }
    }

    /// Recent messages, oldest first.
    ///
    /// The buffer is write-only with respect to response selection —
    /// multi-turn context has no effect on replies today. Exposed for host
    /// and test introspection.
    pub fn memory(&self) -> impl Iterator<Item = &str> + '_ {
        self.memory.iter().map(String::as_str)
    }

    fn remember(&mut self, message: &str) {
        self.memory.push_back(message.to_string());
        if self.memory.len() > MEMORY_CAPACITY {
            self.memory.pop_front();
        }
    }

    /// Keywords of the detected category found in the message (table
    /// order), then general keywords (fixed order). Domain keywords always
    /// precede general ones.
    fn matched_keywords(&self, message: &str, category: Category) -> Vec<String> {
        let haystack = message.to_lowercase();
        let mut found = Vec::new();

        if category != Category::General {
            if let Some(keywords) = self.classifier.table().keywords(category) {
                for keyword in keywords {
                    if haystack.contains(keyword.as_str()) {
                        found.push(keyword.clone());
                    }
                }
            }
        }

        for keyword in GENERAL_KEYWORDS {
            if haystack.contains(keyword) {
                found.push((*keyword).to_string());
            }
        }

        found
    }
}
