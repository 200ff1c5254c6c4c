//! # Analysis Engine
//!
//! Fast, rule-based analysis core for LexAide. Turns free text from
//! uploaded documents or chat messages into structured signals — no model
//! inference, no I/O, deterministic output.
//!
//! ## Components
//! - `categories`: domain categories and the shared keyword tables
//! - `classifier`: keyword scoring and category selection
//! - `extractor`: date / amount / key-sentence span extraction
//! - `conversation`: templated conversational replies over a short memory
//! - `analyzer`: document analysis orchestrator

pub mod analyzer;
pub mod categories;
pub mod classifier;
pub mod conversation;
pub mod extractor;

pub use analyzer::{DocumentAnalysis, DocumentAnalyzer};
pub use categories::{Category, Domain, KeywordTable, OverlapPolicy};
pub use classifier::{ClassificationResult, Classifier};
pub use conversation::{ConversationEngine, ResponseCatalog, ResponsePayload, MEMORY_CAPACITY};
pub use extractor::{Extractor, MAX_KEY_POINTS};
