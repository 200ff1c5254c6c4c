//! # LexAide Analysis Core
//!
//! Rule-based classification and extraction engine for legal case files
//! (labor-tribunal and condominium disputes). Turns free text — uploaded
//! documents or chat messages — into structured signals: a subject-matter
//! category, extracted dates and amounts, salient sentences, and a
//! templated conversational reply.
//!
//! The engine performs no I/O and holds no state beyond one bounded
//! conversation memory per [`ConversationEngine`]. HTTP routing, session
//! mapping, and report rendering live in the host application; the
//! [`ingest`] module implements the text-ingestion boundary that feeds the
//! engine.

pub mod engine;
pub mod error;
pub mod ingest;

pub use engine::analyzer::{DocumentAnalysis, DocumentAnalyzer};
pub use engine::categories::{Category, Domain, KeywordTable, OverlapPolicy};
pub use engine::classifier::{ClassificationResult, Classifier};
pub use engine::conversation::{ConversationEngine, ResponseCatalog, ResponsePayload};
pub use engine::extractor::Extractor;
pub use error::AppError;

#[cfg(test)]
mod tests;
