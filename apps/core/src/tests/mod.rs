//! Test Module
//!
//! Crate-level test suite for the LexAide analysis core.
//!
//! ## Test Categories
//! - `engine_tests`: classification, extraction, conversation flow, document analysis
//! - `ingest_tests`: text ingestion from supported file formats

pub mod ingest_tests;

/// Install a test subscriber so `RUST_LOG` controls engine output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
