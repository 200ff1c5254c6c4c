//! Ingest Tests
//!
//! File-to-text ingestion against real on-disk files, plus the handoff
//! from ingested text into document analysis.

use std::io::Write;

use crate::engine::{Category, DocumentAnalyzer};
use crate::error::AppError;
use crate::ingest::{extract_text, extract_text_from_path};

#[test]
fn reads_txt_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courrier.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "  Mise en demeure du syndic.  \n\nCharges impayées: 320 €.").unwrap();

    let text = extract_text_from_path(&path).unwrap();
    assert_eq!(text, "Mise en demeure du syndic.\nCharges impayées: 320 €.");
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let result = extract_text_from_path(&path);
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn extension_dispatch_ignores_case() {
    let text = extract_text("LETTRE.TXT", "Préavis de licenciement".as_bytes()).unwrap();
    assert_eq!(text, "Préavis de licenciement");
}

#[test]
fn file_without_extension_is_unsupported() {
    let result = extract_text("lettre", b"contenu");
    assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
}

#[test]
fn accented_content_survives_ingestion() {
    let content = "Assemblée générale: contestation du règlement.".as_bytes();
    let text = extract_text("proces-verbal.txt", content).unwrap();
    assert!(text.contains("Assemblée générale"));
    assert!(text.contains("règlement"));
}

#[test]
fn ingested_text_feeds_document_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notification.txt");
    std::fs::write(
        &path,
        "Notification de licenciement datée du 02/09/2024.\n\
         L'indemnité proposée par l'employeur est de 3 400 €.",
    )
    .unwrap();

    let text = extract_text_from_path(&path).unwrap();
    let analysis = DocumentAnalyzer::default().analyze(&text);

    assert_eq!(analysis.category, Category::LaborDispute);
    assert_eq!(analysis.dates, vec!["02/09/2024"]);
    assert_eq!(analysis.amounts, vec!["3 400 €"]);
    assert_eq!(analysis.key_points.len(), 2);
}
