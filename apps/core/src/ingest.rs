//! Text ingestion boundary for uploaded case files.
//!
//! Turns a source file into the single plain-text string the analysis
//! engine consumes. Format detection happens here and only here — the
//! engine never inspects file names or extensions.
//!
//! Supported formats: TXT, MD, CSV, JSON, PDF, DOCX.

use std::path::Path;

use tracing::{info, warn};

use crate::error::AppError;

/// Extract text from in-memory file data, dispatching on the extension.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::InvalidInput(format!("empty file: {file_name}")));
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    info!(file = file_name, format = extension.as_str(), "ingesting document");

    match extension.as_str() {
        // Plain-text formats: direct UTF-8 decode.
        "txt" | "md" | "csv" | "json" => std::str::from_utf8(data)
            .map(normalize)
            .map_err(|e| AppError::InvalidInput(format!("{file_name} is not valid UTF-8: {e}"))),

        "pdf" => pdf_text(file_name, data),

        "docx" | "doc" => docx_text(file_name, data),

        _ => Err(AppError::UnsupportedFormat(format!(
            "{file_name}: unrecognized extension '{extension}'"
        ))),
    }
}

/// Read a file from disk and extract its text.
pub fn extract_text_from_path(path: impl AsRef<Path>) -> Result<String, AppError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    extract_text(file_name, &data)
}

fn pdf_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => {
            let text = normalize(&text);
            info!(file = file_name, chars = text.len(), "PDF text extracted");
            Ok(text)
        }
        Err(e) => {
            warn!(file = file_name, error = %e, "PDF extraction failed");
            Err(AppError::UnsupportedFormat(format!(
                "{file_name}: unreadable PDF ({e})"
            )))
        }
    }
}

fn docx_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(data).map_err(|e| {
        warn!(file = file_name, error = %e, "DOCX extraction failed");
        AppError::UnsupportedFormat(format!("{file_name}: unreadable DOCX ({e})"))
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for part in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = part {
                    for piece in run.children {
                        if let docx_rs::RunChild::Text(text) = piece {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            if !line.trim().is_empty() {
                paragraphs.push(line);
            }
        }
    }

    let text = normalize(&paragraphs.join("\n"));
    info!(file = file_name, chars = text.len(), "DOCX text extracted");
    Ok(text)
}

/// Trim each line and drop blank ones; extraction output is noisy.
fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
