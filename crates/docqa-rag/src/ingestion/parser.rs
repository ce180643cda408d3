//! PDF parsing and text extraction

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// How long a single PDF extraction may run before it is abandoned
const EXTRACT_TIMEOUT_SECS: u64 = 60;

/// Parsed PDF with extracted text and metadata
#[derive(Debug, Clone)]
pub struct ParsedPdf {
    /// Normalized extracted text (may be empty for image-only PDFs)
    pub content: String,
    /// SHA-256 hex digest of the normalized text
    pub content_hash: String,
    /// Total pages (if the page tree could be read)
    pub total_pages: Option<u32>,
}

/// PDF file parser
pub struct PdfParser;

impl PdfParser {
    /// Parse an uploaded PDF
    ///
    /// Rejects non-.pdf filenames up front. Extraction failure is a
    /// parse error; a PDF that parses but carries no text yields empty
    /// content, so questions against it fall back to an un-grounded
    /// prompt rather than failing.
    pub fn parse(filename: &str, data: &[u8]) -> Result<ParsedPdf> {
        let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
        if extension != "pdf" {
            return Err(Error::UnsupportedFileType(extension));
        }

        let raw = Self::extract_with_timeout(filename, data)?;

        let content = normalize_pdf_text(&raw);
        if content.is_empty() {
            tracing::warn!(
                "No text extracted from '{}', storing document with empty content",
                filename
            );
        }

        let total_pages = lopdf::Document::load_mem(data)
            .ok()
            .map(|doc| doc.get_pages().len() as u32);

        Ok(ParsedPdf {
            content_hash: hash_content(&content),
            content,
            total_pages,
        })
    }

    /// Extract PDF text with a sync timeout to prevent hangs on problematic fonts
    fn extract_with_timeout(filename: &str, data: &[u8]) -> Result<String> {
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;

        let data_vec = data.to_vec();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = pdf_extract::extract_text_from_mem(&data_vec);
            let _ = tx.send(result);
        });

        match rx.recv_timeout(Duration::from_secs(EXTRACT_TIMEOUT_SECS)) {
            Ok(Ok(text)) => {
                let _ = handle.join();
                Ok(text)
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(Error::file_parse(
                    filename,
                    format!("PDF extraction failed: {}", e),
                ))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // The extraction thread cannot be killed; it is left to finish on its own
                tracing::error!(
                    "PDF extraction timeout after {}s for '{}'",
                    EXTRACT_TIMEOUT_SECS,
                    filename
                );
                Err(Error::file_parse(
                    filename,
                    format!("PDF extraction timed out after {}s", EXTRACT_TIMEOUT_SECS),
                ))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(Error::file_parse(
                filename,
                "PDF extraction thread crashed",
            )),
        }
    }
}

/// Normalize extracted PDF text
///
/// Strips NULs, maps common typographic characters and ligatures to
/// ASCII, trims each line and drops blank lines.
fn normalize_pdf_text(text: &str) -> String {
    let text = text
        .replace('\0', "")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{00A0}', " ")
        .replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl");

    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// SHA-256 hex digest of extracted content
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_extension() {
        let err = PdfParser::parse("notes.txt", b"hello world").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType(_)));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        // Passes the extension gate, then fails extraction on garbage bytes
        let err = PdfParser::parse("REPORT.PDF", b"not a real pdf").unwrap_err();
        assert!(matches!(err, Error::FileParse { .. }));
    }

    #[test]
    fn test_normalize_trims_and_drops_blank_lines() {
        let raw = "  First line  \n\n\u{0000}\n\tSecond line\t\n\n";
        assert_eq!(normalize_pdf_text(raw), "First line\nSecond line");
    }

    #[test]
    fn test_normalize_maps_typographic_chars() {
        let raw = "\u{201C}quoted\u{201D} \u{FB01}rst\u{00A0}draft";
        assert_eq!(normalize_pdf_text(raw), "\"quoted\" first draft");
    }

    #[test]
    fn test_hash_is_stable_hex_digest() {
        let hash = hash_content("hello");
        assert_eq!(
            hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(hash_content(""), hash_content(""));
    }
}
