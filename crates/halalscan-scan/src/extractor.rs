// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The text extraction capability consumed by the checker.

use halalscan_core::error::{HalalScanError, Result};
use tracing::{debug, warn};

/// Turns raw image bytes into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract all text from an encoded image (JPEG, PNG, ...).
    /// An image without text yields an empty string.
    fn extract_text(&self, image: &[u8]) -> Result<String>;
}

impl<F> TextExtractor for F
where
    F: Fn(&[u8]) -> Result<String> + Send + Sync,
{
    fn extract_text(&self, image: &[u8]) -> Result<String> {
        self(image)
    }
}

/// Extractor for builds without OCR support.
pub struct UnavailableExtractor;

impl TextExtractor for UnavailableExtractor {
    fn extract_text(&self, _image: &[u8]) -> Result<String> {
        warn!("TextExtractor::extract_text called without an OCR backend");
        Err(HalalScanError::ExtractionUnavailable)
    }
}

/// Run `extractor`, turning any failure into an empty string.
pub fn extract_or_empty(extractor: &dyn TextExtractor, image: &[u8]) -> String {
    if image.is_empty() {
        return String::new();
    }
    match extractor.extract_text(image) {
        Ok(text) => {
            debug!(bytes = image.len(), chars = text.len(), "text extracted");
            text
        }
        Err(e) => {
            warn!(bytes = image.len(), error = %e, "text extraction failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_extraction_passes_text_through() {
        let extractor = |_: &[u8]| Ok::<_, HalalScanError>("Sugar, gelatine".to_owned());
        assert_eq!(extract_or_empty(&extractor, b"\x89PNG"), "Sugar, gelatine");
    }

    #[test]
    fn failure_becomes_empty_text() {
        let extractor = |_: &[u8]| -> Result<String> { Err(HalalScanError::OcrError("blurry".into())) };
        assert_eq!(extract_or_empty(&extractor, b"\xff\xd8"), "");
    }

    #[test]
    fn unavailable_extractor_yields_empty_text() {
        assert!(matches!(
            UnavailableExtractor.extract_text(b"img"),
            Err(HalalScanError::ExtractionUnavailable)
        ));
        assert_eq!(extract_or_empty(&UnavailableExtractor, b"img"), "");
    }

    #[test]
    fn empty_image_is_not_sent_to_extractor() {
        let extractor = |_: &[u8]| -> Result<String> { panic!("should not be called") };
        assert_eq!(extract_or_empty(&extractor, b""), "");
    }
}
