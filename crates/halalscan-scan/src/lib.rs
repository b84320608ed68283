// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// halalscan-scan — Text extraction for ingredient label photos.
//
// The checker never looks at image data. It consumes whatever text a
// `TextExtractor` produces, and any extraction failure arrives as an empty
// string. A pure-Rust OCR backend is available behind the `ocr` feature.

pub mod extractor;

#[cfg(feature = "ocr")]
pub mod ocr;

pub use extractor::{TextExtractor, UnavailableExtractor, extract_or_empty};

#[cfg(feature = "ocr")]
pub use ocr::OcrTextExtractor;

use std::path::Path;

/// Pick the best text extractor this build offers.
///
/// With the `ocr` feature, loads the OCR models from `model_dir` (or the
/// default cache directory). Falls back to [`UnavailableExtractor`] when
/// OCR is compiled out or the models cannot be loaded.
pub fn default_extractor(model_dir: Option<&Path>) -> Box<dyn TextExtractor> {
    #[cfg(feature = "ocr")]
    {
        let config = match model_dir {
            Some(dir) => ocr::OcrConfig::from_dir(dir),
            None => ocr::OcrConfig::default(),
        };
        match OcrTextExtractor::new(config) {
            Ok(engine) => return Box::new(engine),
            Err(e) => tracing::warn!(error = %e, "OCR engine unavailable"),
        }
    }
    #[cfg(not(feature = "ocr"))]
    {
        let _ = model_dir;
        tracing::debug!("built without the ocr feature");
    }
    Box::new(UnavailableExtractor)
}
