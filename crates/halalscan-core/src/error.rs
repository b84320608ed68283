// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the Halal Scanner.

use thiserror::Error;

/// Top-level error type for all Halal Scanner operations.
#[derive(Debug, Error)]
pub enum HalalScanError {
    // -- Catalog errors --
    #[error("catalog resource could not be read: {0}")]
    CatalogIo(String),

    #[error("catalog is not valid JSON: {0}")]
    CatalogParse(String),

    #[error("catalog contains no ingredients")]
    EmptyCatalog,

    #[error("catalog entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    // -- Text extraction --
    #[error("image decoding failed: {0}")]
    ImageError(String),

    #[error("OCR failed: {0}")]
    OcrError(String),

    #[error("text extraction not available in this build")]
    ExtractionUnavailable,

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HalalScanError>;
