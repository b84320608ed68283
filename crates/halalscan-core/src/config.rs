// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HalalScanError, Result};

/// Name of the settings file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Similarity score at or above which a fuzzy comparison counts as a match.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External catalog file that replaces the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Minimum fuzzy similarity (0–100) for a token to count as a match.
    pub fuzzy_threshold: u8,
    /// Directory holding the OCR detection and recognition models.
    pub ocr_model_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            ocr_model_dir: None,
        }
    }
}

impl AppConfig {
    /// Reject settings that cannot be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_threshold > 100 {
            return Err(HalalScanError::Config(format!(
                "fuzzy_threshold must be between 0 and 100, got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }

    /// Load `config.json` from `data_dir`, or defaults if it is missing or unreadable.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);
        match Self::load(&path) {
            Ok(config) => config,
            Err(HalalScanError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| HalalScanError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

}
