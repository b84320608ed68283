// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Catalog resource reading and validation.
//
// Everything here returns `Result`; the decision to fall back to the
// hardcoded catalog is made once, in `Catalog::resolve`.

use std::path::Path;

use halalscan_core::error::{HalalScanError, Result};
use halalscan_core::HaramIngredient;

/// The catalog shipped inside the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../resources/haram_ingredients.json");

/// Deserialize and validate a catalog document.
pub fn parse_catalog(json: &str) -> Result<Vec<HaramIngredient>> {
    let entries: Vec<HaramIngredient> =
        serde_json::from_str(json).map_err(|e| HalalScanError::CatalogParse(e.to_string()))?;
    validate(&entries)?;
    Ok(entries)
}

/// Read a catalog file from disk.
pub fn read_catalog_file(path: &Path) -> Result<Vec<HaramIngredient>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| HalalScanError::CatalogIo(format!("{}: {e}", path.display())))?;
    parse_catalog(&json)
}

/// Read a catalog file without blocking the async runtime.
pub async fn read_catalog_file_async(path: &Path) -> Result<Vec<HaramIngredient>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| HalalScanError::CatalogIo(format!("{}: {e}", path.display())))?;
    parse_catalog(&json)
}

/// A usable catalog has at least one entry and no blank names.
fn validate(entries: &[HaramIngredient]) -> Result<()> {
    if entries.is_empty() {
        return Err(HalalScanError::EmptyCatalog);
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(HalalScanError::InvalidEntry {
                index,
                reason: "name is blank".into(),
            });
        }
    }
    Ok(())
}
