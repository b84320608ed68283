// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// halalscan-checker — Ingredient verdicts for the Halal Scanner.
//
// Provides the haram ingredient catalog (bundled resource, external file, or
// hardcoded fallback), ingredient list tokenization, fuzzy similarity scoring,
// and the checker that turns ingredient text into a `HalalCheckResult`.

pub mod catalog;
pub mod checker;
pub mod similarity;
pub mod tokenize;

// Re-export the primary types so callers can use `halalscan_checker::Catalog` etc.
pub use catalog::{Catalog, CatalogOrigin};
pub use checker::IngredientChecker;
pub use similarity::ratio;
pub use tokenize::parse_ingredients;
