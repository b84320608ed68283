// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Halal Scanner.

use serde::{Deserialize, Serialize};

/// Summary shown when no haram ingredient was found.
pub const HALAL_SUMMARY: &str =
    "✅ This product appears to be HALAL based on the ingredients found.";

/// A substance that is forbidden under Islamic dietary law.
///
/// Field names follow the catalog resource format (`alternativeNames`).
/// Unknown fields are ignored and a missing alias list reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaramIngredient {
    /// Canonical name, compared case-insensitively.
    pub name: String,
    /// Why the ingredient is haram.
    pub reason: String,
    /// Other names the ingredient is sold under.
    #[serde(default)]
    pub alternative_names: Vec<String>,
}

impl HaramIngredient {
    pub fn new(name: &str, reason: &str, alternative_names: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            reason: reason.to_owned(),
            alternative_names: alternative_names.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Which comparison tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "camelCase")]
pub enum MatchKind {
    /// Token equals the canonical name.
    Name,
    /// Token equals one of the alternative names.
    Alias,
    /// Token is similar enough to the canonical name.
    FuzzyName { score: u8 },
    /// Token is similar enough to an alternative name.
    FuzzyAlias { score: u8 },
}

/// One token that matched a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaramMatch {
    /// The cleaned token (or phrase window) that matched.
    pub token: String,
    pub ingredient: HaramIngredient,
    pub kind: MatchKind,
}

/// Verdict for one piece of ingredient text.
///
/// `is_halal` is true exactly when `found_haram_ingredients` is empty. The
/// fields are private and [`from_matches`](Self::from_matches) is the only
/// constructor, so no value can break that.
/// `matches` runs parallel to `found_haram_ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalalCheckResult {
    is_halal: bool,
    found_haram_ingredients: Vec<HaramIngredient>,
    matches: Vec<HaramMatch>,
    summary: String,
}

impl HalalCheckResult {
    /// Result for text that contained nothing haram.
    pub fn halal() -> Self {
        Self::from_matches(Vec::new())
    }

    /// Build the verdict and summary from the ordered list of matches.
    pub fn from_matches(matches: Vec<HaramMatch>) -> Self {
        let found_haram_ingredients: Vec<HaramIngredient> =
            matches.iter().map(|m| m.ingredient.clone()).collect();
        let is_halal = found_haram_ingredients.is_empty();
        let summary = summarize(is_halal, found_haram_ingredients.len());
        Self {
            is_halal,
            found_haram_ingredients,
            matches,
            summary,
        }
    }

    pub fn is_halal(&self) -> bool {
        self.is_halal
    }

    /// One entry per matched token; the same ingredient may repeat.
    pub fn found_haram_ingredients(&self) -> &[HaramIngredient] {
        &self.found_haram_ingredients
    }

    pub fn matches(&self) -> &[HaramMatch] {
        &self.matches
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// Display string for a verdict. `count` includes repeated ingredients.
pub fn summarize(is_halal: bool, count: usize) -> String {
    if is_halal {
        HALAL_SUMMARY.to_owned()
    } else {
        format!("❌ This product is NOT HALAL. Found {count} haram ingredient(s).")
    }
}
