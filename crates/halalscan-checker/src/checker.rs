// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingredient checker — matches tokens against the catalog and builds a verdict.
//
// Matching walks the catalog in loaded order and returns the first entry that
// matches by any tier: exact name, exact alias, fuzzy name, fuzzy alias. An
// earlier entry that matches fuzzily wins over a later entry that matches
// exactly.

use std::sync::Arc;

use halalscan_core::config::DEFAULT_FUZZY_THRESHOLD;
use halalscan_core::{HalalCheckResult, HaramIngredient, HaramMatch, MatchKind};
use tracing::{debug, instrument};

use crate::catalog::{Catalog, CatalogEntry};
use crate::similarity::ratio_lowered;
use crate::tokenize::parse_ingredients;

/// Checks ingredient text against a shared, read-only catalog.
///
/// Holds no mutable state, so one checker (or many clones) can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct IngredientChecker {
    catalog: Arc<Catalog>,
    threshold: u8,
}

impl IngredientChecker {
    /// Create a checker using the default fuzzy threshold of 80.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Override the minimum fuzzy similarity (0–100).
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Check free-form ingredient text.
    ///
    /// Every token that matches appends its ingredient, so the same
    /// ingredient can appear more than once. A token that does not match as a
    /// whole but holds several words is scanned word by word.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn check_ingredients(&self, text: &str) -> HalalCheckResult {
        if text.is_empty() {
            return HalalCheckResult::halal();
        }

        let mut matches = Vec::new();
        for token in parse_ingredients(text) {
            match self.find_haram_match_detailed(&token) {
                Some(found) => {
                    debug!(token = %found.token, ingredient = %found.ingredient.name, kind = ?found.kind, "haram match");
                    matches.push(found);
                }
                None => self.scan_phrase(&token, &mut matches),
            }
        }

        let result = HalalCheckResult::from_matches(matches);
        debug!(
            is_halal = result.is_halal(),
            found = result.found_haram_ingredients().len(),
            "check complete"
        );
        result
    }

    /// First catalog entry matching `token`, if any.
    pub fn find_haram_match(&self, token: &str) -> Option<&HaramIngredient> {
        let token = token.to_lowercase();
        self.catalog
            .entries()
            .iter()
            .find(|entry| self.match_entry(&token, entry).is_some())
            .map(|entry| &entry.ingredient)
    }

    /// Like [`find_haram_match`](Self::find_haram_match), also reporting how it matched.
    pub fn find_haram_match_detailed(&self, token: &str) -> Option<HaramMatch> {
        let token = token.to_lowercase();
        self.catalog.entries().iter().find_map(|entry| {
            self.match_entry(&token, entry).map(|kind| HaramMatch {
                token: token.clone(),
                ingredient: entry.ingredient.clone(),
                kind,
            })
        })
    }

    /// Match tiers for a single entry, strongest first.
    fn match_entry(&self, token: &str, entry: &CatalogEntry) -> Option<MatchKind> {
        if let Some(kind) = exact_match(token, entry) {
            return Some(kind);
        }

        let score = ratio_lowered(&entry.name_key, token);
        if score >= self.threshold {
            return Some(MatchKind::FuzzyName { score });
        }

        entry
            .alias_keys
            .iter()
            .map(|alias| ratio_lowered(alias, token))
            .find(|&score| score >= self.threshold)
            .map(|score| MatchKind::FuzzyAlias { score })
    }

    /// Scan word windows of an unmatched multi-word token, longest window
    /// first, resuming after each match.
    ///
    /// Windows only match by exact name or alias. Single words such as "bee"
    /// or "am" sit within fuzzy range of short aliases.
    fn scan_phrase(&self, token: &str, matches: &mut Vec<HaramMatch>) {
        let words: Vec<&str> = token.split_whitespace().collect();
        if words.len() < 2 {
            return;
        }

        let max_window = self.catalog.max_phrase_words();
        let mut start = 0;
        'words: while start < words.len() {
            let longest = max_window.min(words.len() - start);
            for len in (1..=longest).rev() {
                let window = words[start..start + len].join(" ");
                let found = self.catalog.entries().iter().find_map(|entry| {
                    exact_match(&window, entry).map(|kind| HaramMatch {
                        token: window.clone(),
                        ingredient: entry.ingredient.clone(),
                        kind,
                    })
                });
                if let Some(found) = found {
                    debug!(token, window = %found.token, ingredient = %found.ingredient.name, kind = ?found.kind, "haram match in phrase");
                    matches.push(found);
                    start += len;
                    continue 'words;
                }
            }
            start += 1;
        }
    }
}

/// Exact name or alias equality against a lower-cased token.
fn exact_match(token: &str, entry: &CatalogEntry) -> Option<MatchKind> {
    if entry.name_key == token {
        Some(MatchKind::Name)
    } else if entry.alias_keys.iter().any(|alias| alias == token) {
        Some(MatchKind::Alias)
    } else {
        None
    }
}
