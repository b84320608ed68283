// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-text and JSON rendering of verdicts and catalogs.

use std::fmt::Write as _;

use halalscan_checker::Catalog;
use halalscan_core::{HalalCheckResult, MatchKind};
use serde_json::json;

/// Human-readable verdict: the summary, then one line per match.
pub fn render_result(result: &HalalCheckResult) -> String {
    let mut out = result.summary().to_owned();
    for found in result.matches() {
        let how = match found.kind {
            MatchKind::Name => "exact".to_owned(),
            MatchKind::Alias => "alias".to_owned(),
            MatchKind::FuzzyName { score } | MatchKind::FuzzyAlias { score } => {
                format!("similar, {score}%")
            }
        };
        let _ = write!(
            out,
            "\n  - {} (\"{}\", {how}): {}",
            found.ingredient.name, found.token, found.ingredient.reason
        );
    }
    out
}

pub fn render_result_json(result: &HalalCheckResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn render_catalog(catalog: &Catalog, threshold: u8) -> String {
    let mut out = format!(
        "{} haram ingredients ({}), fuzzy threshold {threshold}",
        catalog.len(),
        catalog.origin()
    );
    for ingredient in catalog.ingredients() {
        let _ = write!(out, "\n  {}: {}", ingredient.name, ingredient.reason);
        if !ingredient.alternative_names.is_empty() {
            let _ = write!(out, "\n    also: {}", ingredient.alternative_names.join(", "));
        }
    }
    out
}

pub fn render_catalog_json(catalog: &Catalog, threshold: u8) -> serde_json::Result<String> {
    let ingredients: Vec<_> = catalog.ingredients().collect();
    serde_json::to_string_pretty(&json!({
        "origin": catalog.origin(),
        "fuzzyThreshold": threshold,
        "ingredients": ingredients,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use halalscan_checker::IngredientChecker;

    use super::*;

    fn check(text: &str) -> HalalCheckResult {
        IngredientChecker::new(Arc::new(Catalog::defaults())).check_ingredients(text)
    }

    #[test]
    fn halal_result_is_just_the_summary() {
        let result = check("sugar");
        assert_eq!(render_result(&result), result.summary());
    }

    #[test]
    fn matches_are_listed_with_tier() {
        let rendered = render_result(&check("Bacon, vodca"));
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Found 2"));
        assert!(lines[1].contains("pork (\"bacon\", alias)"));
        assert!(lines[2].contains("alcohol (\"vodca\", similar, 80%)"));
    }

    #[test]
    fn result_json_uses_resource_field_names() {
        let json = render_result_json(&check("lard")).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["isHalal"], false);
        assert_eq!(value["foundHaramIngredients"][0]["name"], "lard");
        assert_eq!(
            value["foundHaramIngredients"][0]["alternativeNames"][0],
            "pig fat"
        );
    }

    #[test]
    fn catalog_listing() {
        let catalog = Catalog::defaults();
        let rendered = render_catalog(&catalog, 80);
        assert!(rendered.starts_with("4 haram ingredients (defaults), fuzzy threshold 80"));
        assert!(rendered.contains("also: pig fat, pork fat"));

        let value: serde_json::Value =
            serde_json::from_str(&render_catalog_json(&catalog, 80).expect("json")).expect("parse");
        assert_eq!(value["origin"]["source"], "defaults");
        assert_eq!(value["ingredients"].as_array().map(Vec::len), Some(4));
    }
}
