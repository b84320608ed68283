// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hardcoded catalog used when no catalog resource can be loaded.

use halalscan_core::HaramIngredient;

/// The minimal fallback catalog, always in this order.
pub fn default_haram_ingredients() -> Vec<HaramIngredient> {
    vec![
        HaramIngredient::new(
            "pork",
            "Pork is explicitly forbidden in Islam",
            &["bacon", "ham", "prosciutto", "pepperoni"],
        ),
        HaramIngredient::new(
            "alcohol",
            "Alcohol is forbidden in Islam",
            &["ethanol", "wine", "beer", "rum", "vodka"],
        ),
        HaramIngredient::new(
            "gelatin",
            "Usually derived from pork, unless specified as halal/beef gelatin",
            &["gelatine"],
        ),
        HaramIngredient::new("lard", "Pork fat", &["pig fat", "pork fat"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(default_haram_ingredients(), default_haram_ingredients());
    }

    #[test]
    fn fallback_order_and_aliases() {
        let names: Vec<_> = default_haram_ingredients()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["pork", "alcohol", "gelatin", "lard"]);

        let lard = &default_haram_ingredients()[3];
        assert_eq!(lard.alternative_names, ["pig fat", "pork fat"]);
    }
}
