// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingredient list tokenization.

/// Characters that separate ingredients on a label.
pub const DELIMITERS: [char; 6] = [',', ';', '(', ')', '\n', '\r'];

/// Split raw ingredient text into cleaned, lower-cased tokens.
///
/// Pieces are trimmed and empty pieces dropped. Order and duplicates are
/// kept as they appear in the input.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_delimiter() {
        assert_eq!(
            parse_ingredients("Pork, Gelatin (bovine); Salt\n"),
            ["pork", "gelatin", "bovine", "salt"]
        );
    }

    #[test]
    fn handles_crlf_and_blank_fragments() {
        assert_eq!(
            parse_ingredients("Sugar,,\r\n  ;Water\r\n()"),
            ["sugar", "water"]
        );
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(
            parse_ingredients("ham, salt, HAM"),
            ["ham", "salt", "ham"]
        );
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(
            parse_ingredients("  Pig   Fat , E 920"),
            ["pig   fat", "e 920"]
        );
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(parse_ingredients(" \t \n ").is_empty());
        assert!(parse_ingredients("").is_empty());
    }
}
