// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fuzzy string similarity.
//
// The score is the normalised insert/delete edit similarity,
// `100 * 2 * lcs / (len(a) + len(b))`, rounded to the nearest integer.
// It is symmetric and equals 100 exactly when both strings are equal.

/// Similarity of `a` and `b` on a 0–100 scale, ignoring case.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    ratio_chars(&a, &b)
}

/// Same as [`ratio`] for operands that are already lower-cased.
pub(crate) fn ratio_lowered(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    if a == b {
        return 100;
    }
    let lcs = longest_common_subsequence(a, b);
    let score = (200.0 * lcs as f64 / total as f64).round();
    // Rounding can lift a near-identical pair to 100; keep 100 for equality only.
    score.min(99.0) as u8
}

/// Length of the longest common subsequence, using a single rolling row.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &lc in long {
        let mut diagonal = 0;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("gelatin", "gelatin"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(ratio("PORK", "pork"), 100);
        assert_eq!(ratio("Gelatine", "gelatin"), ratio("gelatine", "GELATIN"));
    }

    #[test]
    fn symmetric() {
        for (a, b) in [("vodka", "vodca"), ("salt", "lard"), ("pig fat", "pork fat")] {
            assert_eq!(ratio(a, b), ratio(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn known_scores() {
        // lcs 7 of 15 characters
        assert_eq!(ratio("gelatine", "gelatin"), 93);
        assert_eq!(ratio("vodca", "vodka"), 80);
        assert_eq!(ratio("porc", "pork"), 75);
        assert_eq!(ratio("salt", "lard"), 25);
        assert_eq!(ratio("abc", ""), 0);
    }

    #[test]
    fn disjoint_strings_score_0() {
        assert_eq!(ratio("xyz", "pork"), 0);
    }

    #[test]
    fn non_ascii_counts_characters() {
        assert_eq!(ratio("gélatine", "gelatine"), 88);
    }

    #[test]
    fn lowered_variant_agrees() {
        assert_eq!(ratio_lowered("bacn", "bacon"), ratio("BACN", "Bacon"));
        assert_eq!(ratio_lowered("bacn", "bacon"), 89);
    }
}
