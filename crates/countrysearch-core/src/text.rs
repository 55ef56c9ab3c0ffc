// crates/countrysearch-core/src/text.rs

//! Case folding used by the suggestion filter.
//!
//! Matching is a plain lowercase substring test. No transliteration or
//! accent folding is applied: `"asuncion"` does not match `"Asunción"`.

/// Lowercase a string for comparison.
///
/// Uses Unicode lowercasing, so `"ÅLAND"` folds to `"åland"`.
#[inline]
pub fn fold_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Returns `true` if `haystack` contains the already-folded `needle`,
/// ignoring case on the haystack side.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_lower(haystack).contains(needle)
}

/// Case-insensitive equality.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_lower(a) == fold_lower(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_and_unicode() {
        assert_eq!(fold_lower("PaRiS"), "paris");
        assert_eq!(fold_lower("BRASÍLIA"), "brasília");
    }

    #[test]
    fn contains_expects_folded_needle() {
        assert!(contains_folded("Buenos Aires", "aires"));
        assert!(!contains_folded("Buenos Aires", "AIRES"));
    }

    #[test]
    fn no_accent_folding() {
        assert!(!contains_folded("Asunción", "asuncion"));
        assert!(equals_folded("france", "FRANCE"));
    }
}
