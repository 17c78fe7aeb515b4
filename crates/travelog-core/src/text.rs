// crates/travelog-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Trim surrounding whitespace
/// 2\) Transliterate Unicode → ASCII (e.g. `Côte d’Ivoire` -> `Cote d'Ivoire`)
/// 3\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use travelog_core::text::fold_key;
///
/// assert_eq!(fold_key(" Türkiye "), "turkiye");
/// assert_eq!(fold_key("Łódź"), "lodz");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// The city half of a group key: trimmed and lower-cased, nothing more.
///
/// Unlike [`fold_key`] this keeps diacritics, so `Zürich` and `Zurich`
/// stay distinct cities.
#[inline]
pub fn city_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// `"post"` or `"posts"` depending on `count`.
#[inline]
pub fn pluralize_post(count: usize) -> &'static str {
    if count == 1 {
        "post"
    } else {
        "posts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_strips_accents_and_case() {
        assert_eq!(fold_key("São Tomé and Príncipe"), "sao tome and principe");
        assert_eq!(fold_key("  FRANCE"), "france");
    }

    #[test]
    fn city_key_keeps_diacritics() {
        assert_eq!(city_key("  Zürich "), "zürich");
        assert_ne!(city_key("Zürich"), city_key("Zurich"));
    }

    #[test]
    fn equals_folded_ignores_case_and_accents() {
        assert!(equals_folded("Curaçao", "curacao"));
        assert!(!equals_folded("Paris", "Rome"));
    }

    #[test]
    fn pluralize() {
        assert_eq!(pluralize_post(1), "post");
        assert_eq!(pluralize_post(2), "posts");
    }
}
