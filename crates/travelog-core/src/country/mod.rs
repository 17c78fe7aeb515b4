// crates/travelog-core/src/country/mod.rs

//! # Country Codes
//!
//! Resolves the free-form `country` field of a visited-city record to an
//! ISO 3166-1 alpha-2 code. Stored records carry either a code (`"FR"`) or a
//! full name (`"France"`); both must land in the same group.
//!
//! Resolution is best-effort and never fails: unknown names fall back to the
//! raw input, uppercased.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod table;

use table::COUNTRIES;

/// Folded country name → ISO2 code.
static NAME_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .map(|(name, code)| (fold_key(name), *code))
        .collect()
});

/// ISO2 code → display name (first table entry wins).
static CODE_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut out = HashMap::with_capacity(COUNTRIES.len());
    for (name, code) in COUNTRIES {
        out.entry(*code).or_insert(*name);
    }
    out
});

/// Outcome of [`resolve_country`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResolution {
    /// Normalized uppercase code, or the uppercased raw input on a miss.
    pub code: String,
    /// `false` when the input was a name the table does not know.
    pub resolved: bool,
}

/// Resolve a raw country string, reporting whether the lookup hit.
///
/// Two-character inputs are treated as codes and only uppercased; they are
/// always considered resolved, even if no such country exists.
pub fn resolve_country(raw: &str) -> CountryResolution {
    if raw.chars().count() == 2 {
        return CountryResolution {
            code: raw.to_uppercase(),
            resolved: true,
        };
    }

    match NAME_INDEX.get(&fold_key(raw)) {
        Some(code) => CountryResolution {
            code: (*code).to_string(),
            resolved: true,
        },
        None => {
            tracing::debug!(country = raw, "country name not in lookup table, using raw value");
            CountryResolution {
                code: raw.to_uppercase(),
                resolved: false,
            }
        }
    }
}

/// Normalize a raw country string to a 2-letter uppercase code.
///
/// # Examples
///
/// ```rust
/// use travelog_core::country::normalize_country_code;
///
/// assert_eq!(normalize_country_code("fr"), "FR");
/// assert_eq!(normalize_country_code("France"), "FR");
/// assert_eq!(normalize_country_code("Atlantis"), "ATLANTIS");
/// ```
pub fn normalize_country_code(raw: &str) -> String {
    resolve_country(raw).code
}

/// Display name for an ISO2 code, case-insensitive (e.g. `"jp"` → `"Japan"`).
pub fn country_name(code: &str) -> Option<&'static str> {
    CODE_INDEX.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Number of distinct codes in the table.
pub fn known_country_count() -> usize {
    CODE_INDEX.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_inputs_are_uppercased_as_is() {
        assert_eq!(normalize_country_code("fr"), "FR");
        assert_eq!(normalize_country_code("Jp"), "JP");
        // Not a real code, still passed through.
        assert_eq!(normalize_country_code("uk"), "UK");
    }

    #[test]
    fn names_resolve_through_the_table() {
        assert_eq!(normalize_country_code("France"), "FR");
        assert_eq!(normalize_country_code("united states of america"), "US");
        assert_eq!(normalize_country_code("Turkiye"), "TR");
        assert_eq!(normalize_country_code("  Côte d'Ivoire "), "CI");
    }

    #[test]
    fn unknown_names_fall_back_to_uppercased_raw() {
        let res = resolve_country("Narnia");
        assert_eq!(res.code, "NARNIA");
        assert!(!res.resolved);
    }

    #[test]
    fn reverse_lookup_uses_first_entry() {
        assert_eq!(country_name("nl"), Some("Netherlands"));
        assert_eq!(country_name("US"), Some("United States"));
        assert_eq!(country_name("ZZ"), None);
    }

    #[test]
    fn every_table_code_is_two_uppercase_letters() {
        for (name, code) in COUNTRIES {
            assert_eq!(code.len(), 2, "{name}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{name}");
        }
        assert!(known_country_count() > 200);
    }
}
