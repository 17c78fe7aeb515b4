// crates/travelog-core/src/traits.rs
use crate::model::{GroupedCitySummary, VisitedCityRecord};
use crate::text::{equals_folded, fold_key};

/// Name-based matching helpers for types that expose a city name.
///
/// Comparisons go through [`fold_key`], so they are accent-insensitive and
/// case-insensitive. Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use travelog_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kraków").is_named("krakow"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for VisitedCityRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for GroupedCitySummary {
    fn name_str(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_cities;

    #[test]
    fn summaries_match_by_folded_name() {
        let summaries = aggregate_cities(&[
            VisitedCityRecord::note("São Paulo", "BR"),
            VisitedCityRecord::note("Salvador", "BR"),
        ]);
        let hits: Vec<_> = summaries.iter().filter(|s| s.name_contains("sao")).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_named("SAO PAULO"));
    }
}
