// crates/travelog-core/src/common.rs
use crate::model::GroupedCitySummary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Simple aggregate statistics over a list of city summaries.
///
/// Returned by [`VisitStats::from_summaries`]; the counts reflect the
/// grouped view, so two records for the same city count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitStats {
    pub cities: usize,
    pub countries: usize,
    pub rated: usize,
    pub been_there: usize,
    /// Mean of the per-city averages, rated cities only.
    pub mean_rating: Option<f64>,
}

impl VisitStats {
    pub fn from_summaries(summaries: &[GroupedCitySummary]) -> Self {
        let countries: HashSet<&str> = summaries.iter().map(|s| s.country_code.as_str()).collect();
        let averages: Vec<f64> = summaries.iter().filter_map(|s| s.average_rating).collect();
        let mean_rating = if averages.is_empty() {
            None
        } else {
            Some(averages.iter().sum::<f64>() / averages.len() as f64)
        };

        VisitStats {
            cities: summaries.len(),
            countries: countries.len(),
            rated: averages.len(),
            been_there: summaries.iter().filter(|s| s.has_been_there).count(),
            mean_rating,
        }
    }
}
