// crates/travelog-core/src/aggregate.rs

//! # Visited-City Aggregation
//!
//! Groups a flat list of [`VisitedCityRecord`]s by normalized
//! (city name, country code) and produces one [`GroupedCitySummary`] per
//! group: the ratings it collected, how many manual and post records fed it,
//! their mean and a provenance sentence.
//!
//! The pass is pure and linear. It owns no state, so the same
//! [`CityAggregator`] can be shared freely across threads and re-run on every
//! change of the input list.

use crate::country::normalize_country_code;
use crate::model::{describe_source, GroupedCitySummary, Source, VisitedCityRecord};
use crate::text::city_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// `lowercase(trim(name)) + "-" + country code`, e.g. `"paris-FR"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(name: &str, country_code: &str) -> Self {
        GroupKey(format!("{}-{}", city_key(name), country_code))
    }

    /// Key for a raw record, normalizing its country first.
    pub fn for_record(record: &VisitedCityRecord) -> Self {
        Self::new(&record.name, &normalize_country_code(&record.country))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running totals for one group.
#[derive(Debug)]
struct Accumulator {
    name: String,
    country_code: String,
    ratings: Vec<f64>,
    manual_count: usize,
    post_count: usize,
    has_been_there: bool,
}

impl Accumulator {
    fn new(name: &str, country_code: String) -> Self {
        Self {
            name: name.to_string(),
            country_code,
            ratings: Vec::new(),
            manual_count: 0,
            post_count: 0,
            has_been_there: false,
        }
    }

    fn add(&mut self, record: &VisitedCityRecord) {
        if let Some(rating) = record.rating {
            self.ratings.push(rating);
        }
        match record.source {
            Source::Note => self.manual_count += 1,
            Source::Post => self.post_count += 1,
        }
        self.has_been_there |= record.been_there;
    }

    fn finish(self) -> GroupedCitySummary {
        let average_rating = if self.ratings.is_empty() {
            None
        } else {
            Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
        };
        let source_text = describe_source(
            self.manual_count,
            self.post_count,
            !self.ratings.is_empty(),
            self.has_been_there,
        );
        GroupedCitySummary {
            name: self.name,
            country_code: self.country_code,
            ratings: self.ratings,
            manual_count: self.manual_count,
            post_count: self.post_count,
            has_been_there: self.has_been_there,
            average_rating,
            source_text,
        }
    }
}

/// The single shared implementation of visited-city grouping.
///
/// # Examples
///
/// ```rust
/// use travelog_core::aggregate::CityAggregator;
/// use travelog_core::model::VisitedCityRecord;
///
/// let records = vec![
///     VisitedCityRecord::note("Paris", "France").with_rating(4.0).visited(),
///     VisitedCityRecord::post("paris", "FR").with_rating(5.0).visited(),
/// ];
///
/// let summaries = CityAggregator::new().aggregate(&records);
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].average_rating, Some(4.5));
/// assert_eq!(summaries[0].source_text, "based on your rating and 1 post");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CityAggregator;

impl CityAggregator {
    pub fn new() -> Self {
        CityAggregator
    }

    /// One summary per distinct key, in first-seen order.
    ///
    /// Records with an empty name or country are ignored.
    pub fn aggregate(&self, records: &[VisitedCityRecord]) -> Vec<GroupedCitySummary> {
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut groups: Vec<Accumulator> = Vec::new();

        for record in records.iter().filter(|r| r.is_qualifying()) {
            let code = normalize_country_code(&record.country);
            let key = GroupKey::new(&record.name, &code);
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Accumulator::new(&record.name, code));
                groups.len() - 1
            });
            groups[slot].add(record);
        }

        tracing::trace!(
            records = records.len(),
            groups = groups.len(),
            "aggregated visited cities"
        );

        groups.into_iter().map(Accumulator::finish).collect()
    }

    /// Keys that carry more than one manual (`note`) record.
    ///
    /// Each user should have at most one note per city; duplicates usually
    /// mean a rating was saved twice under different spellings of the
    /// country. Keys are returned in first-seen order.
    pub fn duplicate_notes(&self, records: &[VisitedCityRecord]) -> Vec<GroupKey> {
        let mut seen: HashMap<GroupKey, usize> = HashMap::new();
        let mut out = Vec::new();
        for record in records
            .iter()
            .filter(|r| r.is_qualifying() && r.source == Source::Note)
        {
            let key = GroupKey::for_record(record);
            let count = seen.entry(key.clone()).or_insert(0);
            *count += 1;
            if *count == 2 {
                out.push(key);
            }
        }
        out
    }
}

/// Shorthand for `CityAggregator::new().aggregate(records)`.
pub fn aggregate_cities(records: &[VisitedCityRecord]) -> Vec<GroupedCitySummary> {
    CityAggregator::new().aggregate(records)
}

/// Display order used by list screens: most recently added city first.
pub fn newest_first(mut summaries: Vec<GroupedCitySummary>) -> Vec<GroupedCitySummary> {
    summaries.reverse();
    summaries
}
