// crates/travelog-core/src/model/record.rs
use crate::error::{Result, TravelogError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a visited-city record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A rating or visit entered directly by the user.
    #[default]
    Note,
    /// Implied by a published trip post that references the city.
    Post,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Note => f.write_str("note"),
            Source::Post => f.write_str("post"),
        }
    }
}

/// A single user-submitted data point claiming a city was visited.
///
/// The wire shape is the camelCase entry of the `visitedCities` array in a
/// user profile document. Missing or `null` fields take their defaults; in
/// particular an absent `source` means [`Source::Note`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedCityRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub been_there: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl VisitedCityRecord {
    /// A manual entry with no rating and not marked as visited.
    pub fn note(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// An entry derived from a published trip post.
    pub fn post(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            source: Source::Post,
            ..Self::note(name, country)
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn visited(mut self) -> Self {
        self.been_there = true;
        self
    }

    /// Records with a blank name or country are skipped by aggregation.
    #[inline]
    pub fn is_qualifying(&self) -> bool {
        !self.name.is_empty() && !self.country.is_empty()
    }
}

/// The scale a batch of ratings was entered on.
///
/// Stored ratings are five-point; ten-point input is halved at ingestion.
/// Deserializes from `"five"`/`"ten"`, `"5"`/`"10"` or the bare numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingScale {
    #[default]
    Five,
    Ten,
}

impl<'de> Deserialize<'de> for RatingScale {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl RatingScale {
    pub fn max(self) -> f64 {
        match self {
            RatingScale::Five => 5.0,
            RatingScale::Ten => 10.0,
        }
    }

    /// Convert a rating on this scale to the canonical five-point scale.
    #[inline]
    pub fn to_canonical(self, value: f64) -> f64 {
        value * (RatingScale::Five.max() / self.max())
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingScale::Five => f.write_str("five"),
            RatingScale::Ten => f.write_str("ten"),
        }
    }
}

impl FromStr for RatingScale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "five" | "5" => Ok(RatingScale::Five),
            "ten" | "10" => Ok(RatingScale::Ten),
            other => Err(format!("unknown rating scale '{other}' (expected five or ten)")),
        }
    }
}

/// Validate ratings against `scale` and convert them to the five-point scale.
///
/// Records without a rating pass through untouched. A NaN, negative or
/// out-of-range rating fails the whole batch.
///
/// # Examples
///
/// ```rust
/// use travelog_core::model::{ingest_records, RatingScale, VisitedCityRecord};
///
/// let raw = vec![VisitedCityRecord::note("Lisbon", "PT").with_rating(9.0)];
/// let records = ingest_records(raw, RatingScale::Ten).unwrap();
/// assert_eq!(records[0].rating, Some(4.5));
/// ```
pub fn ingest_records(
    records: Vec<VisitedCityRecord>,
    scale: RatingScale,
) -> Result<Vec<VisitedCityRecord>> {
    records
        .into_iter()
        .map(|mut record| {
            if let Some(value) = record.rating {
                if !(0.0..=scale.max()).contains(&value) {
                    return Err(TravelogError::InvalidRating {
                        city: record.name,
                        value,
                        max: scale.max(),
                    });
                }
                record.rating = Some(scale.to_canonical(value));
            }
            Ok(record)
        })
        .collect()
}
