// crates/travelog-core/src/lib.rs

//! # travelog-core
//!
//! Visited-city aggregation for the travelog client. A user's profile holds
//! a flat list of [`VisitedCityRecord`]s, some typed in by hand ("notes"),
//! some implied by published trip posts. [`CityAggregator`] folds that list
//! into one [`GroupedCitySummary`] per city with an average rating and a
//! provenance sentence such as *"based on your rating and 2 posts"*.
//!
//! ```rust
//! use travelog_core::prelude::*;
//!
//! let records = vec![
//!     VisitedCityRecord::note("Tokyo", "Japan").visited(),
//!     VisitedCityRecord::post("tokyo", "JP").with_rating(5.0),
//! ];
//! let summaries = aggregate_cities(&records);
//! assert_eq!(summaries[0].country_code, "JP");
//! assert_eq!(summaries[0].source_text, "based on your rating and 1 post");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod cache;
pub mod common;
pub mod country;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::aggregate::{aggregate_cities, newest_first, CityAggregator, GroupKey};
pub use crate::cache::PhotoUrlCache;
pub use crate::common::VisitStats;
pub use crate::country::{normalize_country_code, resolve_country, CountryResolution};
pub use crate::error::{Result, TravelogError};
pub use crate::model::{
    ingest_records, CityRoute, GroupedCitySummary, RatingScale, Source, VisitedCityRecord,
};
