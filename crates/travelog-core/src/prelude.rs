//! travelog prelude: bring common types and traits into scope for demos and bindings.

#![allow(unused_imports)]

pub use crate::aggregate::{aggregate_cities, newest_first, CityAggregator, GroupKey};
pub use crate::cache::PhotoUrlCache;
pub use crate::common::VisitStats;
pub use crate::country::{country_name, normalize_country_code, resolve_country};
pub use crate::error::{Result, TravelogError};
#[cfg(feature = "json")]
pub use crate::loader::{load_records_from_path, load_records_from_reader};
pub use crate::model::{
    describe_source, ingest_records, CityRoute, GroupedCitySummary, RatingScale, Source,
    VisitedCityRecord,
};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
