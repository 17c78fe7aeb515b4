// crates/travelog-core/src/model/mod.rs
pub mod record;
pub mod summary;

pub use record::{ingest_records, RatingScale, Source, VisitedCityRecord};
pub use summary::{describe_source, CityRoute, GroupedCitySummary};
