// crates/travelog-core/src/error.rs
use thiserror::Error;

/// Errors raised at the edges of the crate: file I/O, decoding and rating
/// ingestion.
///
/// Aggregation itself never fails; see [`crate::aggregate`].
#[derive(Debug, Error)]
pub enum TravelogError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One entry of a record array failed to decode.
    #[cfg(feature = "json")]
    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The document is neither a record array nor a profile with `visitedCities`.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A rating is NaN, negative or above the maximum of its declared scale.
    #[error("invalid rating {value} for {city} (expected 0..={max})")]
    InvalidRating { city: String, value: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, TravelogError>;
