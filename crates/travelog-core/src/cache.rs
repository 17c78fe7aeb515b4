// crates/travelog-core/src/cache.rs

//! # Photo URL Cache
//!
//! An explicit cache of resolved city photo URLs, plus the set of keys whose
//! lookup is currently in flight. Construct one at start-up and hand it to
//! whatever needs it (usually behind an `Arc`); there is no global instance.
//!
//! The cache can be snapshotted to disk with bincode so warm URLs survive a
//! restart. With the `compact` feature the snapshot is gzip-compressed.

use crate::error::{Result, TravelogError};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".photos.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".photos.comp.bin";

/// Upper bound for snapshot decoding, guards against corrupt files.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

#[derive(Debug, Default)]
struct Inner {
    urls: HashMap<String, String>,
    loading: HashSet<String>,
}

/// On-disk form: only resolved URLs, never in-flight marks.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    urls: Vec<(String, String)>,
}

#[derive(Debug, Default)]
pub struct PhotoUrlCache {
    inner: RwLock<Inner>,
}

impl PhotoUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves plain maps behind, still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().urls.get(key).cloned()
    }

    /// Store a URL and clear any loading mark for `key`.
    pub fn insert(&self, key: impl Into<String>, url: impl Into<String>) {
        let key = key.into();
        let mut inner = self.write();
        inner.loading.remove(&key);
        inner.urls.insert(key, url.into());
    }

    /// Mark `key` as loading.
    ///
    /// Returns `false` if the URL is already cached or another caller is
    /// already fetching it; the caller should then not start a fetch.
    pub fn begin_loading(&self, key: &str) -> bool {
        let mut inner = self.write();
        if inner.urls.contains_key(key) {
            return false;
        }
        inner.loading.insert(key.to_string())
    }

    /// Drop the loading mark without storing anything (failed fetch).
    pub fn finish_loading(&self, key: &str) {
        self.write().loading.remove(key);
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.read().loading.contains(key)
    }

    /// Forget a single URL. Returns the removed value.
    pub fn invalidate(&self, key: &str) -> Option<String> {
        let mut inner = self.write();
        inner.loading.remove(key);
        inner.urls.remove(key)
    }

    pub fn clear(&self) {
        let mut inner = self.write();
        inner.urls.clear();
        inner.loading.clear();
    }

    pub fn len(&self) -> usize {
        self.read().urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().urls.is_empty()
    }

    /// Write resolved URLs to `path`. In-flight marks are not persisted.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut urls: Vec<(String, String)> = self
            .read()
            .urls
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        urls.sort();

        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let writer = flate2::write::GzEncoder::new(writer, flate2::Compression::default());

        let mut writer = writer;
        bincode_options().serialize_into(&mut writer, &Snapshot { urls })?;

        #[cfg(feature = "compact")]
        writer.finish()?.flush()?;
        #[cfg(not(feature = "compact"))]
        writer.flush()?;

        tracing::debug!(path = %path.display(), "photo cache saved");
        Ok(())
    }

    /// Rebuild a cache from a snapshot written by [`PhotoUrlCache::save_to_path`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TravelogError::NotFound(format!(
                "Photo cache not found at {}: {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        let reader: Box<dyn Read> = Box::new(flate2::read::GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let reader: Box<dyn Read> = Box::new(reader);

        let snapshot: Snapshot = bincode_options().deserialize_from(reader)?;
        let cache = Self::new();
        cache.write().urls.extend(snapshot.urls);
        tracing::debug!(path = %path.display(), entries = cache.len(), "photo cache loaded");
        Ok(cache)
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn insert_get_invalidate() {
        let cache = PhotoUrlCache::new();
        assert!(cache.is_empty());
        cache.insert("paris-FR", "https://img/paris.jpg");
        assert_eq!(cache.get("paris-FR").as_deref(), Some("https://img/paris.jpg"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate("paris-FR").as_deref(), Some("https://img/paris.jpg"));
        assert_eq!(cache.get("paris-FR"), None);
    }

    #[test]
    fn loading_marks_prevent_duplicate_fetches() {
        let cache = PhotoUrlCache::new();
        assert!(cache.begin_loading("rome-IT"));
        assert!(!cache.begin_loading("rome-IT"));
        assert!(cache.is_loading("rome-IT"));

        cache.insert("rome-IT", "https://img/rome.jpg");
        assert!(!cache.is_loading("rome-IT"));
        assert!(!cache.begin_loading("rome-IT"));

        assert!(cache.begin_loading("oslo-NO"));
        cache.finish_loading("oslo-NO");
        assert!(!cache.is_loading("oslo-NO"));
        assert!(cache.get("oslo-NO").is_none());
    }

    #[test]
    fn clear_drops_everything() {
        let cache = PhotoUrlCache::new();
        cache.insert("a-FR", "x");
        cache.begin_loading("b-FR");
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.is_loading("b-FR"));
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(PhotoUrlCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.insert(format!("city{i}-FR"), format!("url{i}")))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cache.len(), 8);
    }

    #[test]
    fn snapshot_round_trip_skips_loading_marks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("cache{CACHE_SUFFIX}"));

        let cache = PhotoUrlCache::new();
        cache.insert("lisbon-PT", "https://img/lisbon.jpg");
        cache.begin_loading("porto-PT");
        cache.save_to_path(&path).unwrap();

        let restored = PhotoUrlCache::load_from_path(&path).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get("lisbon-PT").as_deref(), Some("https://img/lisbon.jpg"));
        assert!(!restored.is_loading("porto-PT"));
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let err = PhotoUrlCache::load_from_path("/definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, TravelogError::NotFound(_)));
    }
}
