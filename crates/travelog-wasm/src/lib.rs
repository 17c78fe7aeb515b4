//! travelog-wasm — WebAssembly bindings for travelog-core
//!
//! The mobile and web clients used to carry their own copy of the
//! visited-city grouping on every screen that lists cities. This crate
//! exposes the single Rust implementation to JavaScript instead.
//!
//! What it provides
//! ----------------
//! - `aggregateCities(records, scale?)`: grouped summaries, camelCase objects
//! - `normalizeCountryCode("France")` → `"FR"`, `countryName("FR")`
//! - `sourceText(manual, posts, rated, beenThere)` for ad-hoc labels
//! - `visitStats(records)`: totals for a profile header
//! - `PhotoCache`: an explicit photo-URL cache object to create once and
//!   pass around, instead of a module-level map
//!
//! Quick start
//! -----------
//! ```javascript
//! import init, { aggregateCities, PhotoCache } from 'travelog-wasm';
//!
//! await init();
//! const summaries = aggregateCities(profile.visitedCities);
//! // [{ name: "Paris", countryCode: "FR", averageRating: 4.5,
//! //    sourceText: "based on your rating and 1 post", route: "detail", ... }]
//!
//! const photos = new PhotoCache();
//! if (photos.beginLoading("paris-FR")) { /* fetch, then */ photos.insert("paris-FR", url); }
//! ```
use serde::Serialize;
use std::result::Result;
use serde_wasm_bindgen::{from_value, Serializer};
use travelog_core::prelude::*;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"travelog-wasm ready".into());
}

/// Summary plus the derived fields a list row needs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryView<'a> {
    #[serde(flatten)]
    summary: &'a GroupedCitySummary,
    display_rating: Option<String>,
    route: CityRoute,
    group_key: GroupKey,
}

impl<'a> SummaryView<'a> {
    fn new(summary: &'a GroupedCitySummary) -> Self {
        Self {
            summary,
            display_rating: summary.display_rating(),
            route: summary.route(),
            group_key: GroupKey::new(&summary.name, &summary.country_code),
        }
    }
}

// `null` rather than `undefined` for absent averages; plain objects, not
// `Map`s, for the flattened views.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = Serializer::new()
        .serialize_missing_as_null(true)
        .serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(JsValue::from)
}

fn js_error(message: &str) -> JsValue {
    JsValue::from(js_sys::Error::new(message))
}

fn records_from_js(
    records: JsValue,
    scale: Option<String>,
) -> Result<Vec<VisitedCityRecord>, JsValue> {
    let raw: Vec<VisitedCityRecord> = from_value(records).map_err(JsValue::from)?;
    let scale = match scale {
        Some(s) => s.parse::<RatingScale>().map_err(|e| js_error(&e))?,
        None => RatingScale::default(),
    };
    ingest_records(raw, scale).map_err(|e| js_error(&e.to_string()))
}

/// Group visited-city records per city, in first-seen order.
///
/// `scale` is `"five"` (default) or `"ten"`; ten-point ratings are halved.
#[wasm_bindgen(js_name = aggregateCities)]
pub fn aggregate_cities_js(records: JsValue, scale: Option<String>) -> Result<JsValue, JsValue> {
    let records = records_from_js(records, scale)?;
    let summaries = aggregate_cities(&records);
    let views: Vec<SummaryView<'_>> = summaries.iter().map(SummaryView::new).collect();
    to_js(&views)
}

#[wasm_bindgen(js_name = visitStats)]
pub fn visit_stats_js(records: JsValue, scale: Option<String>) -> Result<JsValue, JsValue> {
    let records = records_from_js(records, scale)?;
    to_js(&VisitStats::from_summaries(&aggregate_cities(&records)))
}

#[wasm_bindgen(js_name = normalizeCountryCode)]
pub fn normalize_country_code_js(raw: &str) -> String {
    normalize_country_code(raw)
}

#[wasm_bindgen(js_name = countryName)]
pub fn country_name_js(code: &str) -> Option<String> {
    country_name(code).map(str::to_string)
}

#[wasm_bindgen(js_name = sourceText)]
pub fn source_text_js(manual: usize, posts: usize, rated: bool, been_there: bool) -> String {
    describe_source(manual, posts, rated, been_there)
}

/// JS handle on a [`PhotoUrlCache`]. Create one per app session.
#[wasm_bindgen]
#[derive(Default)]
pub struct PhotoCache {
    inner: PhotoUrlCache,
}

#[wasm_bindgen]
impl PhotoCache {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PhotoCache {
        PhotoCache::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: &str, url: &str) {
        self.inner.insert(key, url);
    }

    #[wasm_bindgen(js_name = beginLoading)]
    pub fn begin_loading(&self, key: &str) -> bool {
        self.inner.begin_loading(key)
    }

    #[wasm_bindgen(js_name = finishLoading)]
    pub fn finish_loading(&self, key: &str) {
        self.inner.finish_loading(key);
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self, key: &str) -> bool {
        self.inner.is_loading(key)
    }

    pub fn invalidate(&self, key: &str) -> Option<String> {
        self.inner.invalidate(key)
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}
