// crates/travelog-core/src/model/summary.rs
use crate::country::country_name;
use crate::text::pluralize_post;
use serde::{Deserialize, Serialize};

/// Per-city aggregate of every record sharing a normalized (name, country) key.
///
/// Ephemeral: produced by [`crate::aggregate::CityAggregator`] and never
/// stored. Serializes camelCase for the JavaScript client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCitySummary {
    /// Display name, first-seen casing.
    pub name: String,
    pub country_code: String,
    /// Every numeric rating contributed, in input order.
    pub ratings: Vec<f64>,
    pub manual_count: usize,
    pub post_count: usize,
    pub has_been_there: bool,
    pub average_rating: Option<f64>,
    pub source_text: String,
}

/// Which screen a summary should open when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityRoute {
    /// A single rated manual entry and nothing else: edit it directly.
    Rating,
    /// Several posts mention this city: list them.
    Posts,
    /// Anything else.
    Detail,
}

impl GroupedCitySummary {
    /// Average rounded to one decimal place, e.g. `"4.5"`.
    pub fn display_rating(&self) -> Option<String> {
        self.average_rating.map(|avg| format!("{avg:.1}"))
    }

    /// Screen to open. An unrated manual visit has no rating to edit, so it
    /// goes to [`CityRoute::Detail`].
    pub fn route(&self) -> CityRoute {
        if self.manual_count == 1 && self.post_count == 0 && !self.ratings.is_empty() {
            CityRoute::Rating
        } else if self.post_count > 1 {
            CityRoute::Posts
        } else {
            CityRoute::Detail
        }
    }

    /// Full country name, if the code is known.
    pub fn country_name(&self) -> Option<&'static str> {
        country_name(&self.country_code)
    }

    pub fn record_count(&self) -> usize {
        self.manual_count + self.post_count
    }
}

/// Human-readable provenance for a summary.
///
/// First matching rule wins:
/// 1. manual and posts: "based on your rating and N post(s)" (or "visit" when unrated)
/// 2. manual only: "based on your rating" / "based on your visit"
/// 3. posts only: "based on N post(s)"
/// 4. neither, but marked visited: "been there"
/// 5. otherwise empty
///
/// ```rust
/// use travelog_core::model::describe_source;
///
/// assert_eq!(describe_source(1, 2, true, true), "based on your rating and 2 posts");
/// assert_eq!(describe_source(0, 1, false, false), "based on 1 post");
/// ```
pub fn describe_source(
    manual_count: usize,
    post_count: usize,
    has_ratings: bool,
    has_been_there: bool,
) -> String {
    let what = if has_ratings { "rating" } else { "visit" };
    if manual_count > 0 && post_count > 0 {
        format!(
            "based on your {what} and {post_count} {}",
            pluralize_post(post_count)
        )
    } else if manual_count > 0 {
        format!("based on your {what}")
    } else if post_count > 0 {
        format!("based on {post_count} {}", pluralize_post(post_count))
    } else if has_been_there {
        "been there".to_string()
    } else {
        String::new()
    }
}
