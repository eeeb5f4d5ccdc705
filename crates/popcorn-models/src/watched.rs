use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::MovieDetail;

/// User-curated entry combining a movie's metadata with a personal rating.
///
/// Keyed by `imdb_id`; the watched collection holds at most one entry per id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub imdb_rating: Option<f64>,
    /// Self-assigned rating, 1-10.
    pub user_rating: u8,
    pub runtime_minutes: u32,
    pub date_added: DateTime<Utc>,
}

impl WatchedMovie {
    /// Build a watched entry from a fetched detail record and a user rating.
    ///
    /// A detail with no parseable runtime contributes 0 minutes, matching the
    /// best-effort numeric handling of the upstream data.
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Self {
        Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating: detail.imdb_rating,
            user_rating,
            runtime_minutes: detail.runtime_minutes.unwrap_or(0),
            date_added: Utc::now(),
        }
    }
}

/// Summary averages over the watched collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WatchedStats {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

impl WatchedStats {
    pub fn compute(watched: &[WatchedMovie]) -> Self {
        let count = watched.len();
        if count == 0 {
            return Self {
                count: 0,
                avg_imdb_rating: 0.0,
                avg_user_rating: 0.0,
                avg_runtime_minutes: 0.0,
            };
        }
        let n = count as f64;
        let avg_imdb_rating =
            watched.iter().filter_map(|m| m.imdb_rating).sum::<f64>() / n;
        let avg_user_rating =
            watched.iter().map(|m| f64::from(m.user_rating)).sum::<f64>() / n;
        let avg_runtime_minutes =
            watched.iter().map(|m| f64::from(m.runtime_minutes)).sum::<f64>() / n;
        Self {
            count,
            avg_imdb_rating,
            avg_user_rating,
            avg_runtime_minutes,
        }
    }
}
