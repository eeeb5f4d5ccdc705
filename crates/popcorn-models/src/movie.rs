use serde::{Deserialize, Serialize};

/// Lightweight search-result entry, replaced wholesale on every completed query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full metadata for one movie, fetched when it is selected and discarded
/// when the selection changes or closes.
///
/// OMDb uses `"N/A"` for missing fields and formats runtime as `"148 min"`,
/// so the numeric fields are `Option`s filled in by the wire layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}
