use popcorn_models::{MovieDetail, MovieSummary};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSearchEntry>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchEntry {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
}

#[derive(Debug, Deserialize)]
struct OmdbDetailResponse {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// OMDb formats runtime as `"148 min"` and uses `"N/A"` for missing values.
fn parse_runtime_minutes(runtime: Option<&str>) -> Option<u32> {
    runtime?.split_whitespace().next()?.parse().ok()
}

fn parse_imdb_rating(rating: Option<&str>) -> Option<f64> {
    rating?.parse().ok()
}

/// Empty out the `"N/A"` placeholder OMDb uses for absent text fields.
fn text_field(value: Option<String>) -> String {
    match value {
        Some(v) if v != "N/A" => v,
        _ => String::new(),
    }
}

fn summary_from_entry(entry: OmdbSearchEntry) -> MovieSummary {
    MovieSummary {
        imdb_id: entry.imdb_id,
        title: entry.title,
        year: entry.year,
        poster_url: entry.poster,
    }
}

fn detail_from_response(imdb_id: &str, body: OmdbDetailResponse) -> MovieDetail {
    MovieDetail {
        // OMDb echoes the id back; fall back to the requested one.
        imdb_id: body.imdb_id.unwrap_or_else(|| imdb_id.to_string()),
        title: text_field(body.title),
        year: text_field(body.year),
        poster_url: text_field(body.poster),
        runtime_minutes: parse_runtime_minutes(body.runtime.as_deref()),
        imdb_rating: parse_imdb_rating(body.imdb_rating.as_deref()),
        plot: text_field(body.plot),
        released: text_field(body.released),
        actors: text_field(body.actors),
        director: text_field(body.director),
        genre: text_field(body.genre),
    }
}

/// Run a title search against OMDb.
///
/// A response without a `Search` field is treated as "no movie found",
/// regardless of the error text OMDb attaches.
pub async fn search(
    client: &Client,
    base_url: &str,
    api_key: &str,
    query: &str,
) -> Result<Vec<MovieSummary>, SourceError> {
    let response = client
        .get(format!("{}/", base_url))
        .query(&[("apikey", api_key), ("s", query)])
        .send()
        .await?;

    let status = response.status();
    let body: OmdbSearchResponse = response
        .json()
        .await
        .map_err(|e| SourceError::Decode(format!("search response ({}): {}", status, e)))?;

    let summaries = summaries_from_response(body)?;
    debug!(query, count = summaries.len(), "OMDb search succeeded");
    Ok(summaries)
}

/// A response without a `Search` field means "no movie found", whatever error
/// text OMDb attaches ("Movie not found!", "Too many results.", ...).
fn summaries_from_response(body: OmdbSearchResponse) -> Result<Vec<MovieSummary>, SourceError> {
    match body.search {
        Some(entries) => Ok(entries.into_iter().map(summary_from_entry).collect()),
        None => {
            if let Some(message) = body.error.as_deref() {
                debug!(message, "OMDb search returned no list");
            }
            Err(SourceError::NotFound)
        }
    }
}

/// Fetch the full detail record for one movie id.
pub async fn detail(
    client: &Client,
    base_url: &str,
    api_key: &str,
    imdb_id: &str,
) -> Result<MovieDetail, SourceError> {
    let response = client
        .get(format!("{}/", base_url))
        .query(&[("apikey", api_key), ("i", imdb_id)])
        .send()
        .await?;

    let status = response.status();
    let body: OmdbDetailResponse = response
        .json()
        .await
        .map_err(|e| SourceError::Decode(format!("detail response ({}): {}", status, e)))?;

    if body.response == "False" {
        let message = body.error.unwrap_or_default();
        return if message == "Incorrect IMDb ID." || message == "Error getting data." {
            Err(SourceError::NotFound)
        } else {
            Err(SourceError::Api(message))
        };
    }

    debug!(imdb_id, "OMDb detail fetch succeeded");
    Ok(detail_from_response(imdb_id, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes(Some("148 min")), Some(148));
        assert_eq!(parse_runtime_minutes(Some("90 min")), Some(90));
        assert_eq!(parse_runtime_minutes(Some("N/A")), None);
        assert_eq!(parse_runtime_minutes(Some("")), None);
        assert_eq!(parse_runtime_minutes(None), None);
    }

    #[test]
    fn test_parse_imdb_rating() {
        assert_eq!(parse_imdb_rating(Some("8.3")), Some(8.3));
        assert_eq!(parse_imdb_rating(Some("N/A")), None);
        assert_eq!(parse_imdb_rating(None), None);
    }

    #[test]
    fn test_search_response_with_results() {
        let json = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784",
                 "Type": "movie", "Poster": "https://example.com/bb.jpg"},
                {"Title": "The Batman", "Year": "2022", "imdbID": "tt1877830",
                 "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;
        let body: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        let entries = body.search.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].imdb_id, "tt0372784");
        let summary = summary_from_entry(entries.into_iter().next().unwrap());
        assert_eq!(summary.title, "Batman Begins");
        assert_eq!(summary.year, "2005");
    }

    #[test]
    fn test_search_response_not_found() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let body: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            summaries_from_response(body),
            Err(SourceError::NotFound)
        ));
    }

    #[test]
    fn test_search_response_too_many_results_is_not_found() {
        // OMDb answers short queries with this instead of a result list; it
        // must read as "no movie found" like any other Search-less body.
        let json = r#"{"Response": "False", "Error": "Too many results."}"#;
        let body: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            summaries_from_response(body),
            Err(SourceError::NotFound)
        ));
    }

    #[test]
    fn test_detail_response_with_na_fields() {
        let json = r#"{
            "Title": "Obscure Short", "Year": "1931", "Rated": "N/A",
            "Released": "N/A", "Runtime": "N/A", "Genre": "Short",
            "Director": "N/A", "Actors": "N/A", "Plot": "N/A",
            "Poster": "N/A", "imdbRating": "N/A", "imdbID": "tt9999999",
            "Response": "True"
        }"#;
        let body: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = detail_from_response("tt9999999", body);
        assert_eq!(detail.title, "Obscure Short");
        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.imdb_rating, None);
        assert_eq!(detail.released, "");
        assert_eq!(detail.poster_url, "");
    }

    #[test]
    fn test_detail_response_full() {
        let json = r#"{
            "Title": "Inception", "Year": "2010", "Released": "16 Jul 2010",
            "Runtime": "148 min", "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "https://example.com/inception.jpg",
            "imdbRating": "8.8", "imdbID": "tt1375666", "Response": "True"
        }"#;
        let body: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = detail_from_response("tt1375666", body);
        assert_eq!(detail.imdb_id, "tt1375666");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.director, "Christopher Nolan");
    }
}
