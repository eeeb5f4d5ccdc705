use async_trait::async_trait;
use popcorn_models::{MovieDetail, MovieSummary};

use crate::error::SourceError;

/// Seam over the remote movie database.
///
/// Implemented by [`OmdbClient`](crate::client::OmdbClient) against the real
/// service and by in-memory fakes in the session tests.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Free-text title search. Errors with [`SourceError::NotFound`] when the
    /// service reports no matches.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SourceError>;

    /// Full detail record for one movie id.
    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, SourceError>;
}
