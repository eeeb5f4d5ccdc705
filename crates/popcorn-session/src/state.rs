use popcorn_models::{MovieDetail, MovieSummary};
use serde::Serialize;

use crate::watched::WatchedList;

/// Message shown when a search yields nothing. The only failure the session
/// surfaces inline; transport failures are logged instead.
pub const NO_MOVIE_FOUND: &str = "no movie found";

/// Snapshot of everything the view layer renders.
///
/// Owned by [`Session`](crate::session::Session) behind a mutex; callers get
/// clones and never mutate state directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    /// Current query string. Empty means no lookup is wanted.
    pub query: String,
    /// Result list for the most recently completed lookup.
    pub results: Vec<MovieSummary>,
    /// True strictly between lookup start and its resolution or supersession.
    pub loading: bool,
    /// Inline error message replacing the result list, if any.
    pub error: Option<String>,
    /// The currently open movie id, if any. Zero or one at a time.
    pub selected_id: Option<String>,
    /// Detail record for the open movie once its fetch has landed.
    pub detail: Option<MovieDetail>,
    pub detail_loading: bool,
    /// Star rating entered for the open detail; 0 means not yet rated.
    pub pending_rating: u8,
    pub watched: WatchedList,
}

impl SessionState {
    pub fn is_open(&self, imdb_id: &str) -> bool {
        self.selected_id.as_deref() == Some(imdb_id)
    }
}
