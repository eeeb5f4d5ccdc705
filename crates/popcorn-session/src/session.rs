use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use popcorn_models::{WatchedMovie, WatchedStats};
use popcorn_omdb::{MovieSource, SourceError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::state::{SessionState, NO_MOVIE_FOUND};

/// Coordinates query -> results -> selection -> rating -> watched list.
///
/// At most one search lookup and one detail fetch are logically current at a
/// time. Supersession is enforced two ways: the in-flight task is aborted,
/// and every lookup carries the generation it was issued under and applies
/// its result only if that generation is still the latest. The generation
/// check is the ordering contract; the abort just stops wasted transport
/// work early.
pub struct Session {
    source: Arc<dyn MovieSource>,
    state: Arc<Mutex<SessionState>>,
    search_seq: Arc<AtomicU64>,
    detail_seq: Arc<AtomicU64>,
    search_task: Mutex<Option<JoinHandle<()>>>,
    detail_task: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(SessionState::default())),
            search_seq: Arc::new(AtomicU64::new(0)),
            detail_seq: Arc::new(AtomicU64::new(0)),
            search_task: Mutex::new(None),
            detail_task: Mutex::new(None),
        }
    }

    /// Clone of the current state for rendering.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Replace the query. Cancels any in-flight lookup, clears the previous
    /// error, and issues a new lookup unless `text` is empty, in which case
    /// results are cleared without one.
    pub async fn set_query(&self, text: &str) {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(task) = self.search_task.lock().await.take() {
            task.abort();
        }

        {
            let mut state = self.state.lock().await;
            state.error = None;
            state.query = text.to_string();
            if text.is_empty() {
                state.results.clear();
                state.loading = false;
                return;
            }
            state.loading = true;
        }

        debug!(query = text, seq, "issuing search lookup");
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let search_seq = Arc::clone(&self.search_seq);
        let query = text.to_string();
        let task = tokio::spawn(async move {
            run_lookup(source, state, search_seq, seq, query).await;
        });
        *self.search_task.lock().await = Some(task);
    }

    /// Await the in-flight lookup, if any. Rendering loops call this between
    /// a query change and reading the snapshot.
    pub async fn wait_for_lookup(&self) {
        let task = self.search_task.lock().await.take();
        if let Some(task) = task {
            // An aborted task resolves with a JoinError; either way the
            // lookup no longer counts as in-flight.
            let _ = task.await;
        }
    }

    /// Toggle the selection: open `imdb_id` if it differs from the current
    /// selection, close it if it is already open. Opening starts the detail
    /// fetch.
    pub async fn select_movie(&self, imdb_id: &str) {
        let seq = self.detail_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(task) = self.detail_task.lock().await.take() {
            task.abort();
        }

        {
            let mut state = self.state.lock().await;
            if state.is_open(imdb_id) {
                debug!(imdb_id, "selection toggled closed");
                clear_selection(&mut state);
                return;
            }
            state.selected_id = Some(imdb_id.to_string());
            state.detail = None;
            state.detail_loading = true;
            state.pending_rating = 0;
        }

        debug!(imdb_id, seq, "issuing detail fetch");
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let detail_seq = Arc::clone(&self.detail_seq);
        let id = imdb_id.to_string();
        let task = tokio::spawn(async move {
            run_detail_fetch(source, state, detail_seq, seq, id).await;
        });
        *self.detail_task.lock().await = Some(task);
    }

    /// Await the in-flight detail fetch, if any.
    pub async fn wait_for_detail(&self) {
        let task = self.detail_task.lock().await.take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }

    /// Close the detail pane unconditionally.
    pub async fn close_detail(&self) {
        self.detail_seq.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.detail_task.lock().await.take() {
            task.abort();
        }
        let mut state = self.state.lock().await;
        clear_selection(&mut state);
    }

    /// Record the star rating for the open detail. Zero resets it; values
    /// above ten are rejected.
    pub async fn set_rating(&self, rating: u8) -> Result<(), SessionError> {
        if rating > 10 {
            return Err(SessionError::RatingOutOfRange(rating));
        }
        let mut state = self.state.lock().await;
        if state.selected_id.is_none() {
            return Err(SessionError::NoOpenDetail);
        }
        state.pending_rating = rating;
        Ok(())
    }

    /// Upsert the open, rated movie into the watched list and close the
    /// detail pane. Requires a fetched detail and a rating greater than zero.
    pub async fn add_watched(&self) -> Result<WatchedMovie, SessionError> {
        let entry = {
            let mut state = self.state.lock().await;
            if state.selected_id.is_none() {
                return Err(SessionError::NoOpenDetail);
            }
            if state.pending_rating == 0 {
                return Err(SessionError::RatingRequired);
            }
            let detail = match &state.detail {
                Some(detail) => detail,
                None if state.detail_loading => return Err(SessionError::DetailPending),
                None => return Err(SessionError::NoOpenDetail),
            };

            let entry = WatchedMovie::from_detail(detail, state.pending_rating);
            debug!(imdb_id = %entry.imdb_id, rating = entry.user_rating, "adding to watched list");
            state.watched.upsert(entry.clone());
            clear_selection(&mut state);
            entry
        };

        // The pane is closed; a detail fetch still somehow in flight must
        // not land on it.
        self.detail_seq.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.detail_task.lock().await.take() {
            task.abort();
        }
        Ok(entry)
    }

    /// Remove a watched entry by id. No-op when absent.
    pub async fn delete_watched(&self, imdb_id: &str) -> bool {
        let mut state = self.state.lock().await;
        let removed = state.watched.delete(imdb_id);
        if removed {
            debug!(imdb_id, "removed from watched list");
        }
        removed
    }

    /// The user's prior rating for a movie, if it is already on the list.
    pub async fn existing_rating(&self, imdb_id: &str) -> Option<u8> {
        let state = self.state.lock().await;
        state.watched.get(imdb_id).map(|m| m.user_rating)
    }

    pub async fn watched_stats(&self) -> WatchedStats {
        self.state.lock().await.watched.stats()
    }
}

fn clear_selection(state: &mut SessionState) {
    state.selected_id = None;
    state.detail = None;
    state.detail_loading = false;
    state.pending_rating = 0;
}

async fn run_lookup(
    source: Arc<dyn MovieSource>,
    state: Arc<Mutex<SessionState>>,
    search_seq: Arc<AtomicU64>,
    seq: u64,
    query: String,
) {
    let outcome = source.search(&query).await;

    let mut state = state.lock().await;
    if search_seq.load(Ordering::SeqCst) != seq {
        // Superseded by a newer query while in flight; its state is not ours
        // to touch.
        debug!(query = %query, seq, "dropping stale search response");
        return;
    }
    state.loading = false;
    match outcome {
        Ok(results) => {
            debug!(query = %query, count = results.len(), "search lookup resolved");
            state.results = results;
            state.error = None;
        }
        Err(SourceError::NotFound) => {
            state.results.clear();
            state.error = Some(NO_MOVIE_FOUND.to_string());
        }
        Err(err) => {
            // Deliberately no inline message: only the no-results case is
            // surfaced to the user. Prior results stay on screen.
            warn!(query = %query, error = %err, "search lookup failed");
        }
    }
}

async fn run_detail_fetch(
    source: Arc<dyn MovieSource>,
    state: Arc<Mutex<SessionState>>,
    detail_seq: Arc<AtomicU64>,
    seq: u64,
    imdb_id: String,
) {
    let outcome = source.detail(&imdb_id).await;

    let mut state = state.lock().await;
    if detail_seq.load(Ordering::SeqCst) != seq {
        debug!(imdb_id = %imdb_id, seq, "dropping stale detail response");
        return;
    }
    state.detail_loading = false;
    match outcome {
        Ok(detail) => {
            debug!(imdb_id = %imdb_id, title = %detail.title, "detail fetch resolved");
            state.detail = Some(detail);
        }
        Err(err) => {
            warn!(imdb_id = %imdb_id, error = %err, "detail fetch failed");
        }
    }
}
