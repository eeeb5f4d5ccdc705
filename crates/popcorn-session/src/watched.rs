use popcorn_models::{WatchedMovie, WatchedStats};
use serde::Serialize;

/// Ordered collection of user-rated movies, at most one entry per id.
///
/// Re-rating a movie replaces its entry in place (upsert, not append);
/// insertion order is otherwise preserved. Lives for the session only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WatchedList {
    entries: Vec<WatchedMovie>,
}

impl WatchedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry with the same id, or append if none exists.
    pub fn upsert(&mut self, movie: WatchedMovie) {
        match self.entries.iter_mut().find(|m| m.imdb_id == movie.imdb_id) {
            Some(existing) => *existing = movie,
            None => self.entries.push(movie),
        }
    }

    /// Remove the entry with the given id. Returns whether one was removed;
    /// a second call with the same id is a no-op.
    pub fn delete(&mut self, imdb_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|m| m.imdb_id != imdb_id);
        self.entries.len() != before
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchedMovie> {
        self.entries.iter().find(|m| m.imdb_id == imdb_id)
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.get(imdb_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WatchedMovie] {
        &self.entries
    }

    pub fn stats(&self) -> WatchedStats {
        WatchedStats::compute(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn watched(imdb_id: &str, user_rating: u8) -> WatchedMovie {
        WatchedMovie {
            imdb_id: imdb_id.to_string(),
            title: format!("Movie {}", imdb_id),
            year: "2020".to_string(),
            poster_url: String::new(),
            imdb_rating: Some(7.0),
            user_rating,
            runtime_minutes: 100,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_upsert_appends_new_ids() {
        let mut list = WatchedList::new();
        list.upsert(watched("tt001", 7));
        list.upsert(watched("tt002", 8));
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].imdb_id, "tt001");
        assert_eq!(list.entries()[1].imdb_id, "tt002");
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let mut list = WatchedList::new();
        list.upsert(watched("tt001", 4));
        list.upsert(watched("tt002", 8));
        list.upsert(watched("tt001", 9));

        assert_eq!(list.len(), 2);
        // Replaced in place, order preserved.
        assert_eq!(list.entries()[0].imdb_id, "tt001");
        assert_eq!(list.entries()[0].user_rating, 9);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut list = WatchedList::new();
        list.upsert(watched("tt001", 7));

        assert!(list.delete("tt001"));
        assert_eq!(list.len(), 0);
        assert!(!list.delete("tt001"));
        assert!(!list.delete("tt404"));
    }

    #[test]
    fn test_get_and_contains() {
        let mut list = WatchedList::new();
        list.upsert(watched("tt001", 7));

        assert!(list.contains("tt001"));
        assert_eq!(list.get("tt001").map(|m| m.user_rating), Some(7));
        assert!(!list.contains("tt002"));
    }
}
