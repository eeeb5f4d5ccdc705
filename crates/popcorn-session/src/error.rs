use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Ratings are stars on a 0-10 scale.
    #[error("rating {0} is out of range (expected 0-10)")]
    RatingOutOfRange(u8),

    /// Adding to the watched list requires a rating greater than zero.
    #[error("a rating must be given before adding to the watched list")]
    RatingRequired,

    /// The operation needs an open detail pane.
    #[error("no movie detail is open")]
    NoOpenDetail,

    /// The detail for the selected movie has not finished loading.
    #[error("movie detail is still loading")]
    DetailPending,
}
