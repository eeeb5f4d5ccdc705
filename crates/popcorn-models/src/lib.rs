pub mod movie;
pub mod watched;

pub use movie::{MovieDetail, MovieSummary};
pub use watched::{WatchedMovie, WatchedStats};
