pub mod api;
pub mod client;
pub mod error;
pub mod traits;

pub use client::OmdbClient;
pub use error::SourceError;
pub use traits::MovieSource;

/// Public OMDb endpoint. Overridable through configuration for mirrors
/// and tests.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";
