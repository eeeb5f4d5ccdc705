pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{BrowseOptions, Config, OmdbConfig};
pub use credentials::CredentialStore;
pub use paths::PathManager;
