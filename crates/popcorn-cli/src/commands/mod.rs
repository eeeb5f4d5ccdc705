pub mod browse;
pub mod config;
pub mod detail;
pub mod prompts;
pub mod search;

use std::time::Duration;

use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use popcorn_config::{Config, CredentialStore, PathManager};
use popcorn_omdb::OmdbClient;

/// Load config and credentials and build the OMDb client, or explain how to
/// configure a key.
pub fn load_client(output: &Output) -> Result<(Config, OmdbClient)> {
    let path_manager = PathManager::default();

    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config: {}", e))?;
    tracing::debug!(config_file = %path_manager.config_file().display(), "configuration loaded");

    let mut cred_store = CredentialStore::new(path_manager.credentials_file());
    cred_store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let api_key = match cred_store.resolve_omdb_api_key() {
        Some(key) => key,
        None => {
            output.error("No OMDb API key configured");
            output.println("Set one with: popcorn config key");
            output.println(format!(
                "(or export {})",
                popcorn_config::credentials::OMDB_API_KEY_ENV
            ));
            return Err(eyre!("missing OMDb API key"));
        }
    };

    let client = OmdbClient::with_base_url(api_key, config.omdb.base_url.clone());
    Ok((config, client))
}

/// Spinner shown while a lookup is in flight. Suppressed in quiet and JSON
/// modes where terminal animation is unwanted.
pub fn lookup_spinner(output: &Output, message: &str) -> ProgressBar {
    if output.is_quiet() || output.format() != crate::output::OutputFormat::Human {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
