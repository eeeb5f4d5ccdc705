use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use popcorn_config::{Config, CredentialStore, PathManager};
use serde_json::json;

use super::prompts;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;

pub async fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(full, output),
        ConfigCommands::Key { key } => set_api_key(key, output),
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;

    let mut cred_store = CredentialStore::new(path_manager.credentials_file());
    cred_store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let api_key = cred_store.get_omdb_api_key().cloned();
    let key_display = match (&api_key, full) {
        (Some(key), true) => key.clone(),
        (Some(key), false) => mask_key(key),
        (None, _) => "(not set)".to_string(),
    };

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            table.add_row(vec![
                "Config file".to_string(),
                path_manager.config_file().display().to_string(),
            ]);
            table.add_row(vec!["OMDb base URL".to_string(), config.omdb.base_url.clone()]);
            table.add_row(vec!["OMDb API key".to_string(), key_display.clone()]);
            table.add_row(vec![
                "Browse result limit".to_string(),
                config.browse.result_limit.to_string(),
            ]);
            table.add_row(vec![
                "Show posters".to_string(),
                config.browse.show_posters.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": path_manager.config_file().display().to_string(),
                "omdb": { "base_url": config.omdb.base_url, "api_key": key_display },
                "browse": {
                    "result_limit": config.browse.result_limit,
                    "show_posters": config.browse.show_posters,
                },
            }));
        }
    }

    Ok(())
}

fn set_api_key(key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => prompts::prompt_string("OMDb API key", None)?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directory: {}", e))?;

    let mut cred_store = CredentialStore::new(path_manager.credentials_file());
    cred_store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    cred_store.set_omdb_api_key(key);
    cred_store
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!(
        "OMDb API key saved to {}",
        path_manager.credentials_file().display()
    ));
    Ok(())
}

/// Keep the first four characters, star the rest.
fn mask_key(key: &str) -> String {
    let total = key.chars().count();
    if total <= 4 {
        return "*".repeat(total);
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{}{}", prefix, "*".repeat(total - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("c5e7878c"), "c5e7****");
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn test_mask_key_multibyte() {
        // Counts characters, not bytes, so a non-ASCII key never splits a
        // char boundary.
        assert_eq!(mask_key("clé-secrète"), "clé-*******");
        assert_eq!(mask_key("键键键"), "***");
    }
}
