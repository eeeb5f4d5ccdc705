use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub browse: BrowseOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// Endpoint for the movie database. Changed only for mirrors and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseOptions {
    /// Cap on how many search results the browse menu offers at once.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Include poster URLs in detail output.
    #[serde(default = "default_true")]
    pub show_posters: bool,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            show_posters: default_true(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_result_limit() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.omdb.base_url.is_empty() {
            return Err(anyhow::anyhow!("omdb.base_url cannot be empty"));
        }
        if !self.omdb.base_url.starts_with("http://") && !self.omdb.base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "omdb.base_url must be an http(s) URL: {}",
                self.omdb.base_url
            ));
        }
        if self.browse.result_limit == 0 {
            return Err(anyhow::anyhow!("browse.result_limit must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            omdb: OmdbConfig {
                base_url: "http://localhost:8080".to_string(),
            },
            browse: BrowseOptions {
                result_limit: 5,
                show_posters: false,
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.omdb.base_url, "http://localhost:8080");
        assert_eq!(loaded.browse.result_limit, 5);
        assert!(!loaded.browse.show_posters);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = PathBuf::from("/nonexistent/popcorn/config.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com");
        assert_eq!(config.browse.result_limit, 10);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.omdb.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.omdb.base_url = "https://www.omdbapi.com".to_string();
        config.browse.result_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[omdb]\nbase_url = \"https://mirror.example\"\n").unwrap();
        assert_eq!(config.omdb.base_url, "https://mirror.example");
        assert_eq!(config.browse.result_limit, 10);
        assert!(config.browse.show_posters);
    }
}
