//! Settings shared by the site tools: where the articles live and how the
//! practice presents itself.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/cabinet-site";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_url {0:?}: expected an http(s) address")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Cabinet dentaire".to_string(),
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl SiteConfig {
    /// Absolute address of an article page
    pub fn article_url(&self, slug: &str) -> String {
        format!("{}/blog/{slug}", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub content_path: PathBuf,
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
            site: SiteConfig::default(),
        }
    }

    /// Returns `Ok(None)` when no file exists at `config_path`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, config_path).map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let base_url = &config.site.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.clone()));
        }

        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
