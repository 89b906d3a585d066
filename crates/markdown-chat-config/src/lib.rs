use anyhow::Context;
use markdown_chat_engine::{StreamError, StreamSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid streaming settings: {0}")]
    InvalidStreaming(#[from] StreamError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub streaming: StreamingConfig,
}

/// The `[streaming]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_chunk_size() -> usize {
    StreamSettings::DEFAULT_CHUNK_SIZE
}

fn default_interval_ms() -> u64 {
    StreamSettings::DEFAULT_INTERVAL.as_millis() as u64
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Reject a config the engine could not run with at load time
        config.stream_settings()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("writing {}", config_path.display()))?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// Location of the config file. `MARKDOWN_CHAT_CONFIG` overrides the
    /// default, and may use `~` or environment variables.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var("MARKDOWN_CHAT_CONFIG")
            && let Some(path) = Self::expand_path(Path::new(&custom))
        {
            return path;
        }
        let config_dir = shellexpand::tilde("~/.config/markdown-chat");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Converts the `[streaming]` table into engine settings.
    pub fn stream_settings(&self) -> Result<StreamSettings, ConfigError> {
        let s = &self.streaming;
        StreamSettings::new(s.chunk_size, Duration::from_millis(s.interval_ms))
            .map_err(ConfigError::from)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
