use crate::error::{PostError, Result};
use crate::store::post_store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_LIST_WIDTH: usize = 100;
const MIN_LIST_WIDTH: usize = 40;
pub const MAX_LIST_WIDTH: usize = 1000;

pub const KEYS: &[&str] = &["storage-key", "log-level", "list-width"];

/// Configuration for postboard, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostboardConfig {
    /// Name of the slot holding the post collection
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Default tracing filter directive (overridden by RUST_LOG)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Column width used when listing posts
    #[serde(default = "default_list_width")]
    pub list_width: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for PostboardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
            list_width: default_list_width(),
        }
    }
}

impl PostboardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PostError::Io)?;
        let config: PostboardConfig =
            serde_json::from_str(&content).map_err(PostError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PostError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PostError::Serialization)?;
        fs::write(config_path, content).map_err(PostError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "log-level" => Some(self.log_level.clone()),
            "list-width" => Some(self.list_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() || value.starts_with('.') || value.contains(['/', '\\']) {
                    return Err(PostError::Api(format!("Invalid storage key: '{}'", value)));
                }
                self.storage_key = value.to_string();
            }
            "log-level" => self.log_level = value.trim().to_string(),
            "list-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| PostError::Api(format!("Invalid width: '{}'", value)))?;
                if width > MAX_LIST_WIDTH {
                    return Err(PostError::Api(format!(
                        "Width {} is too large (max {})",
                        width, MAX_LIST_WIDTH
                    )));
                }
                self.list_width = width.max(MIN_LIST_WIDTH);
            }
            other => return Err(PostError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
