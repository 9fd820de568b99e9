use crate::error::{Result, ValorError};
use crate::images::{
    ImageResolver, DEFAULT_DETAIL_PLACEHOLDER, DEFAULT_IMAGE_DIR, DEFAULT_PLACEHOLDER,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_SOURCE: &str = "data/heroes.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Keys accepted by `valor config`.
pub const KEYS: [&str; 6] = [
    "data-source",
    "image-dir",
    "placeholder-image",
    "detail-placeholder-image",
    "debounce-ms",
    "show-count",
];

/// Configuration for valor, stored in .valor/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValorConfig {
    /// Path or URL of the record document
    #[serde(default = "default_data_source")]
    pub data_source: String,

    /// Directory record images are referenced from
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Shown for records without an image
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,

    /// Shown on the detail view for records without an image
    #[serde(default = "default_detail_placeholder")]
    pub detail_placeholder_image: String,

    /// Quiet period before a search input is applied in `browse`
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Whether listings carry the "Showing N of M" line
    #[serde(default = "default_show_count")]
    pub show_count: bool,
}

fn default_data_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_image_dir() -> String {
    DEFAULT_IMAGE_DIR.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_detail_placeholder() -> String {
    DEFAULT_DETAIL_PLACEHOLDER.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_show_count() -> bool {
    true
}

impl Default for ValorConfig {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            image_dir: default_image_dir(),
            placeholder_image: default_placeholder(),
            detail_placeholder_image: default_detail_placeholder(),
            debounce_ms: default_debounce_ms(),
            show_count: default_show_count(),
        }
    }
}

impl ValorConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ValorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn images(&self) -> ImageResolver {
        ImageResolver::new(&self.image_dir, &self.placeholder_image)
            .with_detail_placeholder(&self.detail_placeholder_image)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-source" => Ok(self.data_source.clone()),
            "image-dir" => Ok(self.image_dir.clone()),
            "placeholder-image" => Ok(self.placeholder_image.clone()),
            "detail-placeholder-image" => Ok(self.detail_placeholder_image.clone()),
            "debounce-ms" => Ok(self.debounce_ms.to_string()),
            "show-count" => Ok(self.show_count.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a key from its textual form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-source" => {
                if value.is_empty() {
                    return Err(ValorError::Config("data-source cannot be empty".into()));
                }
                self.data_source = value.to_string();
            }
            "image-dir" => self.image_dir = value.to_string(),
            "placeholder-image" => self.placeholder_image = value.to_string(),
            "detail-placeholder-image" => self.detail_placeholder_image = value.to_string(),
            "debounce-ms" => {
                self.debounce_ms = value.parse().map_err(|_| {
                    ValorError::Config(format!("debounce-ms must be a whole number, got {}", value))
                })?;
            }
            "show-count" => {
                self.show_count = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(ValorError::Config(format!(
                            "show-count must be true or false, got {}",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Every key with its current value, in display order.
    pub fn entries(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).ok().map(|v| (k.to_string(), v)))
            .collect()
    }
}

fn unknown_key(key: &str) -> ValorError {
    ValorError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
