use pagecraft_model::{DeviceType, PageMeta};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Initial page title
    pub page_title: String,

    /// Initial meta description
    pub page_description: String,

    /// Device the canvas opens on
    pub device: DeviceType,

    /// Seed the canvas with the welcome section when no page is given
    pub starter_page: bool,

    /// Label mixed into generated component ids
    pub session_label: String,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.page_title.clone(),
            description: self.page_description.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let page = PageMeta::default();
        Self {
            page_title: page.title,
            page_description: page.description,
            device: DeviceType::Desktop,
            starter_page: true,
            session_label: "pagecraft".to_string(),
        }
    }
}
