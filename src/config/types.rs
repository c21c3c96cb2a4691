use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Local HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (host:port). Busy ports fall back to the next free one.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Remote country dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the REST Countries API (e.g., "https://restcountries.com/v3.1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fields requested through the `fields` query parameter.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Presentation settings for the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document title and page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Delay before a search keystroke triggers a refresh (default: 500).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_base_url() -> String {
    "https://restcountries.com/v3.1".to_string()
}

fn default_fields() -> Vec<String> {
    ["flags", "name", "cca2", "cca3", "altSpellings", "idd"]
        .iter()
        .map(|f| f.to_string())
        .collect()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_title() -> String {
    "Countries Catalog".to_string()
}

fn default_search_debounce_ms() -> u64 {
    500
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fields: default_fields(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}
