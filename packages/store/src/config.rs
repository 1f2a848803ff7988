//! # Admin UI configuration — `students.toml`
//!
//! Where the backend lives and how the table behaves. The web binary embeds the
//! file at build time; every field has a default so a missing or partial file
//! is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! students_path = "/api/v1/students"
//!
//! [table]
//! page_size = 50
//! scroll_height_px = 500
//!
//! [log]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `students.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the collection endpoint; single records live under `{path}/{id}`.
    #[serde(default = "default_students_path")]
    pub students_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_students_path() -> String {
    "/api/v1/students".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            students_path: default_students_path(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL of the collection endpoint.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.students_path.trim_matches('/')
        )
    }
}

/// Table presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page. Values below 1 are treated as 1.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_scroll_height")]
    pub scroll_height_px: u32,
}

fn default_page_size() -> usize {
    50
}

fn default_scroll_height() -> u32 {
    500
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            scroll_height_px: default_scroll_height(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "students.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse, falling back to defaults on malformed input. The parse error is
    /// handed back so the caller can report it once logging is up.
    pub fn from_toml_or_default(s: &str) -> (Self, Option<toml::de::Error>) {
        match Self::from_toml(s) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Replace the backend address when `base_url` is set and non-blank.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Builder method to set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.table.page_size = page_size;
        self
    }
}
