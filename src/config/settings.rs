//! Settings structures for feedsearch configuration

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub feeds: FeedSettings,
    pub output: OutputSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Merge with environment variables (FEEDSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FEEDSEARCH_LOG_LEVEL") {
            self.general.log_level = val;
        }
        if let Some(val) = lookup("FEEDSEARCH_FEEDS_FILE") {
            self.feeds.data_file = PathBuf::from(val);
        }
        if let Some(val) = lookup("FEEDSEARCH_OUTPUT") {
            if let Ok(format) = val.parse() {
                self.output.format = format;
            }
        }
        if let Some(val) = lookup("FEEDSEARCH_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log filter directive used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Where the list of feeds comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Path to the JSON feed list
    pub data_file: PathBuf,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/data.json"),
        }
    }
}

/// Result rendering settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How matched results are rendered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "Field:\nContent" blocks
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SearchError::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Transport timeout for a single feed request in seconds
    pub request_timeout: f64,
    /// User agent sent with feed requests
    pub user_agent: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            user_agent: format!("feedsearch/{}", crate::VERSION),
            verify_ssl: true,
            proxy: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.feeds.data_file, PathBuf::from("data/data.json"));
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "feeds:\n  data_file: /tmp/feeds.json\noutput:\n  format: json\n";
        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings.feeds.data_file, PathBuf::from("/tmp/feeds.json"));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(settings.outgoing.request_timeout, 10.0);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Settings::from_yaml("output: [unterminated").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FEEDSEARCH_FEEDS_FILE", "feeds.json"),
            ("FEEDSEARCH_OUTPUT", "JSON"),
            ("FEEDSEARCH_REQUEST_TIMEOUT", "2.5"),
            ("FEEDSEARCH_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.feeds.data_file, PathBuf::from("feeds.json"));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.outgoing.request_timeout, 2.5);
        assert_eq!(settings.general.log_level, "debug");
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| match key {
            "FEEDSEARCH_OUTPUT" => Some("xml".to_string()),
            "FEEDSEARCH_REQUEST_TIMEOUT" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.outgoing.request_timeout, 10.0);
    }
}
