//! Configuration module for feedsearch
//!
//! Handles loading settings from YAML files and environment variables.
//! Loading happens before logging is set up, since the log level is itself
//! a setting, so nothing here emits log events; the caller reports which
//! file was used.

mod settings;

pub use settings::*;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "FEEDSEARCH_SETTINGS_PATH";

/// Pick the settings file: the explicit path if given, else the first
/// existing default location
pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(find_settings_file)
}

/// Load settings from `path`, or defaults when there is none, then apply
/// environment overrides
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    Ok(settings)
}

/// Locate the first existing settings file
fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("feedsearch/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn settings_file(name: &str, yaml: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "feedsearch-{}-{}.yml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/nonexistent/feedsearch.yml");
        assert_eq!(locate(Some(explicit.clone())), Some(explicit));
    }

    #[test]
    fn test_load_from_file() {
        let path = settings_file("load", "general:\n  log_level: debug\n");

        let settings = load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.general.log_level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/feedsearch.yml"))).is_err());
    }

    #[test]
    fn test_loading_emits_no_log_events() {
        let path = settings_file("silent", "output:\n  format: json\n");
        let captured = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer({
                let captured = captured.clone();
                move || captured.clone()
            })
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            load(locate(Some(path.clone())).as_deref()).unwrap();
            load(None).unwrap();
        });
        std::fs::remove_file(&path).unwrap();

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
