use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "chips.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            log_filter: DEFAULT_LOG_FILTER.into(),
            log_file: None,
            json: false,
        }
    }
}

// On-disk shape of chips.toml; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    catalog: Option<PathBuf>,
    log_filter: Option<String>,
    log_file: Option<PathBuf>,
}

impl Settings {
    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.catalog {
            self.catalog = Some(v);
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = Some(v);
        }
    }

    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get("CHIPS_CATALOG").filter(|v| !v.is_empty()) {
            self.catalog = Some(PathBuf::from(v));
        }
        if let Some(v) = get("CHIPS_LOG").filter(|v| !v.is_empty()) {
            self.log_filter = v;
        }
        if let Some(v) = get("CHIPS_LOG_FILE").filter(|v| !v.is_empty()) {
            self.log_file = Some(PathBuf::from(v));
        }
    }
}

pub fn parse_settings(raw: &str) -> Result<Settings, ConfigError> {
    let file: FileSettings = toml::from_str(raw)?;
    let mut settings = Settings::default();
    settings.apply_file(file);
    Ok(settings)
}

/// Defaults, then `chips.toml` in `dir` when present, then `CHIPS_*` environment variables.
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let path = dir.join(SETTINGS_FILE);
    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    settings.apply_env(|k| std::env::var(k).ok());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn file_keys_override_defaults() {
        let s = parse_settings("catalog = \"people.json\"\nlog_filter = \"debug\"\n").unwrap();
        assert_eq!(s.catalog, Some(PathBuf::from("people.json")));
        assert_eq!(s.log_filter, "debug");
        assert_eq!(s.log_file, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(parse_settings("catalog = ["), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn env_overrides_file() {
        let mut s = parse_settings("catalog = \"a.json\"").unwrap();
        let env: HashMap<&str, &str> =
            [("CHIPS_CATALOG", "b.json"), ("CHIPS_LOG", ""), ("CHIPS_LOG_FILE", "/tmp/chips.log")]
                .into_iter()
                .collect();
        s.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(s.catalog, Some(PathBuf::from("b.json")));
        assert_eq!(s.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/chips.log")));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let s = load_settings(Path::new("/nonexistent-chips-dir")).unwrap();
        assert!(!s.json);
    }
}
