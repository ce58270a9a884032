use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub tweets: TweetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the sentiment backend, without a trailing path.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TweetsConfig {
    /// How many tweets to request per fetch.
    pub count: u32,
}

impl Default for TweetsConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location if one
    /// exists, or fall back to defaults. An explicit path that cannot be
    /// read is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read_file(&path)?,
                _ => Self::default(),
            },
        };
        config.tweets.count = normalize_count(config.tweets.count);
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sentui").join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// The backend resets a count below 1 to its default of 10 and caps
/// anything above 100.
pub fn normalize_count(count: u32) -> u32 {
    if count == 0 {
        10
    } else {
        count.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.tweets.count, 10);
    }

    #[test]
    fn test_parse_full_file() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://analysis.local:8080"
            timeout_secs = 5

            [tweets]
            count = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://analysis.local:8080");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.tweets.count, 25);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.2:5000"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.tweets.count, 10);
    }

    #[test]
    fn test_normalize_count_zero_resets_to_default() {
        assert_eq!(normalize_count(0), 10);
    }

    #[test]
    fn test_normalize_count_caps_at_hundred() {
        assert_eq!(normalize_count(500), 100);
    }

    #[test]
    fn test_normalize_count_passes_valid_values() {
        assert_eq!(normalize_count(1), 1);
        assert_eq!(normalize_count(10), 10);
        assert_eq!(normalize_count(100), 100);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tweets]\ncount = 0").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        // Out-of-range values are normalized at load time.
        assert_eq!(config.tweets.count, 10);
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_load_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
