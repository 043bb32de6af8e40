use std::env;
#[cfg(not(target_arch = "wasm32"))]
use std::{fs::read_to_string, path::PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use directories::BaseDirs;
use tracing::{info, warn};

pub const API_URL_VAR: &str = "POKEPICKER_API_URL";
pub const DEFAULT_API_URL: &str = "https://3.137.101.123";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Resolved once at startup; the base URL stays fixed for the session.
    pub fn load() -> Self {
        Self::resolve(var(API_URL_VAR), read_config_file())
    }

    fn resolve(from_env: Option<String>, from_file: Option<String>) -> Self {
        let api_url = from_env
            .or_else(|| from_file.as_deref().and_then(parse_api_url))
            .unwrap_or_else(|| {
                info!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            });

        Self { api_url }
    }
}

/// A set but blank variable counts as unset.
fn var(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let value = value.trim();

    if value.is_empty() {
        warn!("Environment variable {key} is empty, ignoring it");
        return None;
    }

    Some(value.to_string())
}

/// Reads `api_url = <url>` out of the config file, ignoring `#` comments.
fn parse_api_url(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "api_url")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_config_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    let mut path = PathBuf::from(base_dirs.config_dir());
    path.push("pokepicker");
    path.push("pokepicker.conf");
    Some(path)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<String> {
    let path = get_config_path()?;

    match read_to_string(&path) {
        Ok(content) => Some(content),
        Err(e) => {
            info!("No config file at {}: {e}", path.display());
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins_over_file() {
        let config = Config::resolve(
            Some("http://localhost:8000".into()),
            Some("api_url = https://example.invalid".into()),
        );
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_file_used_without_env() {
        let file = "# testing backend\napi_url = http://localhost:8000\n";
        let config = Config::resolve(None, Some(file.into()));
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(Config::resolve(None, None).api_url, DEFAULT_API_URL);
        assert_eq!(
            Config::resolve(None, Some("other = value".into())).api_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_blank_env_var_is_ignored() {
        let key = "POKEPICKER_TEST_BLANK_URL";
        env::set_var(key, "   ");

        assert_eq!(var(key), None);
        assert_eq!(
            Config::resolve(var(key), Some("api_url = http://localhost:8000".into())).api_url,
            "http://localhost:8000"
        );

        env::remove_var(key);
    }

    #[test]
    fn test_env_var_is_trimmed() {
        let key = "POKEPICKER_TEST_PADDED_URL";
        env::set_var(key, "  http://localhost:8000 ");

        assert_eq!(var(key), Some("http://localhost:8000".to_string()));

        env::remove_var(key);
    }

    #[test]
    fn test_unset_env_var() {
        assert_eq!(var("POKEPICKER_TEST_NEVER_SET_URL"), None);
    }

    #[test]
    fn test_parse_api_url() {
        assert_eq!(
            parse_api_url("  api_url=https://3.137.101.123  "),
            Some("https://3.137.101.123".to_string())
        );
        assert_eq!(parse_api_url("# api_url = commented"), None);
        assert_eq!(parse_api_url("api_url ="), None);
        assert_eq!(parse_api_url(""), None);
    }
}
