use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSETS_DIR: &str = "./public/assets";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FILEMYRTI_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("FILEMYRTI_API_URL must not be empty")]
    EmptyApiUrl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl PortalConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("FILEMYRTI_API_URL") {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if url.is_empty() {
                    return Err(ConfigError::EmptyApiUrl);
                }
                url
            }
            None => defaults.api_base_url,
        };

        let port = match lookup("FILEMYRTI_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            api_base_url,
            host: lookup("FILEMYRTI_HOST").unwrap_or(defaults.host),
            port,
            assets_dir: lookup("FILEMYRTI_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PortalConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            ("FILEMYRTI_API_URL", "https://api.filemyrti.com/ "),
            ("FILEMYRTI_HOST", "127.0.0.1"),
            ("FILEMYRTI_PORT", "9090"),
            ("FILEMYRTI_ASSETS_DIR", "/srv/assets"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.filemyrti.com");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn test_invalid_port() {
        let err = PortalConfig::from_lookup(lookup_from(&[("FILEMYRTI_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    }

    #[test]
    fn test_empty_api_url() {
        let err = PortalConfig::from_lookup(lookup_from(&[("FILEMYRTI_API_URL", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyApiUrl));
    }
}
