use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Address of the published analytics document (e.g.,
    /// "https://example.github.io/analytics.json")
    pub analytics_url: String,

    /// Timezone used for the hourly chart when the viewer supplies none
    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// How long one fetched snapshot is reused. 0 re-fetches on every view.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

fn default_cache_ttl() -> u64 {
    60 // the producer republishes roughly once a minute
}

fn default_cache_max_entries() -> u64 {
    16
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .add_source(
                Environment::with_prefix("STATBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 3000,
            analytics_url: "http://127.0.0.1:9000/analytics.json".to_string(),
            default_timezone: "Europe/Moscow".to_string(),
            request_timeout_ms: 2000,
            cache_ttl_secs: 30,
            cache_max_entries: 4,
        }
    }

    #[test]
    fn test_default_host() {
        assert_eq!(default_host(), "0.0.0.0");
    }

    #[test]
    fn test_default_port() {
        assert_eq!(default_port(), 8080);
    }

    #[test]
    fn test_default_timezone() {
        assert_eq!(default_timezone(), "UTC");
    }

    #[test]
    fn test_default_request_timeout() {
        assert_eq!(default_request_timeout(), 10_000);
    }

    #[test]
    fn test_default_cache_ttl() {
        assert_eq!(default_cache_ttl(), 60);
    }

    #[test]
    fn test_default_cache_max_entries() {
        assert_eq!(default_cache_max_entries(), 16);
    }

    #[test]
    fn test_settings_fields() {
        let settings = test_settings();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 3000);
        assert_eq!(
            settings.analytics_url,
            "http://127.0.0.1:9000/analytics.json"
        );
        assert_eq!(settings.default_timezone, "Europe/Moscow");
        assert_eq!(settings.cache_ttl_secs, 30);
    }
}
