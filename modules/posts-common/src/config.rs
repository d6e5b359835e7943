use std::env;
use std::time::Duration;

use crate::error::PostsError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Event bus
    pub event_bus_url: String,
    pub event_bus_timeout_secs: u64,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            event_bus_url: "http://event-bus-srv:4005".to_string(),
            event_bus_timeout_secs: 10,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, PostsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to defaults;
    /// set-but-unparseable numeric keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PostsError> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("POSTS_HOST").unwrap_or(defaults.host),
            port: parse_or("POSTS_PORT", lookup("POSTS_PORT"), defaults.port)?,
            event_bus_url: lookup("EVENT_BUS_URL").unwrap_or(defaults.event_bus_url),
            event_bus_timeout_secs: parse_or(
                "EVENT_BUS_TIMEOUT_SECS",
                lookup("EVENT_BUS_TIMEOUT_SECS"),
                defaults.event_bus_timeout_secs,
            )?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn event_bus_timeout(&self) -> Duration {
        Duration::from_secs(self.event_bus_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    value: Option<String>,
    default: T,
) -> Result<T, PostsError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PostsError::Config(format!("{key} must be a number, got {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
        assert_eq!(config.event_bus_url, "http://event-bus-srv:4005");
        assert_eq!(config.event_bus_timeout(), Duration::from_secs(10));
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("POSTS_HOST", "127.0.0.1"),
            ("POSTS_PORT", "8080"),
            ("EVENT_BUS_URL", "http://localhost:4005"),
            ("EVENT_BUS_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.event_bus_url, "http://localhost:4005");
        assert_eq!(config.event_bus_timeout_secs, 3);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("POSTS_PORT", "four thousand")])).unwrap_err();
        assert!(matches!(err, PostsError::Config(msg) if msg.contains("POSTS_PORT")));
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(
            "ALLOWED_ORIGINS",
            "http://a.test, http://b.test,,",
        )]))
        .unwrap();
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }
}
