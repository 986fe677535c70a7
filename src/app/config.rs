//! Runtime configuration read from the environment.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE: &str = "sqlite://emails.db";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// sqlx SQLite URL of the log store.
    pub database_url: String,
    pub addr: SocketAddr,
    /// When false, tracking events are only written to the log.
    pub persist: bool,
}

impl Config {
    /// Read `CONSULTRACK_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("CONSULTRACK_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let raw_addr = lookup("CONSULTRACK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;
        let persist = match lookup("CONSULTRACK_PERSIST") {
            None => true,
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidFlag {
                key: "CONSULTRACK_PERSIST",
                value: v,
            })?,
        };
        Ok(Self {
            database_url,
            addr,
            persist,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),
    #[error("invalid boolean for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE);
        assert_eq!(cfg.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(cfg.persist);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("CONSULTRACK_DATABASE", "sqlite://data/track.db"),
            ("CONSULTRACK_ADDR", "0.0.0.0:8080"),
            ("CONSULTRACK_PERSIST", "off"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite://data/track.db");
        assert_eq!(cfg.addr.port(), 8080);
        assert!(!cfg.persist);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            Config::from_lookup(lookup(&[("CONSULTRACK_ADDR", "nope")])),
            Err(ConfigError::InvalidAddr("nope".into()))
        );
        assert!(matches!(
            Config::from_lookup(lookup(&[("CONSULTRACK_PERSIST", "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
