//! Server configuration from environment variables.
//!
//! - `CONTENT_PATH`: JSON content file (default: embedded portfolio)
//! - `PORT`: listen port (default: 3000)
//! - `DEFAULT_LANG`: language for `/` (default: en)
//! - `CACHE_TTL_SECS`: rendered page cache TTL (default: 300, at most one year)

use std::path::PathBuf;
use std::str::FromStr;

use crate::content::Language;

/// Longest accepted page cache TTL. moka rejects durations beyond 1000 years.
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub content_path: Option<PathBuf>,
    pub port: u16,
    pub default_lang: Language,
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            port: 3000,
            default_lang: Language::En,
            cache_ttl_secs: 300,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset or empty variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            content_path: get("CONTENT_PATH").map(PathBuf::from),
            port: parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port),
            default_lang: parse_var("DEFAULT_LANG", get("DEFAULT_LANG"))?
                .unwrap_or(defaults.default_lang),
            cache_ttl_secs: parse_cache_ttl(get("CACHE_TTL_SECS"))?
                .unwrap_or(defaults.cache_ttl_secs),
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { name, value: v.clone() })
        })
        .transpose()
}

fn parse_cache_ttl(value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let ttl: Option<u64> = parse_var("CACHE_TTL_SECS", value.clone())?;
    match (ttl, value) {
        (Some(secs), Some(raw)) if secs > MAX_CACHE_TTL_SECS => Err(ConfigError::InvalidVar {
            name: "CACHE_TTL_SECS",
            value: raw,
        }),
        _ => Ok(ttl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_reads_all_vars() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CONTENT_PATH", "/srv/portfolio.json"),
            ("PORT", "8080"),
            ("DEFAULT_LANG", "ar"),
            ("CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/portfolio.json")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_lang, Language::Ar);
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidVar {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
        assert!(ServerConfig::from_lookup(lookup(&[("DEFAULT_LANG", "fr")])).is_err());
    }

    #[test]
    fn test_cache_ttl_is_bounded() {
        let config =
            ServerConfig::from_lookup(lookup(&[("CACHE_TTL_SECS", "31536000")])).unwrap();
        assert_eq!(config.cache_ttl_secs, MAX_CACHE_TTL_SECS);

        let err = ServerConfig::from_lookup(lookup(&[("CACHE_TTL_SECS", "99999999999")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidVar {
                name: "CACHE_TTL_SECS",
                value: "99999999999".to_string()
            }
        );
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 3000);
    }
}
