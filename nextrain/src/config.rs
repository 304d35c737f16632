//! Application configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::header::{HeaderValue, USER_AGENT};

use crate::irish_rail::{DEFAULT_BASE_URL, IrishRailConfig};
use crate::transport::NetworkerConfig;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent upstream.
const DEFAULT_USER_AGENT: &str = concat!("nextrain/", env!("CARGO_PKG_VERSION"));

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?} ({reason})")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Irish Rail API base URL (`NEXTRAIN_BASE_URL`)
    pub base_url: String,
    /// Upstream timeout in seconds (`NEXTRAIN_TIMEOUT_SECS`)
    pub timeout_secs: u64,
    /// Log full upstream requests and responses (`NEXTRAIN_VERBOSE`)
    pub verbose: bool,
    /// Serve upstream responses from this directory (`NEXTRAIN_FIXTURE_DIR`)
    pub fixture_dir: Option<PathBuf>,
    /// Listen address (`NEXTRAIN_ADDR`)
    pub addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("NEXTRAIN_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("NEXTRAIN_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => return Err(invalid("NEXTRAIN_TIMEOUT_SECS", value, "must be positive")),
                Err(e) => return Err(invalid("NEXTRAIN_TIMEOUT_SECS", value, e)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let verbose = match lookup("NEXTRAIN_VERBOSE") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| invalid("NEXTRAIN_VERBOSE", value, "expected true or false"))?,
            None => false,
        };

        let fixture_dir = lookup("NEXTRAIN_FIXTURE_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let addr_value = lookup("NEXTRAIN_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|e| invalid("NEXTRAIN_ADDR", addr_value.clone(), e))?;

        Ok(Self {
            base_url,
            timeout_secs,
            verbose,
            fixture_dir,
            addr,
        })
    }

    /// HTTP client configuration.
    pub fn networker_config(&self) -> NetworkerConfig {
        NetworkerConfig::new()
            .with_default_header(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT))
            .with_timeout(self.timeout_secs)
            .with_verbose(self.verbose)
    }

    /// Irish Rail client configuration.
    pub fn irish_rail_config(&self) -> IrishRailConfig {
        IrishRailConfig::new().with_base_url(&self.base_url)
    }
}

fn invalid(key: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError {
        key,
        value,
        reason: reason.to_string(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.verbose);
        assert_eq!(config.fixture_dir, None);
        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("NEXTRAIN_BASE_URL", "http://localhost:9000/"),
            ("NEXTRAIN_TIMEOUT_SECS", "5"),
            ("NEXTRAIN_VERBOSE", "yes"),
            ("NEXTRAIN_FIXTURE_DIR", "data/fixtures"),
            ("NEXTRAIN_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.verbose);
        assert_eq!(config.fixture_dir, Some(PathBuf::from("data/fixtures")));
        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn flag_values() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load(&[("NEXTRAIN_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for NEXTRAIN_TIMEOUT_SECS"));

        assert!(load(&[("NEXTRAIN_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("NEXTRAIN_VERBOSE", "maybe")]).is_err());
        assert!(load(&[("NEXTRAIN_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn empty_fixture_dir_is_unset() {
        let config = load(&[("NEXTRAIN_FIXTURE_DIR", "")]).unwrap();
        assert_eq!(config.fixture_dir, None);
    }

    #[test]
    fn derived_configs() {
        let config = load(&[("NEXTRAIN_TIMEOUT_SECS", "7"), ("NEXTRAIN_VERBOSE", "1")]).unwrap();

        let networker = config.networker_config();
        assert_eq!(networker.timeout_secs, 7);
        assert!(networker.verbose);
        assert_eq!(
            networker.default_headers.get(USER_AGENT).unwrap(),
            DEFAULT_USER_AGENT
        );

        assert_eq!(config.irish_rail_config().base_url, DEFAULT_BASE_URL);
    }
}
