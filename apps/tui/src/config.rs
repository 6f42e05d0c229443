use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use taxi_dashboard_core::api::{DEFAULT_API_BASE, DEFAULT_TOP_LIMIT};

pub const DEFAULT_ZONES_PATH: &str = "backend/processed/taxi_zones.geojson";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub zones_path: PathBuf,
    pub top_limit: u32,
    pub timeout: Duration,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            zones_path: PathBuf::from(DEFAULT_ZONES_PATH),
            top_limit: DEFAULT_TOP_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from a variable lookup, falling back to the
    /// defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_base: lookup("TAXI_API_BASE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.api_base),
            zones_path: lookup("TAXI_ZONES_PATH").map_or(defaults.zones_path, PathBuf::from),
            top_limit: parse_var(&lookup, "TAXI_TOP_LIMIT")?.unwrap_or(defaults.top_limit),
            timeout: parse_var(&lookup, "TAXI_HTTP_TIMEOUT_SECS")?
                .map_or(defaults.timeout, Duration::from_secs),
            debug: lookup("DEBUG").is_some_and(|value| !value.is_empty() && value != "0"),
        })
    }
}

/// Loads `.env`, then reads the process environment.
pub fn init_app_config() -> Result<AppConfig> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| eyre!("Invalid value for {key}: {value}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.top_limit, 10);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TAXI_API_BASE", "http://analytics:8080"),
            ("TAXI_ZONES_PATH", "/data/zones.geojson"),
            ("TAXI_TOP_LIMIT", "25"),
            ("TAXI_HTTP_TIMEOUT_SECS", "5"),
            ("DEBUG", "1"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://analytics:8080");
        assert_eq!(config.zones_path, PathBuf::from("/data/zones.geojson"));
        assert_eq!(config.top_limit, 25);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.debug);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let error = AppConfig::from_lookup(lookup(&[("TAXI_TOP_LIMIT", "ten")])).unwrap_err();
        assert!(error.to_string().contains("TAXI_TOP_LIMIT"));
    }
}
