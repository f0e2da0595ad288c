//! Runtime configuration from environment variables
//!
//! | variable               | default            |
//! |------------------------|--------------------|
//! | `PORT`                 | 3000               |
//! | `CROP_TABLE_PATH`      | built-in table     |
//! | `PRICE_REFRESH_SECS`   | 60                 |
//! | `WEATHER_REFRESH_SECS` | 600                |
//! | `PRICE_JITTER`         | 0.05               |
//! | `WEATHER_LOCATION`     | "Current Location" |

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::data::{CropTable, CropTableError};
use crate::providers::prices::DEFAULT_JITTER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    CropTable(#[from] CropTableError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    pub port: u16,
    pub crop_table_path: Option<PathBuf>,
    pub price_refresh: Duration,
    pub weather_refresh: Duration,
    pub price_jitter: f64,
    pub weather_location: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            crop_table_path: None,
            price_refresh: Duration::from_secs(60),
            weather_refresh: Duration::from_secs(600),
            price_jitter: DEFAULT_JITTER,
            weather_location: "Current Location".to_string(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = parse(&value, "PORT", "port number")?;
        }
        if let Some(value) = lookup("CROP_TABLE_PATH") {
            if !value.trim().is_empty() {
                config.crop_table_path = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = lookup("PRICE_REFRESH_SECS") {
            config.price_refresh = parse_secs(&value, "PRICE_REFRESH_SECS")?;
        }
        if let Some(value) = lookup("WEATHER_REFRESH_SECS") {
            config.weather_refresh = parse_secs(&value, "WEATHER_REFRESH_SECS")?;
        }
        if let Some(value) = lookup("PRICE_JITTER") {
            let jitter: f64 = parse(&value, "PRICE_JITTER", "fraction in [0, 1)")?;
            if !(0.0..1.0).contains(&jitter) {
                return Err(invalid("PRICE_JITTER", &value, "fraction in [0, 1)"));
            }
            config.price_jitter = jitter;
        }
        if let Some(value) = lookup("WEATHER_LOCATION") {
            config.weather_location = value;
        }

        Ok(config)
    }

    /// The configured crop table, or the built-in one
    pub fn load_crop_table(&self) -> Result<Arc<CropTable>, ConfigError> {
        match &self.crop_table_path {
            Some(path) => Ok(Arc::new(CropTable::from_json_file(path)?)),
            None => Ok(Arc::new(CropTable::builtin().clone())),
        }
    }
}

fn invalid(var: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    }
}

fn parse<T: std::str::FromStr>(value: &str, var: &'static str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(var, value, expected))
}

fn parse_secs(value: &str, var: &'static str) -> Result<Duration, ConfigError> {
    let secs: u64 = parse(value, var, "positive number of seconds")?;
    if secs == 0 {
        return Err(invalid(var, value, "positive number of seconds"));
    }
    Ok(Duration::from_secs(secs))
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
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.price_refresh, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = AdvisorConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("PRICE_REFRESH_SECS", "30"),
            ("PRICE_JITTER", "0"),
            ("WEATHER_LOCATION", "Nashik"),
            ("CROP_TABLE_PATH", "crops.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.price_refresh, Duration::from_secs(30));
        assert_eq!(config.price_jitter, 0.0);
        assert_eq!(config.weather_location, "Nashik");
        assert_eq!(config.crop_table_path, Some(PathBuf::from("crops.json")));
    }

    #[test]
    fn test_invalid_values() {
        let err = AdvisorConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(AdvisorConfig::from_lookup(lookup(&[("PRICE_JITTER", "1.5")])).is_err());
        assert!(AdvisorConfig::from_lookup(lookup(&[("WEATHER_REFRESH_SECS", "0")])).is_err());
    }

    #[test]
    fn test_builtin_table_when_unset() {
        let table = AdvisorConfig::default().load_crop_table().unwrap();
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_missing_table_file() {
        let config = AdvisorConfig {
            crop_table_path: Some(PathBuf::from("/nonexistent/crops.json")),
            ..AdvisorConfig::default()
        };
        assert!(matches!(
            config.load_crop_table(),
            Err(ConfigError::CropTable(CropTableError::Io { .. }))
        ));
    }
}
