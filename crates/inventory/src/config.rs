//! Board configuration: recognized locations and the default threshold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::LocationSet;
use crate::policy::{DEFAULT_LOW_STOCK_THRESHOLD, StockPolicy};
use crate::view::InventoryViewModel;

pub const LOCATIONS_VAR: &str = "STOCKBOARD_LOCATIONS";
pub const THRESHOLD_VAR: &str = "STOCKBOARD_LOW_STOCK_THRESHOLD";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid default low stock threshold {value:?}: must be a positive integer")]
    InvalidThreshold { value: String },

    #[error("invalid location list: {0}")]
    InvalidLocations(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    pub locations: LocationSet,
    pub default_threshold: i64,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    #[serde(default)]
    locations: LocationSet,
    #[serde(default = "default_threshold")]
    default_threshold: i64,
}

fn default_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        if raw.default_threshold <= 0 {
            return Err(ConfigError::InvalidThreshold {
                value: raw.default_threshold.to_string(),
            });
        }
        Ok(Self {
            locations: raw.locations,
            default_threshold: raw.default_threshold,
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            locations: LocationSet::default(),
            default_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// Read configuration from the process environment.
    ///
    /// - `STOCKBOARD_LOCATIONS`: comma-separated `key` or `key=Label`
    /// - `STOCKBOARD_LOW_STOCK_THRESHOLD`: positive integer
    ///
    /// Unset variables keep their defaults; set but invalid ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(THRESHOLD_VAR) {
            config.default_threshold = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|t| *t > 0)
                .ok_or(ConfigError::InvalidThreshold { value: raw.clone() })?;
        }

        if let Some(raw) = lookup(LOCATIONS_VAR) {
            config.locations = parse_locations(&raw)?;
        }

        tracing::debug!(
            locations = config.locations.len(),
            default_threshold = config.default_threshold,
            "board configuration loaded"
        );
        Ok(config)
    }

    pub fn policy(&self) -> StockPolicy {
        StockPolicy::new(self.default_threshold)
    }

    pub fn view_model(&self) -> InventoryViewModel {
        InventoryViewModel::new(self.locations.clone(), self.policy())
    }
}

/// Parse `office=Office,ci=C/I,gate`. A key without a label is its own label.
fn parse_locations(raw: &str) -> Result<LocationSet, ConfigError> {
    let entries = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, label)) => (key.trim().to_string(), label.trim().to_string()),
            None => (part.to_string(), part.to_string()),
        })
        .collect::<Vec<_>>();

    LocationSet::new(entries).map_err(|e| ConfigError::InvalidLocations(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Location;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = BoardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.policy().default_threshold(), 10);
    }

    #[test]
    fn reads_threshold_and_locations() {
        let config = BoardConfig::from_lookup(lookup(&[
            (THRESHOLD_VAR, " 25 "),
            (LOCATIONS_VAR, "office=Office, ci=C/I ,gate"),
        ]))
        .unwrap();
        assert_eq!(config.default_threshold, 25);
        assert_eq!(config.locations.len(), 3);
        assert_eq!(config.locations.label(&Location::new("ci")), Some("C/I"));
        assert_eq!(config.locations.label(&Location::new("gate")), Some("gate"));
    }

    #[test]
    fn rejects_bad_threshold() {
        for bad in ["0", "-4", "ten", ""] {
            let err = BoardConfig::from_lookup(lookup(&[(THRESHOLD_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold { .. }), "{bad:?}");
        }
    }

    #[test]
    fn rejects_bad_locations() {
        let err = BoardConfig::from_lookup(lookup(&[(LOCATIONS_VAR, "a,b,a")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocations(msg) if msg.contains("duplicate location: a")));

        let err = BoardConfig::from_lookup(lookup(&[(LOCATIONS_VAR, " , ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocations(_)));
    }

    #[test]
    fn deserializes_with_defaults_and_validation() {
        let config: BoardConfig = serde_json::from_str(r#"{"default_threshold": 4}"#).unwrap();
        assert_eq!(config.default_threshold, 4);
        assert_eq!(config.locations, LocationSet::default());

        assert!(serde_json::from_str::<BoardConfig>(r#"{"default_threshold": 0}"#).is_err());
    }
}
