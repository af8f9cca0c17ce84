//! Runtime configuration
//!
//! Read once from the environment at startup.

use crate::conversion::{DEFAULT_PRECISION, MAX_PRECISION};

pub const PRECISION_VAR: &str = "SHREKDROID_PRECISION";
pub const DEFAULT_CATEGORY_VAR: &str = "SHREKDROID_DEFAULT_CATEGORY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decimals in formatted results
    pub precision: usize,
    /// Category selected when a session starts; first category if unset
    pub default_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            default_category: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let precision = match lookup(PRECISION_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => p,
                Ok(p) => {
                    tracing::warn!("{}={} exceeds {}, clamping", PRECISION_VAR, p, MAX_PRECISION);
                    MAX_PRECISION
                }
                Err(_) => {
                    tracing::warn!(
                        "Ignoring invalid {}='{}', using {}",
                        PRECISION_VAR,
                        raw,
                        DEFAULT_PRECISION
                    );
                    DEFAULT_PRECISION
                }
            },
            None => DEFAULT_PRECISION,
        };

        let default_category = lookup(DEFAULT_CATEGORY_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            precision,
            default_category,
        }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_precision_from_env() {
        let config = Config::from_lookup(lookup_from(&[(PRECISION_VAR, " 2 ")]));
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_invalid_precision_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(PRECISION_VAR, "lots")]));
        assert_eq!(config.precision, DEFAULT_PRECISION);

        let config = Config::from_lookup(lookup_from(&[(PRECISION_VAR, "99")]));
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_default_category() {
        let config = Config::from_lookup(lookup_from(&[(DEFAULT_CATEGORY_VAR, "Distance")]));
        assert_eq!(config.default_category.as_deref(), Some("Distance"));

        let config = Config::from_lookup(lookup_from(&[(DEFAULT_CATEGORY_VAR, "   ")]));
        assert_eq!(config.default_category, None);
    }
}
