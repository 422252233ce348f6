//! Runtime configuration for the terminal runner.
//!
//! Every setting has a default; environment variables override them:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | randomizer seed | OS entropy |
//! | `BLOCKFALL_LOCK_DELAY_MS` | lock delay | 500 |
//! | `BLOCKFALL_LOCK_RESETS` | lock resets per piece | 15 |
//! | `BLOCKFALL_FRAME_MS` | frame period | 16 |

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::core::EngineConfig;

pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    pub frame_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = parse_var(&lookup, "BLOCKFALL_SEED")? {
            config.engine.seed = Some(seed);
        }
        if let Some(delay) = parse_var(&lookup, "BLOCKFALL_LOCK_DELAY_MS")? {
            config.engine.lock_delay_ms = delay;
        }
        if let Some(resets) = parse_var(&lookup, "BLOCKFALL_LOCK_RESETS")? {
            config.engine.lock_reset_limit = resets;
        }
        if let Some(frame_ms) = parse_var::<u64, _>(&lookup, "BLOCKFALL_FRAME_MS")? {
            anyhow::ensure!(frame_ms > 0, "BLOCKFALL_FRAME_MS must be positive");
            config.frame_ms = frame_ms;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .with_context(|| format!("invalid {}={:?}", name, raw))
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.engine.lock_delay_ms, 500);
        assert_eq!(config.engine.lock_reset_limit, 15);
        assert_eq!(config.frame_ms, 16);
    }

    #[test]
    fn test_overrides() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOCK_DELAY_MS", " 250 "),
            ("BLOCKFALL_LOCK_RESETS", "3"),
            ("BLOCKFALL_FRAME_MS", "33"),
        ]))
        .unwrap();

        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.engine.lock_delay_ms, 250);
        assert_eq!(config.engine.lock_reset_limit, 3);
        assert_eq!(config.frame_ms, 33);
    }

    #[test]
    fn test_blank_is_unset() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[("BLOCKFALL_SEED", "  ")])).unwrap();
        assert_eq!(config.engine.seed, None);
    }

    #[test]
    fn test_malformed_value_names_variable() {
        let err = RuntimeConfig::from_lookup(lookup_from(&[("BLOCKFALL_LOCK_RESETS", "lots")]))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("BLOCKFALL_LOCK_RESETS"));
    }

    #[test]
    fn test_zero_frame_period_rejected() {
        assert!(RuntimeConfig::from_lookup(lookup_from(&[("BLOCKFALL_FRAME_MS", "0")])).is_err());
    }
}
