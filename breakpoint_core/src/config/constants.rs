//! Engine constants configuration

use super::ConfigError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunable engine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    /// Level divisor used by the extra-value formula
    #[serde(default = "default_level_mod")]
    pub level_mod: Decimal,
    #[serde(default)]
    pub search: SearchConstants,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            level_mod: default_level_mod(),
            search: SearchConstants::default(),
        }
    }
}

impl EngineConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_mod.is_zero() {
            return Err(ConfigError::ValidationError(
                "level_mod must be non-zero".to_string(),
            ));
        }
        if self.search.max_steps == 0 {
            return Err(ConfigError::ValidationError(
                "search.max_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_level_mod() -> Decimal {
    Decimal::from(3300)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConstants {
    /// Upper bound on steps taken by a single breakpoint search
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

impl Default for SearchConstants {
    fn default() -> Self {
        SearchConstants {
            max_steps: default_max_steps(),
        }
    }
}

fn default_max_steps() -> u32 {
    10_000
}
