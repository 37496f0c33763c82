//! StatCatalog - the table of statistics, loaded from TOML

use crate::config::{self, ConfigError, EngineConstants};
use crate::engine::StatEngine;
use crate::stat::{DerivedValueSpec, Statistic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Catalog file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub constants: EngineConstants,
    #[serde(rename = "stats")]
    pub stats: Vec<StatConfig>,
}

/// One `[[stats]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatConfig {
    pub name: String,
    pub base: Decimal,
    pub delta_rate: Decimal,
    #[serde(default)]
    pub derived: Vec<DerivedValueSpec>,
}

/// Validated statistics plus the constants they are evaluated with
#[derive(Debug, Clone)]
pub struct StatCatalog {
    constants: EngineConstants,
    stats: Vec<Statistic>,
}

impl StatCatalog {
    /// Build from explicit parts
    pub fn new(constants: EngineConstants, stats: Vec<Statistic>) -> Result<Self, ConfigError> {
        constants.validate()?;

        let mut names = HashSet::new();
        for stat in &stats {
            if !names.insert(stat.name()) {
                return Err(ConfigError::ValidationError(format!(
                    "statistic '{}' is declared twice",
                    stat.name()
                )));
            }
        }

        Ok(StatCatalog { constants, stats })
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        let stats = config
            .stats
            .into_iter()
            .map(|stat| Statistic::new(stat.name, stat.base, stat.delta_rate, stat.derived))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(config.constants, stats)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: CatalogConfig = config::load_toml(path)?;
        let catalog = Self::from_config(config)?;
        info!(path = %path.display(), stats = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = config::parse_toml(content)?;
        Self::from_config(config)
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    pub fn stats(&self) -> &[Statistic] {
        &self.stats
    }

    pub fn get(&self, name: &str) -> Option<&Statistic> {
        self.stats.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// One engine per statistic, each starting at its base value
    pub fn engines(&self) -> Vec<StatEngine> {
        self.stats
            .iter()
            .cloned()
            .map(|stat| StatEngine::new(stat, self.constants.clone()))
            .collect()
    }

    /// Engine for a single statistic
    pub fn engine(&self, name: &str) -> Option<StatEngine> {
        self.get(name)
            .cloned()
            .map(|stat| StatEngine::new(stat, self.constants.clone()))
    }
}

/// The built-in level 80 catalog
pub fn default_catalog() -> Result<StatCatalog, ConfigError> {
    let toml = include_str!("../../config/catalog.toml");
    StatCatalog::parse(toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BreakpointOutcome;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = default_catalog().unwrap();

        let expected = [
            "Critical Hit",
            "Direct Hit",
            "Determination",
            "Skill/Spell Speed",
            "Tenacity",
            "Piety",
            "Defense",
        ];
        assert_eq!(catalog.len(), expected.len());
        for (stat, name) in catalog.stats().iter().zip(expected) {
            assert_eq!(stat.name(), name);
        }
        assert_eq!(catalog.constants(), &EngineConstants::default());
    }

    #[test]
    fn test_determination() {
        let catalog = default_catalog().unwrap();
        let mut engine = catalog.engine("Determination").unwrap();
        engine.set_value(dec!(1000));
        // 130 * 660 / 3300 = 26
        let evaluation = engine.evaluate();
        assert_eq!(evaluation.extra, dec!(26));
        assert_eq!(evaluation.get("damage").unwrap().value, dec!(1.026));
    }

    #[test]
    fn test_defense() {
        let catalog = default_catalog().unwrap();
        let mut engine = catalog.engine("Defense").unwrap();
        engine.set_value(dec!(2200));
        // 15 * 2200 / 3300 = 10
        let evaluation = engine.evaluate();
        assert_eq!(evaluation.get("mit").unwrap().value, dec!(0.1));
        let taken = evaluation.get("taken").unwrap();
        assert_eq!(taken.value, dec!(0.9));
        assert_eq!(taken.breakpoints, BreakpointOutcome::NotApplicable);
    }

    #[test]
    fn test_piety_tick() {
        let catalog = default_catalog().unwrap();
        let mut engine = catalog.engine("Piety").unwrap();
        engine.set_value(dec!(1000));
        // 150 * 660 / 3300 = 30
        let evaluation = engine.evaluate();
        assert_eq!(evaluation.get("mp").unwrap().value, dec!(30));
        assert_eq!(evaluation.get("tick").unwrap().value, dec!(230));
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml = r#"
[constants]
level_mod = 1900

[[stats]]
name = "Critical Hit"
base = 400
delta_rate = 200

[[stats.derived]]
name = "rate"
display_name = "Critical Hit Rate"
formula = { kind = "linear", offset = 50, divisor = 1000 }
"#;
        let catalog = StatCatalog::parse(toml).unwrap();
        assert_eq!(catalog.constants().level_mod, dec!(1900));
        assert_eq!(catalog.constants().search.max_steps, 10_000);

        let mut engine = catalog.engine("Critical Hit").unwrap();
        engine.set_value(dec!(495));
        // 200 * 95 / 1900 = 10
        assert_eq!(engine.extra(), dec!(10));
    }

    #[test]
    fn test_invalid_spec_order_rejected() {
        let toml = r#"
[[stats]]
name = "Piety"
base = 340
delta_rate = 150

[[stats.derived]]
name = "tick"
display_name = "MP per Tick"
formula = { kind = "offset", of = "mp", add = 200 }
breakpoints = "none"

[[stats.derived]]
name = "mp"
display_name = "Bonus MP"
formula = { kind = "linear", offset = 0, divisor = 1 }
"#;
        assert!(matches!(
            StatCatalog::parse(toml),
            Err(ConfigError::StatError(_))
        ));
    }

    #[test]
    fn test_duplicate_stat_rejected() {
        let toml = r#"
[[stats]]
name = "Piety"
base = 340
delta_rate = 150

[[stats]]
name = "Piety"
base = 340
delta_rate = 150
"#;
        assert!(matches!(
            StatCatalog::parse(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            StatCatalog::parse("[[stats]\nname = "),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = StatCatalog::load(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
