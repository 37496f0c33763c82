//! StatEngine - owns one statistic's current value and evaluates it

mod breakpoint;

pub use breakpoint::{find_breakpoints, search_direction, Breakpoint, BreakpointOutcome};

use crate::config::EngineConstants;
use crate::stat::Statistic;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// One derived value at the engine's current statistic value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedValue {
    pub name: String,
    pub display_name: String,
    pub value: Decimal,
    pub is_percent: bool,
    pub has_breakpoints: bool,
    pub breakpoints: BreakpointOutcome,
}

/// Full evaluation of a statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub stat_name: String,
    pub current_value: Decimal,
    pub extra: Decimal,
    pub values: Vec<DerivedValue>,
}

impl Evaluation {
    pub fn get(&self, name: &str) -> Option<&DerivedValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Owns a statistic and the user's current value for it
///
/// The presentation layer sends edit commands; nothing else mutates the
/// value.
#[derive(Debug, Clone)]
pub struct StatEngine {
    stat: Statistic,
    current_value: Decimal,
    constants: EngineConstants,
}

impl StatEngine {
    /// Create an engine starting at the statistic's base value
    pub fn new(stat: Statistic, constants: EngineConstants) -> Self {
        let current_value = stat.base_value();
        StatEngine {
            stat,
            current_value,
            constants,
        }
    }

    pub fn statistic(&self) -> &Statistic {
        &self.stat
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    pub fn current_value(&self) -> Decimal {
        self.current_value
    }

    pub fn set_value(&mut self, value: Decimal) {
        self.current_value = value;
    }

    /// Set the value from raw text; anything non-numeric becomes zero
    pub fn set_raw_input(&mut self, raw: &str) {
        self.set_value(parse_input(raw));
    }

    /// Step up by one, holding at `Decimal::MAX`
    pub fn increment(&mut self) {
        self.current_value = self.current_value.saturating_add(Decimal::ONE);
    }

    pub fn decrement(&mut self) {
        self.current_value = self.current_value.saturating_sub(Decimal::ONE);
    }

    /// Return to the statistic's base value
    pub fn reset(&mut self) {
        self.current_value = self.stat.base_value();
    }

    pub fn extra(&self) -> Decimal {
        self.stat.extra_value(self.current_value, self.constants.level_mod)
    }

    /// Compute every derived value and its breakpoints at the current value
    pub fn evaluate(&self) -> Evaluation {
        let current = self.current_value;
        let level_mod = self.constants.level_mod;
        let results = self.stat.evaluate_at(current, level_mod);

        let values = self
            .stat
            .specs()
            .iter()
            .zip(results)
            .map(|(spec, value)| DerivedValue {
                name: spec.name.clone(),
                display_name: spec.display_name.clone(),
                value,
                is_percent: spec.is_percent,
                has_breakpoints: spec.has_breakpoints(),
                breakpoints: find_breakpoints(
                    &self.stat,
                    spec,
                    current,
                    value,
                    level_mod,
                    &self.constants.search,
                ),
            })
            .collect();

        debug!(stat = self.stat.name(), %current, "evaluated");

        Evaluation {
            stat_name: self.stat.name().to_string(),
            current_value: current,
            extra: self.extra(),
            values,
        }
    }
}

/// Parse user input as a decimal, falling back to zero
pub fn parse_input(raw: &str) -> Decimal {
    match Decimal::from_str(raw.trim()) {
        Ok(value) => value,
        Err(_) => {
            debug!(raw, "non-numeric input treated as zero");
            Decimal::ZERO
        }
    }
}
