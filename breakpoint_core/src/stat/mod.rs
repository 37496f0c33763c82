//! Statistic - a named attribute and its ordered derived values

mod spec;

pub use spec::DerivedValueSpec;

use crate::formula::{extra_value, FormulaInput, Intermediates};
use crate::types::BreakpointKind;
use rust_decimal::Decimal;
use std::collections::HashSet;
use thiserror::Error;

/// Statistic construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("statistic name is empty")]
    EmptyName,
    #[error("{stat}: derived value name is empty")]
    EmptySpecName { stat: String },
    #[error("{stat}: derived value '{spec}' is declared twice")]
    DuplicateSpec { stat: String, spec: String },
    #[error("{stat}: '{spec}' reads '{missing}', which is not declared before it")]
    UnknownIntermediate {
        stat: String,
        spec: String,
        missing: String,
    },
    #[error("{stat}: '{spec}' cannot have breakpoints (does not follow the statistic on its own)")]
    UnsearchableBreakpoints { stat: String, spec: String },
    #[error("{stat}: '{spec}' moves {expected:?} with the statistic but declares other breakpoints")]
    MismatchedBreakpoints {
        stat: String,
        spec: String,
        expected: BreakpointKind,
    },
    #[error("{stat}: '{spec}' divides by zero")]
    ZeroDivisor { stat: String, spec: String },
}

/// A character statistic with its derived-value table
///
/// Built once and never mutated; the current value lives on the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    name: String,
    base_value: Decimal,
    delta_rate: Decimal,
    specs: Vec<DerivedValueSpec>,
}

impl Statistic {
    /// Create a statistic, validating its spec ordering
    pub fn new(
        name: impl Into<String>,
        base_value: Decimal,
        delta_rate: Decimal,
        specs: Vec<DerivedValueSpec>,
    ) -> Result<Self, StatError> {
        let name = name.into();
        validate_specs(&name, &specs)?;
        Ok(Statistic {
            name,
            base_value,
            delta_rate,
            specs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_value(&self) -> Decimal {
        self.base_value
    }

    pub fn delta_rate(&self) -> Decimal {
        self.delta_rate
    }

    pub fn specs(&self) -> &[DerivedValueSpec] {
        &self.specs
    }

    pub fn extra_value(&self, value: Decimal, level_mod: Decimal) -> Decimal {
        extra_value(value, self.base_value, self.delta_rate, level_mod)
    }

    pub fn input_at(&self, value: Decimal, level_mod: Decimal) -> FormulaInput {
        FormulaInput {
            value,
            extra: self.extra_value(value, level_mod),
        }
    }

    /// Run every spec in order at `value`
    ///
    /// Each spec sees the results of the specs declared before it.
    pub fn evaluate_at(&self, value: Decimal, level_mod: Decimal) -> Vec<Decimal> {
        let input = self.input_at(value, level_mod);
        let mut intermediates = Intermediates::new();
        let mut results = Vec::with_capacity(self.specs.len());

        for spec in &self.specs {
            let result = spec.compute(input, &intermediates);
            intermediates.insert(spec.name.clone(), result);
            results.push(result);
        }

        results
    }
}

fn validate_specs(stat: &str, specs: &[DerivedValueSpec]) -> Result<(), StatError> {
    if stat.trim().is_empty() {
        return Err(StatError::EmptyName);
    }

    let mut declared: HashSet<&str> = HashSet::new();
    for spec in specs {
        if spec.name.trim().is_empty() {
            return Err(StatError::EmptySpecName {
                stat: stat.to_string(),
            });
        }

        let dependencies = spec.formula.dependencies();
        if let Some(missing) = dependencies.iter().find(|dep| !declared.contains(*dep)) {
            return Err(StatError::UnknownIntermediate {
                stat: stat.to_string(),
                spec: spec.name.clone(),
                missing: missing.to_string(),
            });
        }

        if spec.formula.has_zero_divisor() {
            return Err(StatError::ZeroDivisor {
                stat: stat.to_string(),
                spec: spec.name.clone(),
            });
        }

        if spec.has_breakpoints() {
            match spec.formula.breakpoint_kind() {
                None => {
                    return Err(StatError::UnsearchableBreakpoints {
                        stat: stat.to_string(),
                        spec: spec.name.clone(),
                    })
                }
                Some(expected) if expected != spec.breakpoints => {
                    return Err(StatError::MismatchedBreakpoints {
                        stat: stat.to_string(),
                        spec: spec.name.clone(),
                        expected,
                    })
                }
                Some(_) => {}
            }
        }

        if !declared.insert(spec.name.as_str()) {
            return Err(StatError::DuplicateSpec {
                stat: stat.to_string(),
                spec: spec.name.clone(),
            });
        }
    }

    Ok(())
}
