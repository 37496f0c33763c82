//! Formula - declarative derived-value computations
//!
//! Every formula is a pure function of the statistic's value, its `extra`
//! contribution and the results of earlier derived values in the same
//! statistic ("intermediates").
//!
//! Arithmetic saturates at the `Decimal` range so any input evaluates.

mod intermediates;

pub use intermediates::Intermediates;

use crate::types::BreakpointKind;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// Normalized contribution of a statistic above its base
///
/// `extra = floor(delta_rate * (value - base) / level_mod)`, flooring toward
/// negative infinity so values below base produce negative extras.
pub fn extra_value(value: Decimal, base: Decimal, delta_rate: Decimal, level_mod: Decimal) -> Decimal {
    let delta = value.saturating_sub(base);
    divide(delta_rate.saturating_mul(delta), level_mod).floor()
}

/// Inputs a formula sees for one statistic value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaInput {
    /// Raw statistic value
    pub value: Decimal,
    /// `extra_value` at `value`
    pub extra: Decimal,
}

/// A derived-value computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    /// `(extra + offset) / divisor`
    Linear { offset: Decimal, divisor: Decimal },
    /// `(offset - extra) / divisor`
    Inverse { offset: Decimal, divisor: Decimal },
    /// Fixed value
    Constant { value: Decimal },
    /// Recast time in seconds, truncated to two decimals:
    /// `floor((1000 - extra) * base_ms / 1000) / 1000`
    Recast { base_ms: Decimal },
    /// Expected multiplier of a chance-based bonus: `1 + rate * bonus`
    Expected { rate: String, bonus: String },
    /// `1 - of`
    Complement { of: String },
    /// `of + add`
    Offset { of: String, add: Decimal },
}

impl Formula {
    /// Evaluate against one statistic value
    ///
    /// Missing intermediates read as zero. Statistic construction rejects
    /// formulas that reference undeclared names, so this only happens when a
    /// formula is evaluated outside its statistic (breakpoint search).
    pub fn evaluate(&self, input: FormulaInput, intermediates: &Intermediates) -> Decimal {
        match self {
            Formula::Linear { offset, divisor } => divide(input.extra.saturating_add(*offset), *divisor),
            Formula::Inverse { offset, divisor } => divide(offset.saturating_sub(input.extra), *divisor),
            Formula::Constant { value } => *value,
            Formula::Recast { base_ms } => {
                let scaled = divide(THOUSAND.saturating_sub(input.extra).saturating_mul(*base_ms), THOUSAND).floor();
                divide(scaled, THOUSAND).round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity)
            }
            Formula::Expected { rate, bonus } => {
                let chance = intermediates.value_or_zero(rate);
                Decimal::ONE.saturating_add(chance.saturating_mul(intermediates.value_or_zero(bonus)))
            }
            Formula::Complement { of } => Decimal::ONE.saturating_sub(intermediates.value_or_zero(of)),
            Formula::Offset { of, add } => intermediates.value_or_zero(of).saturating_add(*add),
        }
    }

    /// Names of intermediates this formula reads
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            Formula::Expected { rate, bonus } => vec![rate.as_str(), bonus.as_str()],
            Formula::Complement { of } | Formula::Offset { of, .. } => vec![of.as_str()],
            Formula::Linear { .. } | Formula::Inverse { .. } | Formula::Constant { .. } | Formula::Recast { .. } => {
                Vec::new()
            }
        }
    }

    /// Direction the result moves as `extra` rises
    ///
    /// `None` when the result does not follow the statistic on its own
    /// (constants, formulas over intermediates, degenerate coefficients).
    pub fn breakpoint_kind(&self) -> Option<BreakpointKind> {
        match self {
            Formula::Linear { divisor, .. } => kind_for_slope(*divisor),
            Formula::Inverse { divisor, .. } => kind_for_slope(-*divisor),
            Formula::Recast { base_ms } => kind_for_slope(-*base_ms),
            Formula::Constant { .. }
            | Formula::Expected { .. }
            | Formula::Complement { .. }
            | Formula::Offset { .. } => None,
        }
    }

    /// Whether the formula divides by zero for every input
    pub fn has_zero_divisor(&self) -> bool {
        match self {
            Formula::Linear { divisor, .. } | Formula::Inverse { divisor, .. } => divisor.is_zero(),
            _ => false,
        }
    }
}

fn kind_for_slope(slope: Decimal) -> Option<BreakpointKind> {
    match slope.cmp(&Decimal::ZERO) {
        Ordering::Greater => Some(BreakpointKind::Normal),
        Ordering::Less => Some(BreakpointKind::Inverted),
        Ordering::Equal => None,
    }
}

fn divide(numerator: Decimal, divisor: Decimal) -> Decimal {
    numerator.checked_div(divisor).unwrap_or(Decimal::ZERO)
}
