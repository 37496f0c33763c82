//! Presentation records for an evaluation

use crate::engine::{Breakpoint, DerivedValue, Evaluation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A breakpoint ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointRecord {
    /// Statistic value of the breakpoint
    pub value: String,
    /// Distance from the current value, always signed (`+3`, `-2`)
    pub delta: String,
    /// Search hit its step cap; the value is a bound, not a breakpoint
    pub exhausted: bool,
}

/// One row of output for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub display_name: String,
    pub value: Decimal,
    /// Raw decimal, trailing zeros removed
    pub formatted_value: String,
    /// `value * 100` with a `%` suffix, for percent specs only
    pub percent: Option<String>,
    pub is_percent: bool,
    pub has_breakpoints: bool,
    pub lesser: Option<BreakpointRecord>,
    pub greater: Option<BreakpointRecord>,
}

/// Format every derived value of an evaluation
pub fn format_report(evaluation: &Evaluation) -> Vec<DerivedRecord> {
    evaluation
        .values
        .iter()
        .map(|value| format_value(value, evaluation.current_value))
        .collect()
}

pub fn format_value(value: &DerivedValue, current: Decimal) -> DerivedRecord {
    let breakpoint = |b: Breakpoint| BreakpointRecord {
        value: format_decimal(b.value),
        delta: format_signed(b.value.saturating_sub(current)),
        exhausted: b.exhausted,
    };

    DerivedRecord {
        display_name: value.display_name.clone(),
        value: value.value,
        formatted_value: format_decimal(value.value),
        percent: value.is_percent.then(|| format_percent(value.value)),
        is_percent: value.is_percent,
        has_breakpoints: value.has_breakpoints,
        lesser: value.breakpoints.lesser().map(breakpoint),
        greater: value.breakpoints.greater().map(breakpoint),
    }
}

pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_decimal(value.saturating_mul(Decimal::ONE_HUNDRED)))
}

/// Decimal with an explicit leading sign
pub fn format_signed(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format_decimal(value)
    } else {
        format!("+{}", format_decimal(value.abs()))
    }
}
