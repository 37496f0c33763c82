//! DerivedValueSpec - one computed quantity of a statistic

use crate::formula::{Formula, FormulaInput, Intermediates};
use crate::types::{BreakpointKind, SearchDirection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declarative description of a derived value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedValueSpec {
    /// Key used by later specs to read this result
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    pub formula: Formula,
    /// Display as a percentage (formatting only)
    #[serde(default = "default_is_percent")]
    pub is_percent: bool,
    #[serde(default)]
    pub breakpoints: BreakpointKind,
}

fn default_is_percent() -> bool {
    true
}

impl DerivedValueSpec {
    /// Create a percent spec with normal breakpoints
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, formula: Formula) -> Self {
        DerivedValueSpec {
            name: name.into(),
            display_name: display_name.into(),
            formula,
            is_percent: true,
            breakpoints: BreakpointKind::Normal,
        }
    }

    pub fn with_breakpoints(mut self, kind: BreakpointKind) -> Self {
        self.breakpoints = kind;
        self
    }

    pub fn without_breakpoints(self) -> Self {
        self.with_breakpoints(BreakpointKind::None)
    }

    pub fn not_percent(mut self) -> Self {
        self.is_percent = false;
        self
    }

    pub fn has_breakpoints(&self) -> bool {
        self.breakpoints.has_breakpoints()
    }

    /// Statistic step (+1/-1) used when searching for a breakpoint
    pub fn breakpoint_direction(&self, is_lesser: bool) -> Option<Decimal> {
        let direction = if is_lesser {
            SearchDirection::Lesser
        } else {
            SearchDirection::Greater
        };
        self.breakpoints.step(direction)
    }

    pub fn compute(&self, input: FormulaInput, intermediates: &Intermediates) -> Decimal {
        self.formula.evaluate(input, intermediates)
    }
}
