//! Core types shared across the engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a derived value responds to breakpoint search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointKind {
    /// No breakpoints (depends on other derived values, or constant)
    None,
    /// Derived value rises with the statistic
    #[default]
    Normal,
    /// Derived value falls as the statistic rises (e.g. recast time)
    Inverted,
}

impl BreakpointKind {
    /// Step applied to the statistic while searching in `direction`
    ///
    /// Returns `None` for specs without breakpoints.
    pub fn step(&self, direction: SearchDirection) -> Option<Decimal> {
        let toward_lesser = match self {
            BreakpointKind::None => return None,
            BreakpointKind::Normal => Decimal::NEGATIVE_ONE,
            BreakpointKind::Inverted => Decimal::ONE,
        };
        Some(match direction {
            SearchDirection::Lesser => toward_lesser,
            SearchDirection::Greater => -toward_lesser,
        })
    }

    pub fn has_breakpoints(&self) -> bool {
        !matches!(self, BreakpointKind::None)
    }
}

/// Which neighbouring breakpoint a search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Nearest statistic value where the derived value drops
    Lesser,
    /// Nearest statistic value where the derived value rises
    Greater,
}

impl SearchDirection {
    pub fn is_lesser(&self) -> bool {
        matches!(self, SearchDirection::Lesser)
    }

    /// Whether `candidate` has moved past `real` in this direction
    pub fn crossed(&self, candidate: Decimal, real: Decimal) -> bool {
        match self {
            SearchDirection::Lesser => candidate < real,
            SearchDirection::Greater => candidate > real,
        }
    }
}
