//! Breakpoint search
//!
//! Walks the statistic one point at a time from its current value until the
//! spec's own formula moves past the current result. The walk assumes the
//! formula is monotonic along each direction, which is why specs that read
//! other derived values are never searched.

use crate::config::SearchConstants;
use crate::formula::Intermediates;
use crate::stat::{DerivedValueSpec, Statistic};
use crate::types::SearchDirection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A breakpoint on the statistic's scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Statistic value where the derived value changes
    pub value: Decimal,
    /// The step cap was reached before the derived value changed
    pub exhausted: bool,
}

/// Breakpoint search outcome for one derived value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakpointOutcome {
    /// The spec does not support breakpoints
    NotApplicable,
    /// The statistic is below its base; no search performed
    BelowBase,
    Found { lesser: Breakpoint, greater: Breakpoint },
}

impl BreakpointOutcome {
    pub fn lesser(&self) -> Option<Breakpoint> {
        match self {
            BreakpointOutcome::Found { lesser, .. } => Some(*lesser),
            _ => None,
        }
    }

    pub fn greater(&self) -> Option<Breakpoint> {
        match self {
            BreakpointOutcome::Found { greater, .. } => Some(*greater),
            _ => None,
        }
    }
}

/// Find the lesser and greater breakpoints of `spec` around `current`
///
/// `real` is the spec's value at `current`.
pub fn find_breakpoints(
    stat: &Statistic,
    spec: &DerivedValueSpec,
    current: Decimal,
    real: Decimal,
    level_mod: Decimal,
    search: &SearchConstants,
) -> BreakpointOutcome {
    if !spec.has_breakpoints() {
        return BreakpointOutcome::NotApplicable;
    }
    if current < stat.base_value() {
        return BreakpointOutcome::BelowBase;
    }

    let lesser = search_direction(stat, spec, current, real, level_mod, search, SearchDirection::Lesser);
    let greater = search_direction(stat, spec, current, real, level_mod, search, SearchDirection::Greater);

    match (lesser, greater) {
        (Some(lesser), Some(greater)) => BreakpointOutcome::Found { lesser, greater },
        _ => BreakpointOutcome::NotApplicable,
    }
}

/// Walk from `current` in `direction` until the formula crosses `real`
///
/// Returns `None` if the spec has no breakpoints. When `max_steps` runs out
/// the last candidate is returned flagged as exhausted.
pub fn search_direction(
    stat: &Statistic,
    spec: &DerivedValueSpec,
    current: Decimal,
    real: Decimal,
    level_mod: Decimal,
    search: &SearchConstants,
    direction: SearchDirection,
) -> Option<Breakpoint> {
    let step = spec.breakpoint_direction(direction.is_lesser())?;
    let empty = Intermediates::new();
    let mut candidate = current;

    for _ in 0..search.max_steps {
        let value = spec.compute(stat.input_at(candidate, level_mod), &empty);
        if direction.crossed(value, real) {
            return Some(Breakpoint {
                value: candidate,
                exhausted: false,
            });
        }
        candidate = candidate.saturating_add(step);
    }

    warn!(
        stat = stat.name(),
        spec = spec.name.as_str(),
        ?direction,
        %current,
        max_steps = search.max_steps,
        "breakpoint search exhausted"
    );
    Some(Breakpoint {
        value: candidate,
        exhausted: true,
    })
}
