//! Property tests for extra values and breakpoint search

use breakpoint_core::prelude::*;
use breakpoint_core::{extra_value, SearchDirection};
use proptest::prelude::*;

fn catalog() -> StatCatalog {
    default_catalog().expect("default catalog parses")
}

fn level_mod() -> Decimal {
    Decimal::from(3300)
}

/// Recompute one spec directly at `value`, the way the search does
fn spec_at(stat: &Statistic, spec: &DerivedValueSpec, value: Decimal) -> Decimal {
    spec.compute(stat.input_at(value, level_mod()), &Intermediates::new())
}

proptest! {
    #[test]
    fn extra_matches_formula(offset in 0i64..5000, stat_index in 0usize..7) {
        let catalog = catalog();
        let stat = &catalog.stats()[stat_index];
        let value = stat.base_value() + Decimal::from(offset);

        let expected = (stat.delta_rate() * Decimal::from(offset) / level_mod()).floor();
        prop_assert_eq!(stat.extra_value(value, level_mod()), expected);
        prop_assert_eq!(
            extra_value(value, stat.base_value(), stat.delta_rate(), level_mod()),
            expected
        );
    }

    #[test]
    fn breakpoints_bracket_current_value(offset in 0i64..3000, stat_index in 0usize..7) {
        let catalog = catalog();
        let stat = &catalog.stats()[stat_index];
        let mut engine = catalog.engine(stat.name()).unwrap();
        let current = stat.base_value() + Decimal::from(offset);
        engine.set_value(current);
        let evaluation = engine.evaluate();

        for (spec, derived) in stat.specs().iter().zip(&evaluation.values) {
            let BreakpointOutcome::Found { lesser, greater } = derived.breakpoints else {
                prop_assert!(!spec.has_breakpoints());
                continue;
            };
            prop_assert!(!lesser.exhausted && !greater.exhausted);

            let real = derived.value;
            let lesser_step = spec.breakpoint_direction(true).unwrap();
            let greater_step = spec.breakpoint_direction(false).unwrap();

            prop_assert!(spec_at(stat, spec, lesser.value) < real);
            prop_assert!(spec_at(stat, spec, lesser.value - lesser_step) >= real);
            prop_assert!(spec_at(stat, spec, greater.value) > real);
            prop_assert!(spec_at(stat, spec, greater.value - greater_step) <= real);
        }
    }

    #[test]
    fn evaluation_is_idempotent(value in -1000i64..6000, stat_index in 0usize..7) {
        let catalog = catalog();
        let mut engines = catalog.engines();
        let engine = &mut engines[stat_index];
        engine.set_value(Decimal::from(value));
        prop_assert_eq!(engine.evaluate(), engine.evaluate());
    }

    #[test]
    fn crit_rate_non_decreasing(extra in -500i64..2000) {
        let catalog = catalog();
        let crit = catalog.get("Critical Hit").unwrap();
        let rate = &crit.specs()[0];
        let at = |e: i64| {
            rate.compute(
                FormulaInput { value: Decimal::ZERO, extra: Decimal::from(e) },
                &Intermediates::new(),
            )
        };
        prop_assert!(at(extra + 1) >= at(extra));
    }

    #[test]
    fn below_base_omits_breakpoints(below in 1i64..2000, stat_index in 0usize..7) {
        let catalog = catalog();
        let stat = &catalog.stats()[stat_index];
        let mut engine = catalog.engine(stat.name()).unwrap();
        engine.set_value(stat.base_value() - Decimal::from(below));
        let evaluation = engine.evaluate();

        prop_assert_eq!(evaluation.values.len(), stat.specs().len());
        for derived in &evaluation.values {
            prop_assert!(derived.breakpoints.lesser().is_none());
            prop_assert!(derived.breakpoints.greater().is_none());
        }
    }
}

#[test]
fn search_direction_matches_spec_direction() {
    let catalog = catalog();
    let tenacity = catalog.get("Tenacity").unwrap();
    let mit = tenacity.specs().iter().find(|s| s.name == "mit").unwrap();
    let constants = catalog.constants();

    let found = breakpoint_core::engine::search_direction(
        tenacity,
        mit,
        Decimal::from(380),
        Decimal::ONE,
        constants.level_mod,
        &constants.search,
        SearchDirection::Lesser,
    )
    .unwrap();
    assert!(found.value > Decimal::from(380));
}
