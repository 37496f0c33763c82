//! Integration test: Load catalog -> Edit stat -> Evaluate -> Format
//!
//! Drives the built-in catalog through the same calls the TUI makes.

use breakpoint_core::{
    default_catalog,
    report::{format_report, DerivedRecord},
    BreakpointOutcome, Decimal, StatCatalog, StatEngine,
};
use rust_decimal_macros::dec;

fn engine(name: &str) -> StatEngine {
    default_catalog()
        .expect("built-in catalog parses")
        .engine(name)
        .unwrap_or_else(|| panic!("missing stat {}", name))
}

fn record<'a>(records: &'a [DerivedRecord], display_name: &str) -> &'a DerivedRecord {
    records
        .iter()
        .find(|r| r.display_name == display_name)
        .unwrap_or_else(|| panic!("missing record {}", display_name))
}

#[test]
fn test_critical_hit_at_base() {
    let engine = engine("Critical Hit");
    let evaluation = engine.evaluate();
    assert_eq!(evaluation.extra, dec!(0));
    assert_eq!(evaluation.get("rate").unwrap().value, dec!(0.05));
    assert_eq!(evaluation.get("bonus").unwrap().value, dec!(0.4));
    assert_eq!(evaluation.get("edmg").unwrap().value, dec!(1.02));

    let records = format_report(&evaluation);
    let rate = record(&records, "Critical Hit Rate");
    assert_eq!(rate.formatted_value, "0.05");
    assert_eq!(rate.percent.as_deref(), Some("5%"));
    assert_eq!(rate.lesser.as_ref().unwrap().delta, "-1");
    assert_eq!(rate.greater.as_ref().unwrap().delta, "+17");

    let edmg = record(&records, "Expected Damage");
    assert!(!edmg.has_breakpoints);
    assert!(edmg.lesser.is_none());
}

#[test]
fn test_direct_hit_at_base() {
    let evaluation = engine("Direct Hit").evaluate();
    assert_eq!(evaluation.get("rate").unwrap().value, dec!(0));
    let bonus = evaluation.get("bonus").unwrap();
    assert_eq!(bonus.value, dec!(0.25));
    assert_eq!(bonus.breakpoints, BreakpointOutcome::NotApplicable);
    assert_eq!(evaluation.get("edmg").unwrap().value, dec!(1));
}

#[test]
fn test_speed_recast_at_base() {
    let evaluation = engine("Skill/Spell Speed").evaluate();
    let gcd = evaluation.get("gcd25").unwrap();
    assert_eq!(gcd.value, dec!(2.50));
    assert!(!gcd.is_percent);

    let records = format_report(&evaluation);
    let gcd = record(&records, "2.50s Recast");
    assert_eq!(gcd.percent, None);
    // Raising speed shortens the recast, so the lesser breakpoint is above
    assert!(gcd.lesser.as_ref().unwrap().delta.starts_with('+'));
    assert!(gcd.greater.as_ref().unwrap().delta.starts_with('-'));
}

#[test]
fn test_piety_at_base() {
    let evaluation = engine("Piety").evaluate();
    let records = format_report(&evaluation);
    let mp = record(&records, "Bonus MP per Tick");
    assert_eq!(mp.value, dec!(0));
    assert_eq!(mp.formatted_value, "0");
    assert!(!mp.is_percent);
    assert_eq!(mp.percent, None);
}

#[test]
fn test_tenacity_mitigation_is_inverted() {
    let mut engine = engine("Tenacity");
    let at_base = engine.evaluate();
    let mit = at_base.get("mit").unwrap();
    assert_eq!(mit.value, dec!(1.0));

    // 100 * 33 / 3300 = 1
    let lesser = mit.breakpoints.lesser().unwrap();
    assert_eq!(lesser.value, dec!(413));
    assert_eq!(mit.breakpoints.greater().unwrap().value, dec!(379));

    engine.set_value(dec!(413));
    assert_eq!(engine.evaluate().get("mit").unwrap().value, dec!(0.999));
}

#[test]
fn test_raising_stat_never_lowers_normal_values() {
    let mut engine = engine("Critical Hit");
    let mut previous = engine.evaluate().get("rate").unwrap().value;
    for _ in 0..200 {
        engine.increment();
        let rate = engine.evaluate().get("rate").unwrap().value;
        assert!(rate >= previous);
        previous = rate;
    }
}

#[test]
fn test_below_base_hides_breakpoints() {
    let mut engine = engine("Critical Hit");
    engine.set_raw_input("not a number");
    assert_eq!(engine.current_value(), Decimal::ZERO);

    let records = format_report(&engine.evaluate());
    assert_eq!(records.len(), 3);
    for r in &records {
        assert!(r.lesser.is_none());
        assert!(r.greater.is_none());
    }
    // Values are still computed: 200 * -380 / 3300 = -23.03 -> -24
    assert_eq!(record(&records, "Critical Hit Rate").formatted_value, "0.026");
}

#[test]
fn test_stats_are_independent() {
    let catalog = default_catalog().unwrap();
    let mut engines = catalog.engines();
    engines[0].set_value(dec!(3000));
    let baseline = StatCatalog::engines(&catalog);
    for (edited, fresh) in engines.iter().zip(&baseline).skip(1) {
        assert_eq!(edited.evaluate(), fresh.evaluate());
    }
}

#[test]
fn test_extreme_values_evaluate_and_format() {
    let catalog = default_catalog().unwrap();
    let huge = dec!(1000000000000000000000000000);
    for mut engine in catalog.engines() {
        for value in [Decimal::MAX, Decimal::MIN, huge] {
            engine.set_value(value);
            engine.increment();
            let records = format_report(&engine.evaluate());
            assert_eq!(records.len(), engine.statistic().specs().len());
        }
    }
}

#[test]
fn test_huge_raw_input_flags_exhausted_search() {
    let mut engine = engine("Critical Hit");
    engine.set_raw_input("1000000000000000000000000000");
    let records = format_report(&engine.evaluate());
    let rate = record(&records, "Critical Hit Rate");
    assert!(rate.lesser.as_ref().unwrap().exhausted);
    assert!(rate.greater.as_ref().unwrap().exhausted);
}
