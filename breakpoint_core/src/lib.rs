//! breakpoint_core - Derived-value and breakpoint engine for character substats
//!
//! This library provides:
//! - Formula: declarative derived-value computations over exact decimals
//! - Statistic: a substat and its ordered, validated derived values
//! - StatEngine: current value, evaluation and breakpoint search
//! - StatCatalog: the substat table, loaded from TOML
//! - report: display records for the presentation layer

pub mod catalog;
pub mod config;
pub mod engine;
pub mod formula;
pub mod prelude;
pub mod report;
pub mod stat;
pub mod types;

// Re-export core types for convenience
pub use catalog::{default_catalog, CatalogConfig, StatCatalog, StatConfig};
pub use config::{ConfigError, EngineConstants, SearchConstants};
pub use engine::{Breakpoint, BreakpointOutcome, DerivedValue, Evaluation, StatEngine};
pub use formula::{extra_value, Formula, FormulaInput, Intermediates};
pub use report::{format_report, BreakpointRecord, DerivedRecord};
pub use stat::{DerivedValueSpec, StatError, Statistic};
pub use types::{BreakpointKind, SearchDirection};

pub use rust_decimal::Decimal;
