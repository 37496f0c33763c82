//! Prelude module for convenient imports
//!
//! ```rust
//! use breakpoint_core::prelude::*;
//! ```

// Core types
pub use crate::stat::{DerivedValueSpec, Statistic};
pub use crate::types::{BreakpointKind, SearchDirection};
pub use crate::formula::{Formula, FormulaInput, Intermediates};

// Engine
pub use crate::engine::{Breakpoint, BreakpointOutcome, Evaluation, StatEngine};

// Catalog and config
pub use crate::catalog::{default_catalog, StatCatalog};
pub use crate::config::{ConfigError, EngineConstants};

// Output
pub use crate::report::{format_report, DerivedRecord};

pub use rust_decimal::Decimal;
