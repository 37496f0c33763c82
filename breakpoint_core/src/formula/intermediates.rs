//! Results of earlier derived values within one evaluation pass

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Named results recorded during one evaluation of a statistic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intermediates {
    values: HashMap<String, Decimal>,
}

impl Intermediates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Decimal) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.values.get(name).copied()
    }

    pub fn value_or_zero(&self, name: &str) -> Decimal {
        self.get(name).unwrap_or(Decimal::ZERO)
    }
}
