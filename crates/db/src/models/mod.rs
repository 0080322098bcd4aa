//! Row models and DTOs for the storage layer.
//!
//! Rows mirror the snake_case schema and keep NUMERIC columns as
//! [`Decimal`]; conversion into the `f64`-based domain entities happens
//! exactly once, through the `into_*` methods here.

pub mod company_settings;
pub mod payment;
pub mod project;
pub mod site;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Convert a stored NUMERIC value to the domain's `f64` representation.
///
/// Unrepresentable values (far outside the schema's precision) collapse
/// to 0.0 rather than poisoning downstream arithmetic.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
