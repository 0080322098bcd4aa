//! Domain invariant checks shared by the write paths.
//!
//! Required-field (non-empty string) checks live on the DTOs in the db
//! crate via `validator`; the numeric invariants that need real logic
//! live here.

use crate::error::CoreError;
use crate::model::SiteDimensions;

/// All four plot edges must be non-negative lengths.
pub fn validate_dimensions(dims: &SiteDimensions) -> Result<(), CoreError> {
    let edges = [
        ("north", dims.north),
        ("south", dims.south),
        ("east", dims.east),
        ("west", dims.west),
    ];
    for (name, length) in edges {
        // NaN fails this comparison too.
        if !(length >= 0.0) {
            return Err(CoreError::Validation(format!(
                "Dimension '{name}' must be a non-negative length in feet"
            )));
        }
    }
    Ok(())
}

/// Payment amounts are strictly positive.
pub fn validate_payment_amount(amount: f64) -> Result<(), CoreError> {
    if !(amount > 0.0) {
        return Err(CoreError::Validation(
            "Payment amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(north: f64, south: f64, east: f64, west: f64) -> SiteDimensions {
        SiteDimensions {
            north,
            south,
            east,
            west,
        }
    }

    #[test]
    fn zero_edges_are_allowed() {
        assert!(validate_dimensions(&dims(0.0, 0.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn negative_edge_is_rejected_by_name() {
        let err = validate_dimensions(&dims(30.0, -1.0, 40.0, 40.0)).unwrap_err();
        assert!(err.to_string().contains("south"));
    }

    #[test]
    fn nan_edge_is_rejected() {
        assert!(validate_dimensions(&dims(f64::NAN, 30.0, 40.0, 40.0)).is_err());
    }

    #[test]
    fn payment_amount_must_be_positive() {
        assert!(validate_payment_amount(0.01).is_ok());
        assert!(validate_payment_amount(0.0).is_err());
        assert!(validate_payment_amount(-5.0).is_err());
        assert!(validate_payment_amount(f64::NAN).is_err());
    }
}
