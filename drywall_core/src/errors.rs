//! # Error Types
//!
//! Structured error types for drywall_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_area(area_sqft: f64) -> EstimateResult<()> {
//!     if area_sqft < 0.0 {
//!         return Err(EstimateError::InvalidInput {
//!             field: "area_sqft".to_string(),
//!             value: area_sqft.to_string(),
//!             reason: "Area cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for drywall_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
///
/// Unrecognized catalog keys (sheet size, mud type, stud spacing, finish
/// level) are *not* errors: the `from_key` constructors on those enums fall
/// back to their documented defaults instead. Errors here are reserved for
/// numeric input that cannot produce a meaningful estimate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (negative dimension, zero coat count, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A ratio was requested over a zero denominator (e.g. cost per square
    /// foot of a zero-area job). Surfaced explicitly rather than returning
    /// Infinity or NaN.
    #[error("Division by zero computing {quantity}")]
    DivisionByZero { quantity: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        EstimateError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
        }
    }
}

/// Validate that a named dimension or area is not negative.
///
/// Zero is allowed: a zero-area room is a valid, degenerate input that
/// yields zero-quantity results everywhere except per-square-foot ratios.
pub(crate) fn check_non_negative(field: &str, value: f64) -> EstimateResult<()> {
    if value < 0.0 {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    if !value.is_finite() {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Value must be finite",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("length_ft", "-12.0", "Value cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::invalid_input("coats", "0", "too few").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            EstimateError::division_by_zero("cost_per_sqft").error_code(),
            "DIVISION_BY_ZERO"
        );
    }

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative("area_sqft", 0.0).is_ok());
        assert!(check_non_negative("area_sqft", 415.0).is_ok());
        assert!(check_non_negative("area_sqft", -1.0).is_err());
        assert!(check_non_negative("area_sqft", f64::NAN).is_err());
        assert!(check_non_negative("area_sqft", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_strings() {
        let err = EstimateError::division_by_zero("cost_per_sqft");
        assert_eq!(err.to_string(), "Division by zero computing cost_per_sqft");
    }
}
