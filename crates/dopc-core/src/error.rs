//! # Error Types
//!
//! Domain-specific error types for dopc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dopc-core errors (this file)                                           │
//! │  ├── CoreError        - Pricing failures (range, overflow)              │
//! │  └── ValidationError  - Per-field input validation failures             │
//! │                                                                         │
//! │  dopc-venue errors (separate crate)                                     │
//! │  ├── VenueError       - Venue data unavailable (fetch/config/payload)   │
//! │  └── QuoteFlowError   - What the user sees                              │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                               │
//! │        VenueError ──────┼──► QuoteFlowError ──► CLI / front end         │
//! │        CoreError ───────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages carry the field label or the distance they refer to, so the
//! front end can show them without further formatting.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors raised by the core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No distance range of the venue covers the delivery distance.
    ///
    /// ## When This Occurs
    /// - Distance is beyond the last bounded range
    /// - The pricing table is empty
    /// - The pricing table has a gap around the computed distance
    ///
    /// ## User Workflow
    /// ```text
    /// Venue ranges: [0..=500] [500..=1000] [1000..=0 (closed)]
    ///      │
    ///      ▼
    /// Computed distance: 1250 m
    ///      │
    ///      ▼
    /// DeliveryRangeExceeded { distance_meters: 1250.0 }
    ///      │
    ///      ▼
    /// Quote rejected, never approximated
    /// ```
    #[error("Distance exceeds maximum delivery range ({distance_meters:.0} m)")]
    DeliveryRangeExceeded { distance_meters: f64 },

    /// A price component does not fit in whole cents.
    ///
    /// Only reachable with venue pricing far outside anything a real venue
    /// serves (e.g. `b` near `i64::MAX`). The quote is refused rather than
    /// clamped or wrapped.
    #[error("Price is too large to calculate ({distance_meters:.0} m)")]
    PriceOverflow { distance_meters: f64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Why one form field was rejected.
///
/// Collected per field into [`crate::validation::FieldErrors`]; a form with
/// any of these never reaches the pricing functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is not a plain decimal number.
    #[error("{field} must be a valid number")]
    InvalidNumber { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Too many digits after the decimal point.
    #[error("{field} can have at most {max} decimal places")]
    TooManyDecimals { field: String, max: usize },

    /// Invalid format (e.g., trailing decimal point).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidNumber { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::TooManyDecimals { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a pricing operation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DeliveryRangeExceeded {
            distance_meters: 2150.4,
        };
        assert_eq!(
            err.to_string(),
            "Distance exceeds maximum delivery range (2150 m)"
        );

        let err = CoreError::PriceOverflow { distance_meters: 1000.0 };
        assert_eq!(err.to_string(), "Price is too large to calculate (1000 m)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Venue slug".to_string(),
        };
        assert_eq!(err.to_string(), "Venue slug is required");

        let err = ValidationError::OutOfRange {
            field: "Latitude".to_string(),
            min: -90,
            max: 90,
        };
        assert_eq!(err.to_string(), "Latitude must be between -90 and 90");

        let err = ValidationError::TooManyDecimals {
            field: "Cart value".to_string(),
            max: 2,
        };
        assert_eq!(err.to_string(), "Cart value can have at most 2 decimal places");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::MustBePositive {
            field: "Cart value".to_string(),
        };
        assert_eq!(err.field(), "Cart value");
    }
}
