//! # Validation Module
//!
//! Input validation for the quote form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI flags / web form)                             │
//! │  └── Collects raw text, shows per-field messages                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── validate_venue_slug / validate_cart_value                         │
//! │  ├── validate_latitude / validate_longitude                            │
//! │  └── validate_form: runs ALL of them, collects every failure           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing core                                                 │
//! │  └── Only ever sees a ValidatedQuoteRequest                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dopc_core::validation::{validate_form, QuoteForm};
//!
//! let form = QuoteForm {
//!     venue_slug: "home-assignment-venue-helsinki".into(),
//!     cart_value: "10".into(),
//!     latitude: "60.17094".into(),
//!     longitude: "24.93087".into(),
//! };
//!
//! let request = validate_form(&form).unwrap();
//! assert_eq!(request.cart_value.cents(), 1000);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{check_range, Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum fractional digits accepted for a coordinate (about 0.1 m).
pub const MAX_COORDINATE_DECIMALS: usize = 6;

/// Maximum fractional digits accepted for a cart value (cents).
pub const MAX_CART_VALUE_DECIMALS: usize = 2;

// =============================================================================
// Form Types
// =============================================================================

/// Raw, unvalidated user input for one quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteForm {
    pub venue_slug: String,
    /// Cart value in euros, e.g. `"10.50"`.
    pub cart_value: String,
    pub latitude: String,
    pub longitude: String,
}

/// A form that passed validation. Only [`validate_form`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuoteRequest {
    pub venue_slug: String,
    pub cart_value: Money,
    pub user_location: Coordinate,
}

/// The fields of a [`QuoteForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    VenueSlug,
    CartValue,
    Latitude,
    Longitude,
}

impl FormField {
    /// Human-readable label, used as the `field` of validation errors.
    pub const fn label(&self) -> &'static str {
        match self {
            FormField::VenueSlug => "Venue slug",
            FormField::CartValue => "Cart value",
            FormField::Latitude => "Latitude",
            FormField::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validation failure tied to the form field that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: FormField,
    pub error: ValidationError,
}

/// Every field error found in one form.
///
/// Displays as a single aggregate message; use [`FieldErrors::iter`] to show
/// the individual messages next to their fields.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("Please fix the errors before submitting.")]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Iterates over the collected errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the error for one field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field).map(|e| &e.error)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record<T>(&mut self, field: FormField, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.push(FieldError { field, error });
                None
            }
        }
    }
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates every field of the form.
///
/// ## Rules
/// - All fields are checked, even after the first failure
/// - Errors come back in form order: venue slug, cart value, latitude, longitude
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User presses "Calculate"                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_form(form) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── any field bad? → FieldErrors                                 │
/// │       │                    "Please fix the errors before submitting."  │
/// │       │                    + one message per bad field                 │
/// │       │                                                                 │
/// │       └── OK → ValidatedQuoteRequest → fetch venue → assemble quote    │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_form(form: &QuoteForm) -> Result<ValidatedQuoteRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let venue_slug = errors.record(FormField::VenueSlug, validate_venue_slug(&form.venue_slug));
    let cart_value = errors.record(FormField::CartValue, validate_cart_value(&form.cart_value));
    let latitude = errors.record(FormField::Latitude, validate_latitude(&form.latitude));
    let longitude = errors.record(FormField::Longitude, validate_longitude(&form.longitude));

    match (venue_slug, cart_value, latitude, longitude) {
        (Some(venue_slug), Some(cart_value), Some(latitude), Some(longitude)) => Ok(ValidatedQuoteRequest {
            venue_slug,
            cart_value,
            user_location: Coordinate::new(latitude, longitude),
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a venue slug.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not be `.` or `..`, which a URL path resolves away
///
/// ## Returns
/// The trimmed slug.
pub fn validate_venue_slug(slug: &str) -> ValidationResult<String> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: FormField::VenueSlug.label().to_string(),
        });
    }

    if slug == "." || slug == ".." {
        return Err(ValidationError::InvalidFormat {
            field: FormField::VenueSlug.label().to_string(),
            reason: "not a venue name".to_string(),
        });
    }

    Ok(slug.to_string())
}

/// Validates a cart value typed in euros and converts it to cents.
///
/// ## Rules
/// - Required, plain decimal number
/// - Must be greater than zero
/// - At most 2 decimal places
///
/// The conversion is exact: `"10.5"` becomes 1050 cents by reading the digits,
/// never by multiplying a float.
///
/// ## Example
/// ```rust
/// use dopc_core::validation::validate_cart_value;
///
/// assert_eq!(validate_cart_value("10.5").unwrap().cents(), 1050);
/// assert!(validate_cart_value("0").is_err());
/// assert!(validate_cart_value("10.555").is_err());
/// ```
pub fn validate_cart_value(text: &str) -> ValidationResult<Money> {
    let field = FormField::CartValue.label();
    let decimal = parse_decimal(field, text)?;

    if decimal.negative || decimal.is_zero() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if decimal.fraction.len() > MAX_CART_VALUE_DECIMALS {
        return Err(ValidationError::TooManyDecimals {
            field: field.to_string(),
            max: MAX_CART_VALUE_DECIMALS,
        });
    }

    let too_large = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX / 100,
    };

    let major: i64 = decimal.integer.parse().map_err(|_| too_large())?;
    // "5" → 50 cents, "05" → 5 cents
    let minor = format!("{:0<2}", decimal.fraction)
        .parse::<i64>()
        .map_err(|_| too_large())?;

    Money::checked_from_major_minor(major, minor).ok_or_else(too_large)
}

/// Validates a latitude in decimal degrees.
///
/// ## Rules
/// - Required, plain decimal number
/// - Between -90 and 90
/// - At most 6 decimal places
pub fn validate_latitude(text: &str) -> ValidationResult<f64> {
    validate_coordinate(FormField::Latitude.label(), text, LATITUDE_RANGE)
}

/// Validates a longitude in decimal degrees.
///
/// ## Rules
/// - Required, plain decimal number
/// - Between -180 and 180
/// - At most 6 decimal places
pub fn validate_longitude(text: &str) -> ValidationResult<f64> {
    validate_coordinate(FormField::Longitude.label(), text, LONGITUDE_RANGE)
}

fn validate_coordinate(field: &str, text: &str, range: (f64, f64)) -> ValidationResult<f64> {
    let decimal = parse_decimal(field, text)?;
    let value = decimal.value(field)?;

    check_range(field, value, range)?;

    if decimal.fraction.len() > MAX_COORDINATE_DECIMALS {
        return Err(ValidationError::TooManyDecimals {
            field: field.to_string(),
            max: MAX_COORDINATE_DECIMALS,
        });
    }

    Ok(value)
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// A plain decimal number split into its parts: `-12.345` → (`true`, `12`, `345`).
#[derive(Debug)]
struct Decimal<'a> {
    text: &'a str,
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl Decimal<'_> {
    fn is_zero(&self) -> bool {
        self.integer.chars().chain(self.fraction.chars()).all(|c| c == '0')
    }

    fn value(&self, field: &str) -> ValidationResult<f64> {
        self.text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::InvalidNumber {
                field: field.to_string(),
            })
    }
}

/// Accepts `[+-]digits[.digits]`. Exponents, `inf` and `NaN` are rejected.
fn parse_decimal<'a>(field: &str, text: &'a str) -> ValidationResult<Decimal<'a>> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let invalid = || ValidationError::InvalidNumber {
        field: field.to_string(),
    };

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            if fraction.is_empty() {
                return Err(ValidationError::InvalidFormat {
                    field: field.to_string(),
                    reason: "must not end with a decimal point".to_string(),
                });
            }
            (integer, fraction)
        }
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return Err(invalid());
    }

    Ok(Decimal {
        text,
        negative,
        integer,
        fraction,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn helsinki_form() -> QuoteForm {
        QuoteForm {
            venue_slug: "home-assignment-venue-helsinki".to_string(),
            cart_value: "10".to_string(),
            latitude: "60.17094".to_string(),
            longitude: "24.93087".to_string(),
        }
    }

    #[test]
    fn test_validate_venue_slug() {
        assert_eq!(
            validate_venue_slug("  home-assignment-venue-helsinki ").unwrap(),
            "home-assignment-venue-helsinki"
        );
        assert!(validate_venue_slug("").is_err());
        assert!(validate_venue_slug("   ").is_err());

        assert!(matches!(
            validate_venue_slug(" .. "),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_venue_slug(".").is_err());
        assert!(validate_venue_slug("...").is_ok());
    }

    #[test]
    fn test_validate_cart_value_converts_exactly() {
        assert_eq!(validate_cart_value("10").unwrap().cents(), 1000);
        assert_eq!(validate_cart_value("10.5").unwrap().cents(), 1050);
        assert_eq!(validate_cart_value("10.05").unwrap().cents(), 1005);
        assert_eq!(validate_cart_value("0.01").unwrap().cents(), 1);
        // float multiplication would give 1.15 * 100 = 114.99999999999999
        assert_eq!(validate_cart_value("1.15").unwrap().cents(), 115);
        assert_eq!(validate_cart_value(" 20.00 ").unwrap().cents(), 2000);
    }

    #[test]
    fn test_validate_cart_value_rejections() {
        assert!(matches!(
            validate_cart_value(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_cart_value("abc"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_cart_value("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_cart_value("0.00"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_cart_value("-5"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_cart_value("10.555"),
            Err(ValidationError::TooManyDecimals { max: 2, .. })
        ));
        assert!(matches!(
            validate_cart_value("10."),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_cart_value("1e3"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_cart_value("99999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_latitude() {
        assert_eq!(validate_latitude("60.1699").unwrap(), 60.1699);
        assert_eq!(validate_latitude("-90").unwrap(), -90.0);
        assert_eq!(validate_latitude("90.000000").unwrap(), 90.0);

        let err = validate_latitude("91").unwrap_err();
        assert_eq!(err.to_string(), "Latitude must be between -90 and 90");

        let err = validate_latitude("60.1234567").unwrap_err();
        assert_eq!(err.to_string(), "Latitude can have at most 6 decimal places");

        assert!(matches!(
            validate_latitude("north"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_latitude("NaN"),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validate_longitude() {
        assert_eq!(validate_longitude("24.9384").unwrap(), 24.9384);
        assert_eq!(validate_longitude("-180").unwrap(), -180.0);
        assert_eq!(validate_longitude("+179.999999").unwrap(), 179.999999);

        let err = validate_longitude("181").unwrap_err();
        assert_eq!(err.to_string(), "Longitude must be between -180 and 180");
        assert!(validate_longitude("").is_err());
    }

    #[test]
    fn test_validate_form_success() {
        let request = validate_form(&helsinki_form()).unwrap();
        assert_eq!(request.venue_slug, "home-assignment-venue-helsinki");
        assert_eq!(request.cart_value, Money::from_cents(1000));
        assert_eq!(request.user_location, Coordinate::new(60.17094, 24.93087));
    }

    #[test]
    fn test_validate_form_collects_every_error() {
        let form = QuoteForm {
            venue_slug: " ".to_string(),
            cart_value: "".to_string(),
            latitude: "91".to_string(),
            longitude: "24.93087".to_string(),
        };

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.to_string(), "Please fix the errors before submitting.");

        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![FormField::VenueSlug, FormField::CartValue, FormField::Latitude]
        );
        assert!(errors.get(FormField::Longitude).is_none());
        assert!(matches!(
            errors.get(FormField::CartValue),
            Some(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate_form(&QuoteForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
