//! # CLI Error Type
//!
//! Turns a failed quote into what the terminal shows and the exit status.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  QuoteService::quote()                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  QuoteFlowError ─────────► CliError { code, message, fields }           │
//! │                                   │                                     │
//! │                  ┌────────────────┴────────────────┐                    │
//! │                  ▼                                 ▼                    │
//! │        text: message + one line           --json: serialized to         │
//! │        per invalid field (stderr)         stdout                        │
//! │                                                                         │
//! │        exit status from ErrorCode::exit_code()                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use dopc_core::CoreError;
use dopc_venue::QuoteFlowError;
use serde::Serialize;
use std::fmt;

/// Failed quote as reported to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please fix the errors before submitting.",
///   "fields": [
///     { "field": "cart_value", "message": "Cart value must be positive" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,

    /// Per-field messages, empty unless `code` is `ValidationError`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldMessage>,
}

/// One invalid form field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMessage {
    pub field: dopc_core::FormField,
    pub message: String,
}

/// Error codes for failed quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The form did not validate
    ValidationError,

    /// Venue data could not be fetched or parsed
    VenueUnavailable,

    /// The address is outside every delivery range
    DeliveryUnavailable,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::ValidationError => 2,
            ErrorCode::VenueUnavailable => 3,
            ErrorCode::DeliveryUnavailable => 4,
            ErrorCode::Internal => 1,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

impl From<QuoteFlowError> for CliError {
    fn from(err: QuoteFlowError) -> Self {
        let message = err.user_message();
        match err {
            QuoteFlowError::InvalidInput(errors) => CliError {
                code: ErrorCode::ValidationError,
                message,
                fields: errors
                    .iter()
                    .map(|e| FieldMessage {
                        field: e.field,
                        message: e.error.to_string(),
                    })
                    .collect(),
            },
            QuoteFlowError::VenueDataUnavailable(e) => {
                tracing::debug!(error = %e, "Venue data unavailable");
                CliError::new(ErrorCode::VenueUnavailable, message)
            }
            QuoteFlowError::Pricing(CoreError::DeliveryRangeExceeded { .. }) => {
                CliError::new(ErrorCode::DeliveryUnavailable, message)
            }
            QuoteFlowError::Pricing(CoreError::PriceOverflow { .. }) => {
                CliError::new(ErrorCode::Internal, message)
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for field in &self.fields {
            write!(f, "\n  - {}", field.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}
