//! # Venue Error Types
//!
//! Error types for venue data access and the quote flow.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Venue Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  MalformedPayload       │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │                         │ │
//! │  │  ConfigLoad/Save│  │  NotFound       │  │                         │ │
//! │  │                 │  │  UnexpectedStatus│ │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every VenueError means "venue data unavailable" to the quote flow.    │
//! │  None of them is retried here.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use dopc_core::{CoreError, FieldErrors};
use thiserror::Error;

use crate::payload::Endpoint;

/// Result type alias for venue operations.
pub type VenueResult<T> = Result<T, VenueError>;

/// Venue data access failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Errors are categorized for different handling strategies
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum VenueError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid venue API configuration: {0}")]
    InvalidConfig(String),

    /// Invalid base URL.
    #[error("Invalid venue API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Network or TLS failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request did not finish in time.
    #[error("Venue API request timed out after {0} seconds")]
    Timeout(u64),

    /// Venue does not exist.
    #[error("Venue not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx status.
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// The response body is not usable venue data.
    #[error("Malformed {endpoint} venue data: {reason}")]
    MalformedPayload { endpoint: Endpoint, reason: String },
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for VenueError {
    fn from(err: std::io::Error) -> Self {
        VenueError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for VenueError {
    fn from(err: toml::de::Error) -> Self {
        VenueError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for VenueError {
    fn from(err: toml::ser::Error) -> Self {
        VenueError::ConfigSaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for VenueError {
    fn from(err: url::ParseError) -> Self {
        VenueError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl VenueError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            VenueError::InvalidConfig(_)
                | VenueError::InvalidUrl(_)
                | VenueError::ConfigLoadFailed(_)
                | VenueError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Quote Flow Error
// =============================================================================

/// Everything that can stop a quote, as seen by the front end.
///
/// ```text
/// InvalidInput          → "Please fix the errors before submitting."
///                         (venue data is never fetched)
/// VenueDataUnavailable  → "Failed to fetch venue data. Please check the venue slug."
/// Pricing               → "Delivery is not available: ..."
///                         or "Delivery price could not be calculated: ..."
/// ```
#[derive(Debug, Error)]
pub enum QuoteFlowError {
    #[error(transparent)]
    InvalidInput(#[from] FieldErrors),

    #[error("Venue data unavailable: {0}")]
    VenueDataUnavailable(#[from] VenueError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] CoreError),
}

impl QuoteFlowError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            QuoteFlowError::InvalidInput(errors) => errors.to_string(),
            QuoteFlowError::VenueDataUnavailable(_) => {
                "Failed to fetch venue data. Please check the venue slug.".to_string()
            }
            QuoteFlowError::Pricing(CoreError::DeliveryRangeExceeded { .. }) => {
                "Delivery is not available: the address is too far from the venue.".to_string()
            }
            QuoteFlowError::Pricing(err @ CoreError::PriceOverflow { .. }) => {
                format!("Delivery price could not be calculated: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dopc_core::{validate_form, QuoteForm};

    #[test]
    fn test_config_errors() {
        assert!(VenueError::InvalidConfig("bad config".into()).is_config_error());
        assert!(VenueError::InvalidUrl("ftp://x".into()).is_config_error());

        assert!(!VenueError::Timeout(10).is_config_error());
        assert!(!VenueError::NotFound { url: "x".into() }.is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = VenueError::MalformedPayload {
            endpoint: Endpoint::Dynamic,
            reason: "missing field `base_price`".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed dynamic venue data: missing field `base_price`"
        );

        let err = VenueError::UnexpectedStatus {
            status: 503,
            url: "http://localhost/venues/x/static".into(),
        };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_user_messages() {
        let errors = validate_form(&QuoteForm::default()).unwrap_err();
        assert_eq!(
            QuoteFlowError::from(errors).user_message(),
            "Please fix the errors before submitting."
        );

        let err = QuoteFlowError::from(VenueError::Timeout(10));
        assert_eq!(
            err.user_message(),
            "Failed to fetch venue data. Please check the venue slug."
        );

        let err = QuoteFlowError::from(CoreError::DeliveryRangeExceeded {
            distance_meters: 2500.0,
        });
        assert!(err.user_message().starts_with("Delivery is not available"));

        let err = QuoteFlowError::from(CoreError::PriceOverflow {
            distance_meters: 177.0,
        });
        assert_eq!(
            err.user_message(),
            "Delivery price could not be calculated: Price is too large to calculate (177 m)"
        );
    }
}
