//! # dopc-core: Pure Pricing Logic for the Delivery Order Price Calculator
//!
//! This crate is the **heart** of dopc. It contains the whole pricing
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        dopc Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`dopc quote ...`)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dopc-venue (QuoteService)                    │   │
//! │  │    validate form ──► fetch static + dynamic ──► assemble        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dopc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌──────────────────┐ │   │
//! │  │   │ distance │ │   fee    │ │ surcharge │ │ quote/validation │ │   │
//! │  │   │haversine │ │  tiers   │ │  minimum  │ │  form → quote    │ │   │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Coordinate, DistanceRange, VenuePricing, QuoteResult)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`distance`] - Haversine great-circle distance in meters
//! - [`fee`] - Tiered delivery fee lookup
//! - [`surcharge`] - Small order surcharge
//! - [`quote`] - Quote assembly
//! - [`validation`] - Form validation with per-field errors
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use dopc_core::fee::delivery_fee;
//! use dopc_core::money::Money;
//! use dopc_core::types::DistanceRange;
//!
//! let ranges = vec![
//!     DistanceRange { min: 0, max: Some(500), a: 0, b: 0 },
//!     DistanceRange { min: 500, max: Some(1000), a: 100, b: 0 },
//! ];
//!
//! let fee = delivery_fee(750.0, Money::from_cents(190), &ranges).unwrap();
//! assert_eq!(fee.cents(), 290);
//!
//! // Beyond the last tier the quote is rejected, not approximated
//! assert!(delivery_fee(1500.0, Money::from_cents(190), &ranges).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod distance;
pub mod error;
pub mod fee;
pub mod money;
pub mod quote;
pub mod surcharge;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dopc_core::Money` instead of
// `use dopc_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use quote::{assemble_for_request, assemble_quote};
pub use types::*;
pub use validation::{validate_form, FieldError, FieldErrors, FormField, QuoteForm, ValidatedQuoteRequest};
