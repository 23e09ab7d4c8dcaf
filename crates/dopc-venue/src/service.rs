//! # Quote Service
//!
//! Runs one quote end to end: validate the form, fetch venue data, price.
//!
//! ```text
//! QuoteForm ──► validate_form ──Err──► InvalidInput (no request is sent)
//!                    │
//!                    Ok
//!                    ▼
//!             fetch_venue(slug) ──Err──► VenueDataUnavailable
//!                    │
//!                    Ok
//!                    ▼
//!          assemble_for_request ──Err──► Pricing
//!                    │
//!                    Ok
//!                    ▼
//!               QuoteResult
//! ```

use dopc_core::{assemble_for_request, validate_form, QuoteForm, QuoteResult};
use tracing::{info, warn};

use crate::client::VenueClient;
use crate::config::VenueApiConfig;
use crate::error::{QuoteFlowError, VenueResult};

/// Orchestrates validation, venue fetch and pricing.
#[derive(Debug, Clone)]
pub struct QuoteService {
    client: VenueClient,
}

impl QuoteService {
    pub fn new(client: VenueClient) -> Self {
        Self { client }
    }

    /// Builds the service and its client from configuration.
    pub fn from_config(config: &VenueApiConfig) -> VenueResult<Self> {
        Ok(Self::new(VenueClient::new(config)?))
    }

    pub fn client(&self) -> &VenueClient {
        &self.client
    }

    /// Prices one order.
    ///
    /// Each call is independent: no state is kept between quotes.
    pub async fn quote(&self, form: &QuoteForm) -> Result<QuoteResult, QuoteFlowError> {
        let request = validate_form(form).map_err(|errors| {
            warn!(errors = errors.len(), "Quote form rejected");
            errors
        })?;

        let venue = self.client.fetch_venue(&request.venue_slug).await.map_err(|e| {
            warn!(venue_slug = %request.venue_slug, error = %e, "Venue data unavailable");
            e
        })?;

        let quote = assemble_for_request(&request, &venue)?;

        info!(
            venue_slug = %request.venue_slug,
            cart_value = quote.cart_value_cents,
            small_order_surcharge = quote.small_order_surcharge_cents,
            delivery_fee = quote.delivery_fee_cents,
            distance_m = quote.rounded_distance_meters(),
            total = quote.total_price_cents,
            "Quote calculated"
        );

        Ok(quote)
    }
}
