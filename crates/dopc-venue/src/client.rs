//! # Venue API Client
//!
//! Fetches the static and dynamic venue data and combines them into a
//! [`VenueData`].
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fetch_venue("home-assignment-venue-helsinki")                          │
//! │        │                                                                │
//! │        ├──► GET {base}/venues/{slug}/static  ──► Coordinate  ──┐        │
//! │        │                                                       │        │
//! │        └──► GET {base}/venues/{slug}/dynamic ──► VenuePricing ─┤        │
//! │                    (issued concurrently)                       │        │
//! │                                                                ▼        │
//! │              both Ok ──► VenueData      first Err ──► VenueError        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries and no caching: every call hits the API once per endpoint.

use dopc_core::VenueData;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::VenueApiConfig;
use crate::error::{VenueError, VenueResult};
use crate::payload::{decode, DynamicVenueResponse, Endpoint, StaticVenueResponse};

/// Client for the venue API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct VenueClient {
    client: Client,
    base_url: Url,
    request_timeout_secs: u64,
}

impl VenueClient {
    /// Builds a client from validated configuration.
    ///
    /// # Errors
    ///
    /// - [`VenueError::InvalidUrl`] / [`VenueError::InvalidConfig`] when the
    ///   configuration does not validate.
    /// - [`VenueError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: &VenueApiConfig) -> VenueResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(|e| VenueError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
            request_timeout_secs: config.api.request_timeout_secs,
        })
    }

    /// Creates a client with default timeouts against `base_url`
    /// (for testing with wiremock).
    pub fn with_base_url(base_url: &str) -> VenueResult<Self> {
        Self::new(&VenueApiConfig::with_base_url(base_url))
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches location and pricing for one venue.
    ///
    /// Both requests run concurrently. The first failure aborts the other and
    /// is returned; nothing is returned unless both succeed.
    pub async fn fetch_venue(&self, slug: &str) -> VenueResult<VenueData> {
        info!(venue_slug = %slug, "Fetching venue data");

        let (static_response, dynamic_response) = tokio::try_join!(
            self.get_json::<StaticVenueResponse>(slug, Endpoint::Static),
            self.get_json::<DynamicVenueResponse>(slug, Endpoint::Dynamic),
        )?;

        let venue = VenueData {
            location: static_response.into_location()?,
            pricing: dynamic_response.into_pricing()?,
        };

        debug!(
            venue_slug = %slug,
            latitude = venue.location.latitude,
            longitude = venue.location.longitude,
            base_price = venue.pricing.base_price_cents,
            ranges = venue.pricing.distance_ranges.len(),
            "Venue data fetched"
        );

        Ok(venue)
    }

    /// Builds `{base}/venues/{slug}/{endpoint}`, percent-encoding the slug
    /// as a single path segment.
    ///
    /// `.` and `..` are refused: the URL parser would drop them and address
    /// a different resource.
    pub fn endpoint_url(&self, slug: &str, endpoint: Endpoint) -> VenueResult<Url> {
        if slug == "." || slug == ".." {
            return Err(VenueError::NotFound {
                url: format!("{}/venues/{slug}/{}", self.base_url, endpoint.path_segment()),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VenueError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["venues", slug, endpoint.path_segment()]);
        Ok(url)
    }

    async fn get_json<T>(&self, slug: &str, endpoint: Endpoint) -> VenueResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.endpoint_url(slug, endpoint)?;
        debug!(%url, %endpoint, "GET venue endpoint");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(%url, "Venue not found");
            return Err(VenueError::NotFound { url: url.to_string() });
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Unexpected venue API status");
            return Err(VenueError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        decode(endpoint, &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> VenueError {
        if err.is_timeout() {
            VenueError::Timeout(self.request_timeout_secs)
        } else {
            VenueError::Http(err.to_string())
        }
    }
}
