//! # dopc-venue: Venue Data for the Delivery Order Price Calculator
//!
//! Everything between the user's form and the pure pricing core that needs
//! I/O: configuration, the venue API client and quote orchestration.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          dopc-venue                                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       QuoteService                              │   │
//! │  │   validate_form ──► VenueClient::fetch_venue ──► assemble       │   │
//! │  └──────────────────────────┬──────────────────────────────────────┘   │
//! │                             │                                           │
//! │        ┌────────────────────┼────────────────────┐                     │
//! │        ▼                    ▼                    ▼                     │
//! │  ┌────────────┐     ┌──────────────┐     ┌──────────────┐              │
//! │  │ config     │     │ client       │     │ payload      │              │
//! │  │ dopc.toml  │     │ reqwest,     │     │ lenient JSON │              │
//! │  │ + DOPC_*   │     │ try_join!    │     │ → VenueData  │              │
//! │  └────────────┘     └──────────────┘     └──────────────┘              │
//! │                                                                         │
//! └────────────────────────────────┬────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//!                     dopc-core (pure pricing)
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use dopc_core::QuoteForm;
//! use dopc_venue::{QuoteService, VenueApiConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VenueApiConfig::load(None)?;
//! let service = QuoteService::from_config(&config)?;
//!
//! let quote = service
//!     .quote(&QuoteForm {
//!         venue_slug: "home-assignment-venue-helsinki".into(),
//!         cart_value: "10".into(),
//!         latitude: "60.17094".into(),
//!         longitude: "24.93087".into(),
//!     })
//!     .await?;
//! println!("total: {}", quote.total_price());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod service;

pub use client::VenueClient;
pub use config::{ApiSettings, VenueApiConfig, DEFAULT_BASE_URL};
pub use error::{QuoteFlowError, VenueError, VenueResult};
pub use payload::Endpoint;
pub use service::QuoteService;
