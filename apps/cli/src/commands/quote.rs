//! # Quote Command
//!
//! Prices one delivery order from command line arguments.
//!
//! ## Output
//! ```text
//! $ dopc quote --venue-slug home-assignment-venue-helsinki \
//!       --cart-value 10 --lat 60.17094 --lon 24.93087
//! Cart value                   10.00 EUR
//! Small order surcharge         0.00 EUR
//! Delivery fee                  1.90 EUR
//! Delivery distance              177 m
//! Total price                  11.90 EUR
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use dopc_core::QuoteForm;
use dopc_venue::{QuoteService, VenueApiConfig};
use tracing::debug;

use crate::error::CliError;
use crate::render;

/// Arguments of `dopc quote`.
///
/// Every value is taken as raw text so that all invalid fields are reported
/// together by form validation rather than one at a time by the parser.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Venue identifier used in the venue API path
    #[arg(long, env = "DOPC_VENUE_SLUG", default_value = "")]
    pub venue_slug: String,

    /// Cart value in euros, e.g. 10.50
    #[arg(long, env = "DOPC_CART_VALUE", default_value = "")]
    pub cart_value: String,

    /// Customer latitude in decimal degrees
    #[arg(long = "lat", env = "DOPC_USER_LAT", default_value = "", allow_hyphen_values = true)]
    pub latitude: String,

    /// Customer longitude in decimal degrees
    #[arg(long = "lon", env = "DOPC_USER_LON", default_value = "", allow_hyphen_values = true)]
    pub longitude: String,

    /// Print the quote (or the error) as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    pub fn to_form(&self) -> QuoteForm {
        QuoteForm {
            venue_slug: self.venue_slug.clone(),
            cart_value: self.cart_value.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
        }
    }
}

pub async fn run(args: QuoteArgs, config_path: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let config = VenueApiConfig::load(config_path).context("failed to load configuration")?;
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let service = QuoteService::from_config(&config).context("failed to build venue client")?;

    match service.quote(&args.to_form()).await {
        Ok(quote) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("{}", render::breakdown(&quote));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let err = CliError::from(err);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                eprintln!("{err}");
            }
            Ok(ExitCode::from(err.code.exit_code()))
        }
    }
}
