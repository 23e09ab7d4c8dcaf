//! Plain-text rendering of a quote.

use dopc_core::{Money, QuoteResult};

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 10;

/// Renders the price breakdown, one line per component.
///
/// ```text
/// Cart value                   10.00 EUR
/// Small order surcharge         0.00 EUR
/// Delivery fee                  1.90 EUR
/// Delivery distance              177 m
/// Total price                  11.90 EUR
/// ```
pub fn breakdown(quote: &QuoteResult) -> String {
    [
        money_line("Cart value", quote.cart_value()),
        money_line("Small order surcharge", quote.small_order_surcharge()),
        money_line("Delivery fee", quote.delivery_fee()),
        line("Delivery distance", &quote.rounded_distance_meters().to_string(), "m"),
        money_line("Total price", quote.total_price()),
    ]
    .join("\n")
}

fn money_line(label: &str, amount: Money) -> String {
    line(label, &amount.to_string(), "EUR")
}

fn line(label: &str, value: &str, unit: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$} {unit}")
}
