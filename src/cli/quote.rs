//! Handler for the `quote` command.

use tabled::{Table, Tabled};

use stayrate::availability::AvailabilityService;
use stayrate::config::CalendarConfig;
use stayrate::domain::{PropertyId, StayQuote, StayRequest};
use stayrate::error::Result;

use crate::cli::{output, QuoteArgs};

#[derive(Tabled)]
struct NightRow {
    #[tabled(rename = "Night")]
    date: String,
    #[tabled(rename = "Rate")]
    price: String,
    #[tabled(rename = "Source")]
    source: &'static str,
}

/// Price the stay described by `args`.
pub async fn run(service: &AvailabilityService, calendar: &CalendarConfig, args: &QuoteArgs) -> Result<()> {
    let request = StayRequest {
        check_in: args.check_in,
        check_out: args.check_out,
        check_in_slot: args.check_in_slot,
        check_out_slot: args.check_out_slot,
    };

    if request.billable_range().is_none() && !args.json {
        output::warn("Check-in and check-out must both be set, with check-in first.");
    }

    let property = PropertyId::new(args.property.as_str());
    let quote = service.quote(&property, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    print_quote(&property, &quote, &calendar.currency_symbol);
    Ok(())
}

fn print_quote(property: &PropertyId, quote: &StayQuote, currency: &str) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Quote for property {property}"));

    if !quote.nights.is_empty() {
        let rows: Vec<NightRow> = quote
            .nights
            .iter()
            .map(|n| NightRow {
                date: n.date.to_string(),
                price: output::money(currency, n.price),
                source: if n.seasonal { "seasonal" } else { "base" },
            })
            .collect();
        output::table(&Table::new(rows).to_string());
        println!();
    }

    output::key_value("Nights", quote.night_count());
    output::key_value("Subtotal", output::money(currency, quote.subtotal));
    if !quote.check_in_discount.is_zero() {
        output::key_value("Late arrival", output::discount(currency, quote.check_in_discount));
    }
    if !quote.check_out_discount.is_zero() {
        output::key_value("Early departure", output::discount(currency, quote.check_out_discount));
    }
    output::key_value("Total", output::highlight(output::money(currency, quote.total)));

    if !quote.satisfies_stay_limits() {
        let limit = match quote.max_nights {
            Some(max) => format!("{}-{max} nights", quote.min_nights),
            None => format!("at least {} nights", quote.min_nights),
        };
        output::warn(&format!("This season requires {limit}."));
    }
}
