//! Handler for the `rules` command.

use tabled::{Table, Tabled};

use stayrate::availability::AvailabilityService;
use stayrate::config::CalendarConfig;
use stayrate::domain::PropertyId;
use stayrate::error::Result;

use crate::cli::output;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Rule")]
    id: String,
    #[tabled(rename = "From")]
    start: String,
    #[tabled(rename = "To")]
    end: String,
    #[tabled(rename = "Rate")]
    price: String,
    #[tabled(rename = "Nights")]
    nights: String,
}

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// List the pricing rules of `property` in precedence order.
pub async fn run(service: &AvailabilityService, calendar: &CalendarConfig, property: &str) -> Result<()> {
    let currency = calendar.currency_symbol.as_str();
    let property = PropertyId::new(property);
    let schedule = service.schedule(&property).await?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Pricing rules for property {property}"));
    output::key_value("Base rate", output::money(currency, schedule.base_price()));

    if schedule.rules().is_empty() {
        output::note("No seasonal rules; every night uses the base rate.");
        return Ok(());
    }

    let rows: Vec<RuleRow> = schedule
        .rules()
        .iter()
        .map(|r| RuleRow {
            id: r.id.to_string(),
            start: date_or_dash(r.start_date),
            end: date_or_dash(r.end_date),
            price: output::money(currency, r.price_per_night),
            nights: match r.max_nights {
                Some(max) => format!("{}-{max}", r.min_nights),
                None => format!("{}+", r.min_nights),
            },
        })
        .collect();
    println!();
    output::table(&Table::new(rows).to_string());
    println!();

    let overlaps = schedule.overlaps();
    if overlaps.is_empty() {
        output::ok("No overlapping rules");
    }
    for overlap in overlaps {
        output::warn(&format!(
            "Rule {} shadows rule {} from {} to {}",
            overlap.winner, overlap.shadowed, overlap.first_day, overlap.last_day
        ));
    }

    Ok(())
}
