//! Handler for the `events` command.

use serde::Serialize;
use tabled::{Table, Tabled};

use stayrate::availability::{parse_month, AvailabilityService};
use stayrate::domain::style::{ACCENT_PURPLE, DANGER, SLATE, SUCCESS, WARNING};
use stayrate::domain::{resolve_style, CalendarEvent, EventKind, EventStyle, PropertyId};
use stayrate::error::Result;

use crate::cli::output;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Color")]
    color: &'static str,
}

/// Event plus its style tokens, the payload the calendar widget consumes.
#[derive(Serialize)]
struct StyledEvent<'a> {
    #[serde(flatten)]
    event: &'a CalendarEvent,
    #[serde(flatten)]
    style: EventStyle,
}

/// Print the calendar of `property` for `month`.
pub async fn run(service: &AvailabilityService, property: &str, month: &str, json: bool) -> Result<()> {
    let range = parse_month(month)?;
    let property = PropertyId::new(property);
    let mut events = service.month_events(&property, range).await?;
    events.sort_by_key(|e| (e.start, e.kind == EventKind::BasePrice));

    if json {
        let styled: Vec<StyledEvent<'_>> = events
            .iter()
            .map(|event| StyledEvent {
                event,
                style: resolve_style(event),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&styled)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Property {property} · {month}"));

    let base_days = events.iter().filter(|e| e.kind == EventKind::BasePrice).count();
    let rows: Vec<EventRow> = events
        .iter()
        .filter(|e| e.kind != EventKind::BasePrice)
        .map(|e| EventRow {
            start: e.start.to_string(),
            end: e.end.to_string(),
            kind: e.kind.to_string(),
            title: e.title.clone(),
            status: e.status.clone(),
            color: resolve_style(e).background_color,
        })
        .collect();

    if rows.is_empty() {
        output::note("No bookings, blocks or seasonal rates this month.");
    } else {
        output::table(&Table::new(rows).to_string());
    }
    println!();
    output::legend(&[
        ("confirmed", SUCCESS),
        ("pending", WARNING),
        ("blocked", DANGER),
        ("seasonal", ACCENT_PURPLE),
        ("base rate", SLATE),
    ]);
    println!();
    output::key_value("Base-rate days", base_days);

    Ok(())
}
