//! Presentation style tokens for calendar events.

use serde::Serialize;

use super::{CalendarEvent, EventKind};

pub const DANGER: &str = "#dc2626";
pub const ACCENT_PURPLE: &str = "#7c3aed";
pub const SLATE: &str = "#64748b";
pub const WARNING: &str = "#f59e0b";
pub const SUCCESS: &str = "#16a34a";
const TEXT_LIGHT: &str = "#ffffff";

/// Colors handed to the calendar widget for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
}

impl EventStyle {
    const fn solid(color: &'static str) -> Self {
        Self {
            background_color: color,
            border_color: color,
            text_color: TEXT_LIGHT,
        }
    }
}

/// Style for `event`. Bookings are colored by status; everything else by kind.
#[must_use]
pub fn resolve_style(event: &CalendarEvent) -> EventStyle {
    match event.kind {
        EventKind::Blocked => EventStyle::solid(DANGER),
        EventKind::Pricing => EventStyle::solid(ACCENT_PURPLE),
        EventKind::BasePrice => EventStyle::solid(SLATE),
        EventKind::Booking if event.status.eq_ignore_ascii_case("pending") => {
            EventStyle::solid(WARNING)
        }
        EventKind::Booking => EventStyle::solid(SUCCESS),
    }
}
