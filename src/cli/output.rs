//! Terminal rendering for calendars, quotes and rule listings.
//!
//! Human-readable output goes to stdout, errors to stderr. `--json` modes
//! bypass this module entirely.

use std::fmt::Display;

use owo_colors::OwoColorize;
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 16;
const RULE: &str = "────────────────────────────────────────────────────────";

/// Print the `stayrate <version>` banner line.
pub fn header(version: &str) {
    println!("{} {}", "stayrate".bold(), version.dimmed());
}

/// Print a titled block separator.
pub fn section(title: &str) {
    println!("\n{}\n{}", title.bold(), RULE.dimmed());
}

/// Print an aligned `label value` line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<LABEL_WIDTH$} {value}");
}

pub fn ok(message: &str) {
    println!("{} {message}", "✓".green());
}

pub fn warn(message: &str) {
    println!("{} {message}", "⚠".yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red());
}

pub fn note(message: &str) {
    println!("{}", message.dimmed());
}

/// Print a rendered table, indented two spaces.
pub fn table(rendered: &str) {
    for line in rendered.lines() {
        println!("  {line}");
    }
}

/// An amount with its currency prefix: `$500` for whole amounts, `$212.50`
/// otherwise.
#[must_use]
pub fn money(currency: &str, amount: Decimal) -> String {
    if amount.fract().is_zero() {
        format!("{currency}{}", amount.trunc())
    } else {
        format!("{currency}{amount:.2}")
    }
}

/// A discount line value, e.g. `-$50`.
#[must_use]
pub fn discount(currency: &str, amount: Decimal) -> String {
    format!("-{}", money(currency, amount))
}

/// Emphasize a value such as a stay total.
#[must_use]
pub fn highlight(value: impl Display) -> String {
    value.to_string().cyan().bold().to_string()
}

/// Print one colored swatch per `(label, #rrggbb)` pair on a single line.
pub fn legend(entries: &[(&str, &str)]) {
    let rendered: Vec<String> = entries
        .iter()
        .map(|(label, hex)| match parse_hex(hex) {
            Some((r, g, b)) => format!("{} {label}", "  ".on_truecolor(r, g, b)),
            None => format!("{hex} {label}"),
        })
        .collect();
    println!("  {}", rendered.join("   "));
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
