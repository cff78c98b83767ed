//! Presentation helpers for engine output.
//!
//! The projection engine returns full-precision reals; rounding to cents and
//! locale formatting happen here, never in the engine.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// currencies a user can display amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "ARS")]
    Ars,
    #[serde(rename = "EUR")]
    Eur,
    /// legacy preference, read back as ars
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ars | Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

/// clock style for history timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

/// format a real as currency with 2 decimals, `.` grouping and `,` decimal mark
pub fn format_currency(value: f64, currency: Currency) -> String {
    let symbol = currency.symbol();
    if value.is_nan() {
        return format!("{} NaN", symbol);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{} ∞", sign, symbol);
    }

    match Money::from_f64(value) {
        Some(amount) => format_money(amount, currency),
        None => format!("{} {}", symbol, value),
    }
}

/// format a stored amount as currency with 2 decimals
pub fn format_money(amount: Money, currency: Currency) -> String {
    let rounded = amount.to_cents().as_decimal();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{}{} {},{}", sign, currency.symbol(), group_thousands(whole), cents)
}

/// whole-number rendering used by the balance widgets, halves rounded away from zero
pub fn format_whole(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => d
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{}", value),
    }
}

/// short date and time in the user's clock style
pub fn format_timestamp(timestamp: DateTime<Utc>, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::H12 => timestamp.format("%-m/%-d/%y, %-I:%M %p").to_string(),
        TimeFormat::H24 => timestamp.format("%d/%m/%Y, %H:%M").to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
