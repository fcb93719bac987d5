//! Currency conversion and price formatting.
//!
//! The USD/INR rate is a fixed constant, not fetched live, so displayed
//! conversions go stale as the market moves.

use crate::types::decimal::to_fixed;
use crate::types::DisplayCurrency;

/// Fixed USD to INR exchange rate.
pub const USD_TO_INR_RATE: f64 = 83.5;

/// Large-cap NSE symbols whose quotes are already in rupees.
const DOMESTIC_TICKERS: &[&str] = &[
    "ASIANPAINT",
    "AXISBANK",
    "BAJFINANCE",
    "BHARTIARTL",
    "HCLTECH",
    "HDFCBANK",
    "HINDUNILVR",
    "ICICIBANK",
    "INFY",
    "ITC",
    "KOTAKBANK",
    "LT",
    "MARUTI",
    "NTPC",
    "ONGC",
    "POWERGRID",
    "RELIANCE",
    "SBIN",
    "SUNPHARMA",
    "TATAMOTORS",
    "TATASTEEL",
    "TCS",
    "TITAN",
    "ULTRACEMCO",
    "WIPRO",
];

/// Exchange suffixes used for Indian listings (e.g. `RELIANCE.NS`).
const DOMESTIC_SUFFIXES: &[&str] = &[".NS", ".BO"];

/// Convert an amount at the given rate.
pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

pub fn convert_usd_to_inr(usd_amount: f64) -> f64 {
    convert(usd_amount, USD_TO_INR_RATE)
}

/// Whether a ticker is quoted in rupees already and must not be converted.
pub fn is_source_currency(ticker: &str) -> bool {
    let upper = ticker.trim().to_uppercase();
    let base = DOMESTIC_SUFFIXES
        .iter()
        .find_map(|suffix| upper.strip_suffix(suffix))
        .unwrap_or(upper.as_str());
    DOMESTIC_TICKERS.contains(&base)
}

/// Price of `ticker` expressed in `currency`.
///
/// Foreign quotes are USD and domestic quotes are INR; the fixed rate bridges
/// the two in whichever direction the display needs.
pub fn display_price(ticker: &str, amount: f64, currency: DisplayCurrency) -> f64 {
    match (currency, is_source_currency(ticker)) {
        (DisplayCurrency::Inr, false) => convert_usd_to_inr(amount),
        (DisplayCurrency::Usd, true) => convert(amount, 1.0 / USD_TO_INR_RATE),
        _ => amount,
    }
}

/// Whether [`display_price`] converts quotes for this ticker.
pub fn needs_conversion(ticker: &str, currency: DisplayCurrency) -> bool {
    match currency {
        DisplayCurrency::Inr => !is_source_currency(ticker),
        DisplayCurrency::Usd => is_source_currency(ticker),
    }
}

/// Format as rupees with Indian digit grouping, e.g. `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    format_grouped(amount, DisplayCurrency::Inr.symbol(), group_indian)
}

/// Format as dollars with thousands grouping, e.g. `$1,234,567.89`.
pub fn format_usd(amount: f64) -> String {
    format_grouped(amount, DisplayCurrency::Usd.symbol(), group_thousands)
}

pub fn format_price(amount: f64, currency: DisplayCurrency) -> String {
    match currency {
        DisplayCurrency::Inr => format_inr(amount),
        DisplayCurrency::Usd => format_usd(amount),
    }
}

/// Compact rupee format for chart axes.
///
/// - `>= 1,00,00,000` (crore): one decimal, `Cr` suffix
/// - `>= 1,00,000` (lakh): one decimal, `L` suffix
/// - `>= 1,000`: one decimal, `K` suffix
/// - otherwise whole rupees
pub fn format_inr_short(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("₹{}Cr", to_fixed(amount / 10_000_000.0, 1))
    } else if amount >= 100_000.0 {
        format!("₹{}L", to_fixed(amount / 100_000.0, 1))
    } else if amount >= 1_000.0 {
        format!("₹{}K", to_fixed(amount / 1_000.0, 1))
    } else {
        format!("₹{}", to_fixed(amount, 0))
    }
}

pub fn exchange_rate_info() -> String {
    format!("Exchange Rate: 1 USD = ₹{}", USD_TO_INR_RATE)
}

fn format_grouped(amount: f64, symbol: &str, group: fn(&str) -> String) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let fixed = to_fixed(amount.abs(), 2);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", symbol, sign, group(whole), fraction)
}

/// Last three digits, then pairs: 1234567 -> 12,34,567.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn group_thousands(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut rest = digits;
    while rest.len() > 3 {
        let (front, triple) = rest.split_at(rest.len() - 3);
        groups.push(triple);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(",")
}
