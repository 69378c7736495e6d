use num_format::{Locale, ToFormattedString};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const CURRENCY_PREFIX: &str = "AED ";

/// Digits with optional grouping commas and an optional decimal fraction.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("numeric run pattern is valid"));

/// Formats a fee value for display.
///
/// Strings were formatted upstream (`"AED 1,200"`, `"On request"`) and pass
/// through untouched. Numbers go through `format_amount`. Anything else is
/// coerced to text.
pub fn format_currency(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(amount) => format_amount(amount),
            None => format!("{CURRENCY_PREFIX}{number}"),
        },
        other => value_text(other),
    }
}

/// `AED` followed by the amount with en-US grouping and two decimals.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_PREFIX}{amount}");
    }
    let cents = (amount.abs() * 100.0).round();
    let sign = if amount < 0.0 && cents != 0.0 { "-" } else { "" };
    if cents < u128::MAX as f64 {
        let cents = cents as u128;
        return format!(
            "{CURRENCY_PREFIX}{sign}{}.{:02}",
            (cents / 100).to_formatted_string(&Locale::en),
            cents % 100
        );
    }
    // Past u128 an f64 has no fractional digits left.
    format!(
        "{CURRENCY_PREFIX}{sign}{}.00",
        group_digits(&format!("{:.0}", amount.abs()))
    )
}

/// Inserts the en-US group separator every three digits from the right.
fn group_digits(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Turns a snake_case key into a title: `min_age` becomes `Min Age`.
pub fn format_field_label(key: &str) -> String {
    key.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extracts the first number embedded in a formatted string.
///
/// `"AED 1,200.50"` gives `Some(1200.5)`. `None` means the text holds no
/// number at all and must not be read as zero.
pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let run = NUMERIC_RUN.find(text)?;
    run.as_str().replace(',', "").parse().ok()
}

/// Generic string coercion used wherever a value has no dedicated format.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        compound => compound.to_string(),
    }
}

/// Numeric reading of a fee amount: numbers as-is, strings through
/// `parse_numeric_value`.
pub(crate) fn value_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric_value(text),
        _ => None,
    }
}
