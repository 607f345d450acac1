//! Currency rounding and formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{FormatConfig, SymbolPosition};

/// Rounds a monetary amount to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_ledger::money::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("10.005").unwrap()), Decimal::from_str("10.01").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-2.345").unwrap()), Decimal::from_str("-2.35").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with grouping and separators but no currency symbol.
pub fn format_plain(amount: Decimal, config: &FormatConfig) -> String {
    let rounded =
        amount.round_dp_with_strategy(config.decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.*}", config.decimal_places as usize, rounded.abs());

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push_str(&config.thousands_separator);
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{}{}{}{}", sign, grouped, config.decimal_separator, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats an amount as currency using the supplied formatting settings.
///
/// # Examples
///
/// ```
/// use payroll_ledger::config::FormatConfig;
/// use payroll_ledger::money::format_currency;
/// use rust_decimal::Decimal;
///
/// let config = FormatConfig::default();
/// assert_eq!(format_currency(Decimal::new(123456789, 2), &config), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::new(-500, 0), &config), "-$500.00");
/// ```
pub fn format_currency(amount: Decimal, config: &FormatConfig) -> String {
    let plain = format_plain(amount, config);
    let (sign, magnitude) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };

    match config.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, config.currency_symbol, magnitude),
        SymbolPosition::Suffix => format!("{}{} {}", sign, magnitude, config.currency_symbol),
    }
}
