//! Money and date utilities.
//!
//! Rounding and formatting happen here and only here: the balance engine
//! keeps full decimal precision and callers round when they display.

mod dates;
mod format;

pub use dates::{deserialize_record_date, format_date, is_valid_date_format, parse_record_date};
pub use format::{format_currency, format_plain, round_money};
