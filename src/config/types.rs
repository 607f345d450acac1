//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// Identifying information about the organisation printed on reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// The organisation's trading name.
    pub name: String,
    /// Postal address shown on payslips.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Payroll Ledger".to_string(),
            address: None,
            phone: None,
        }
    }
}

/// Where the currency symbol is placed relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$1,000.00`
    Prefix,
    /// `1.000,00 €`
    Suffix,
}

/// How many monthly salary periods a date range is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStrategy {
    /// Whole calendar months plus one for any remaining partial month.
    #[default]
    CalendarMonth,
    /// Inclusive days divided by thirty, rounded up.
    ThirtyDay,
}

/// Explicit formatting settings handed to every presentation function.
///
/// The balance engine never sees this type; it works on raw decimals only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Currency symbol (e.g. "$").
    pub currency_symbol: String,
    /// ISO 4217 currency code (e.g. "USD").
    pub currency_code: String,
    /// Placement of the currency symbol.
    #[serde(default = "default_symbol_position")]
    pub symbol_position: SymbolPosition,
    /// Separator inserted between groups of three integer digits.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    /// Separator between the integer and fractional part.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Number of fractional digits shown.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// chrono strftime pattern for dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_symbol_position() -> SymbolPosition {
    SymbolPosition::Prefix
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            symbol_position: default_symbol_position(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            decimal_places: default_decimal_places(),
            date_format: default_date_format(),
        }
    }
}

/// Payroll policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PayrollPolicy {
    /// Strategy used to scale fixed salaries over a range.
    #[serde(default)]
    pub period_strategy: PeriodStrategy,
}

/// Structure of `formatting.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingFile {
    /// Presentation settings.
    pub formatting: FormatConfig,
    /// Payroll policy settings.
    #[serde(default)]
    pub payroll: PayrollPolicy,
}

/// The complete ledger configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    organization: OrganizationConfig,
    formatting: FormatConfig,
    payroll: PayrollPolicy,
}

impl LedgerConfig {
    /// Creates a new LedgerConfig from its component parts.
    pub fn new(
        organization: OrganizationConfig,
        formatting: FormatConfig,
        payroll: PayrollPolicy,
    ) -> Self {
        Self {
            organization,
            formatting,
            payroll,
        }
    }

    /// Returns the organisation details.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the formatting settings.
    pub fn formatting(&self) -> &FormatConfig {
        &self.formatting
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        &self.payroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_file_applies_defaults() {
        let yaml = r#"
formatting:
  currency_symbol: "€"
  currency_code: "EUR"
"#;
        let file: FormattingFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.formatting.currency_symbol, "€");
        assert_eq!(file.formatting.decimal_places, 2);
        assert_eq!(file.formatting.symbol_position, SymbolPosition::Prefix);
        assert_eq!(file.payroll.period_strategy, PeriodStrategy::CalendarMonth);
    }

    #[test]
    fn test_period_strategy_deserialization() {
        let strategy: PeriodStrategy = serde_yaml::from_str("thirty_day").unwrap();
        assert_eq!(strategy, PeriodStrategy::ThirtyDay);
    }
}
