//! Conversion helpers for Gherkin data tables

use chrono::NaiveDate;
use cucumber::gherkin::Table;
use std::collections::HashMap;

/// Parse a two-column Gherkin table into a map of trimmed strings.
///
/// The table format is:
/// ```text
/// | plate | PBA-1234   |
/// | date  | 2021-04-06 |
/// ```
pub fn parse_key_values(table: &Table) -> HashMap<String, String> {
    table
        .rows
        .iter()
        .filter(|row| row.len() >= 2)
        .map(|row| (row[0].trim().to_string(), row[1].trim().to_string()))
        .collect()
}

/// Parse a table of holidays with a header row.
///
/// The first column holds `YYYY-MM-DD` dates, the second the holiday name.
pub fn parse_holiday_rows(table: &Table) -> Vec<(NaiveDate, String)> {
    table
        .rows
        .iter()
        .skip(1)
        .filter(|row| row.len() >= 2)
        .map(|row| {
            let date = NaiveDate::parse_from_str(row[0].trim(), "%Y-%m-%d")
                .unwrap_or_else(|e| panic!("Invalid date '{}' in table: {e}", row[0]));
            (date, row[1].trim().to_string())
        })
        .collect()
}
