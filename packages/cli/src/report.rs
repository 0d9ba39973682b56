//! Plain-text rendering of decisions and holiday lists.

use chrono::Datelike;
use picoplaca_engine::{HolidayRecord, VehicleQuery};

/// The sentence reporting whether a vehicle may circulate.
///
/// # Examples
/// ```
/// use picoplaca_cli::report::verdict_sentence;
/// use picoplaca_engine::VehicleQuery;
///
/// let query = VehicleQuery::parse("PBA-1234", "2021-04-06", "08:00").unwrap();
/// assert_eq!(
///     verdict_sentence(&query, false),
///     "The vehicle with plate PBA-1234 may not circulate on 2021-04-06 at 08:00."
/// );
/// ```
pub fn verdict_sentence(query: &VehicleQuery, may_circulate: bool) -> String {
    let verb = if may_circulate {
        "may circulate"
    } else {
        "may not circulate"
    };
    format!(
        "The vehicle with plate {} {verb} on {} at {}.",
        query.plate(),
        query.date_string(),
        query.time_string()
    )
}

/// One line of the holiday listing: date, weekday, name, legal date if shifted.
pub fn holiday_line(record: &HolidayRecord) -> String {
    let mut line = format!(
        "{}  {}  {}",
        record.date.format("%Y-%m-%d"),
        record.date.weekday(),
        record.name
    );
    if record.is_shifted() {
        line.push_str(&format!(" (legal date {})", record.legal_date.format("%Y-%m-%d")));
    }
    line
}
