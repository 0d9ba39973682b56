//! Configuration constants and validation functions for the engine
//!
//! Centralized rule parameters of the Quito circulation ordinance and the
//! structural patterns every query input has to match:
//! - Plate classes exempt from the restriction
//! - Rush-hour windows during which the restriction applies
//! - The year the statutory holiday-shift rules took effect
//!
//! These values are fixed by ordinance and never change at runtime.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EngineError, Result};

/// Second plate letters that exempt a vehicle from the restriction.
///
/// Covers government, municipal, and diplomatic plate classes.
pub const EXEMPT_SECOND_LETTERS: [char; 6] = ['A', 'U', 'Z', 'E', 'X', 'M'];

/// Length of the letter prefix that exempts a plate regardless of its letters.
pub const EXEMPT_PREFIX_LEN: usize = 2;

/// Morning rush-hour window, inclusive on both ends.
pub const MORNING_WINDOW: (NaiveTime, NaiveTime) = (hm(7, 0), hm(9, 30));

/// Evening rush-hour window, inclusive on both ends.
pub const EVENING_WINDOW: (NaiveTime, NaiveTime) = (hm(16, 0), hm(19, 30));

/// First year in which the statutory weekday shifts apply.
///
/// Reform of the LOSEP, in force since December 2016 (R.O. 906). Holidays
/// of 2015 and earlier are observed on their legal date.
pub const STATUTORY_SHIFT_FIRST_YEAR: i32 = 2016;

/// Date format accepted for query dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted for query times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Plate pattern: two or three uppercase letters, dash, four digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}-[0-9]{4}$").expect("valid regex"));

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Time pattern: HH:MM on a 24 hour clock.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(t) => t,
        None => NaiveTime::MIN,
    }
}

/// Validate plate format.
///
/// # Examples
/// ```
/// use picoplaca_engine::config::validate_plate;
///
/// assert!(validate_plate("PBX-1234").is_ok());
/// assert!(validate_plate("AB-1234").is_ok());
/// assert!(validate_plate("ab1234").is_err());
/// ```
pub fn validate_plate(plate: &str) -> Result<()> {
    if PLATE_PATTERN.is_match(plate) {
        Ok(())
    } else {
        Err(EngineError::InvalidPlate(plate.to_string()))
    }
}

/// Validate date format (YYYY-MM-DD) and that it names a real calendar day.
///
/// # Examples
/// ```
/// use picoplaca_engine::config::validate_date;
///
/// assert!(validate_date("2021-04-02").is_ok());
/// assert!(validate_date("2021-4-2").is_err());
/// assert!(validate_date("2021-02-30").is_err()); // No such day
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    parse_date(date_str).map(|_| ())
}

/// Validate time format (HH:MM, 00:00 through 23:59).
///
/// # Examples
/// ```
/// use picoplaca_engine::config::validate_time;
///
/// assert!(validate_time("08:35").is_ok());
/// assert!(validate_time("24:00").is_err());
/// assert!(validate_time("8:35").is_err());
/// ```
pub fn validate_time(time_str: &str) -> Result<()> {
    parse_time(time_str).map(|_| ())
}

/// Parse a validated `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(EngineError::InvalidDate(date_str.to_string()));
    }
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| EngineError::InvalidDate(date_str.to_string()))
}

/// Parse a validated `HH:MM` time.
pub fn parse_time(time_str: &str) -> Result<NaiveTime> {
    if !TIME_PATTERN.is_match(time_str) {
        return Err(EngineError::InvalidTime(time_str.to_string()));
    }
    NaiveTime::parse_from_str(time_str, TIME_FORMAT)
        .map_err(|_| EngineError::InvalidTime(time_str.to_string()))
}
