//! Restriction table of the Quito Pico y Placa ordinance
//!
//! Ordenanza Metropolitana No. 0305: on weekdays, during the morning and
//! evening rush hours, vehicles whose plate ends in one of the day's
//! forbidden digits may not circulate.

use chrono::{NaiveTime, Weekday};

use crate::config::{EVENING_WINDOW, MORNING_WINDOW};

/// An inclusive window of clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether `time` lies in the window, both ends included.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Rush-hour windows during which the restriction applies.
pub const RESTRICTED_WINDOWS: [TimeWindow; 2] = [
    TimeWindow::new(MORNING_WINDOW.0, MORNING_WINDOW.1),
    TimeWindow::new(EVENING_WINDOW.0, EVENING_WINDOW.1),
];

/// Whether `time` falls in a restricted rush-hour window.
#[must_use]
pub fn is_restricted_time(time: NaiveTime) -> bool {
    RESTRICTED_WINDOWS.iter().any(|w| w.contains(time))
}

/// Forbidden final plate digits per weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionTable {
    monday: &'static [u8],
    tuesday: &'static [u8],
    wednesday: &'static [u8],
    thursday: &'static [u8],
    friday: &'static [u8],
    saturday: &'static [u8],
    sunday: &'static [u8],
}

/// The table in force in Quito.
pub const RESTRICTION_TABLE: RestrictionTable = RestrictionTable {
    monday: &[1, 2],
    tuesday: &[3, 4],
    wednesday: &[5, 6],
    thursday: &[7, 8],
    friday: &[9, 0],
    saturday: &[],
    sunday: &[],
};

impl RestrictionTable {
    /// Digits that may not circulate on `weekday`.
    #[must_use]
    pub fn forbidden_digits(&self, weekday: Weekday) -> &'static [u8] {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Whether a plate ending in `digit` is restricted on `weekday`.
    #[must_use]
    pub fn is_forbidden(&self, weekday: Weekday, digit: u8) -> bool {
        self.forbidden_digits(weekday).contains(&digit)
    }
}
