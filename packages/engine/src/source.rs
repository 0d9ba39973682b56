//! Holiday sources consulted by the restriction evaluator
//!
//! The evaluator only needs to know whether a date is a holiday. Where that
//! answer comes from is configuration:
//!
//! - [`LocalHolidays`] computes it from the statutory rules (default, no I/O)
//! - [`StaticHolidays`] answers from an explicit list of dates
//! - remote providers implement [`HolidaySource`] outside this crate
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use picoplaca_engine::{HolidaySource, LocalHolidays, StaticHolidays};
//!
//! let local = LocalHolidays::default();
//! let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
//! assert!(local.is_holiday(christmas).unwrap());
//!
//! let strike = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();
//! let fixed = StaticHolidays::new("decree", [strike]);
//! assert!(fixed.is_holiday(strike).unwrap());
//! ```

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::calendar::HolidayCalendar;
use crate::error::Result;
use crate::types::Province;

/// Trait for holiday source implementations.
///
/// Implementations must be reentrant: the evaluator may be shared across
/// threads and queried concurrently.
pub trait HolidaySource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Get the type identifier for this source (e.g., "local", "remote").
    fn source_type(&self) -> &str;

    /// Whether `date` is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> Result<bool>;
}

impl<S: HolidaySource + ?Sized> HolidaySource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn source_type(&self) -> &str {
        (**self).source_type()
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        (**self).is_holiday(date)
    }
}

impl<S: HolidaySource + ?Sized> HolidaySource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn source_type(&self) -> &str {
        (**self).source_type()
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        (**self).is_holiday(date)
    }
}

impl<S: HolidaySource + ?Sized> HolidaySource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn source_type(&self) -> &str {
        (**self).source_type()
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        (**self).is_holiday(date)
    }
}

/// Holidays computed locally from the statutory rules.
///
/// Computes the year's holiday set on every call; nothing is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalHolidays {
    calendar: HolidayCalendar,
}

impl LocalHolidays {
    #[must_use]
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// National holidays plus the regional ones of `province`.
    #[must_use]
    pub fn for_province(province: Province) -> Self {
        Self::new(HolidayCalendar::for_province(province))
    }
}

impl HolidaySource for LocalHolidays {
    fn name(&self) -> &str {
        match self.calendar.province() {
            Some(province) => province.name(),
            None => "Ecuador",
        }
    }

    fn source_type(&self) -> &str {
        "local"
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        self.calendar.is_holiday(date)
    }
}

/// Holiday source backed by an explicit set of dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHolidays {
    name: String,
    dates: BTreeSet<NaiveDate>,
}

impl StaticHolidays {
    /// Create a source from a name and a list of holiday dates.
    pub fn new(name: impl Into<String>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            name: name.into(),
            dates: dates.into_iter().collect(),
        }
    }

    /// A source that knows no holidays at all.
    #[must_use]
    pub fn none() -> Self {
        Self::new("none", [])
    }

    /// Add a holiday date.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidaySource for StaticHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_type(&self) -> &str {
        "static"
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.dates.contains(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_holidays_national() {
        let source = LocalHolidays::default();
        assert_eq!(source.name(), "Ecuador");
        assert_eq!(source.source_type(), "local");
        assert!(source.is_holiday(date(2021, 4, 2)).unwrap());
        assert!(!source.is_holiday(date(2021, 12, 6)).unwrap());
    }

    #[test]
    fn test_local_holidays_province() {
        let source = LocalHolidays::for_province(Province::Pichincha);
        assert_eq!(source.name(), "Pichincha");
        assert!(source.is_holiday(date(2021, 12, 6)).unwrap());
    }

    #[test]
    fn test_static_holidays() {
        let mut source = StaticHolidays::new("decree", [date(2021, 6, 14)]);
        assert!(source.is_holiday(date(2021, 6, 14)).unwrap());
        assert!(!source.is_holiday(date(2021, 6, 15)).unwrap());

        source.insert(date(2021, 6, 15));
        assert_eq!(source.len(), 2);
        assert!(source.is_holiday(date(2021, 6, 15)).unwrap());
    }

    #[test]
    fn test_static_none() {
        let source = StaticHolidays::none();
        assert!(source.is_empty());
        // Not even Christmas
        assert!(!source.is_holiday(date(2021, 12, 25)).unwrap());
    }

    #[test]
    fn test_boxed_and_shared_sources() {
        let boxed: Box<dyn HolidaySource> = Box::new(LocalHolidays::default());
        assert!(boxed.is_holiday(date(2021, 1, 1)).unwrap());
        assert_eq!(boxed.source_type(), "local");

        let shared: Arc<dyn HolidaySource> = Arc::new(StaticHolidays::none());
        assert!(!shared.is_holiday(date(2021, 1, 1)).unwrap());
        assert_eq!((&shared).name(), "none");
    }
}
