//! Ecuadorian public holiday calendar
//!
//! Derives every public holiday observed in a year:
//!
//! - Fixed holidays (New Year, Christmas)
//! - Movable holidays derived from Easter (Carnival, Good Friday, Easter)
//! - Statutory holidays moved to a neighbouring weekday (LOSEP reform,
//!   in force from 2016)
//! - The adjacent Day of the Dead / Independence of Cuenca pair, resolved
//!   jointly so the observed days form a contiguous block
//! - Regional holidays for the selected province
//!
//! Reference: <https://www.turismo.gob.ec/wp-content/uploads/2020/03/CALENDARIO-DE-FERIADOS.pdf>
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use picoplaca_engine::{HolidayCalendar, Province};
//!
//! let calendar = HolidayCalendar::for_province(Province::Pichincha);
//! let holidays = calendar.holidays_for(2021).unwrap();
//!
//! let good_friday = NaiveDate::from_ymd_opt(2021, 4, 2).unwrap();
//! assert!(holidays.contains(good_friday));
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::STATUTORY_SHIFT_FIRST_YEAR;
use crate::error::{EngineError, Result};
use crate::types::{HolidayKind, HolidayRecord, Province};

const NEW_YEAR: &str = "Año Nuevo [New Year's Day]";
const CHRISTMAS: &str = "Navidad [Christmas]";
const GOOD_FRIDAY: &str = "Semana Santa (Viernes Santo) [Good Friday]";
const EASTER: &str = "Día de Pascuas [Easter Day]";
const CARNIVAL_MONDAY: &str = "Lunes de carnaval [Carnival Monday]";
const CARNIVAL_TUESDAY: &str = "Martes de carnaval [Carnival Tuesday]";
const DAY_OF_THE_DEAD: &str = "Día de los difuntos [Day of the Dead]";
const CUENCA_INDEPENDENCE: &str = "Independencia de Cuenca [Independence of Cuenca]";

/// Days from Ash Wednesday to Easter Sunday.
const LENT_DAYS: i64 = 46;

/// National holidays on a fixed legal date subject to the statutory shift.
const STATUTORY_HOLIDAYS: [(u32, u32, &str); 4] = [
    (5, 1, "Día Nacional del Trabajo [Labour Day]"),
    (5, 24, "Batalla del Pichincha [Pichincha Battle]"),
    (8, 10, "Primer Grito de la Independencia [First Cry of Independence]"),
    (10, 9, "Independencia de Guayaquil [Guayaquil's Independence]"),
];

/// Date of Easter Sunday in the Gregorian calendar.
///
/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher).
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use picoplaca_engine::calendar::easter_sunday;
///
/// assert_eq!(easter_sunday(2021).unwrap(), NaiveDate::from_ymd_opt(2021, 4, 4).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    ymd(year, month.unsigned_abs(), day.unsigned_abs())
}

/// Observed date of a statutory holiday legally falling on `legal_date`.
///
/// From 2016 on:
/// - Saturday and Tuesday move one day earlier (Friday, Monday)
/// - Sunday moves one day later (Monday)
/// - Wednesday and Thursday move to the Friday of the same week
/// - Monday and Friday stay put
///
/// Earlier years always observe the legal date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use picoplaca_engine::calendar::observed_date;
///
/// let labour_day = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(); // Saturday
/// assert_eq!(observed_date(labour_day), NaiveDate::from_ymd_opt(2021, 4, 30).unwrap());
/// ```
#[must_use]
pub fn observed_date(legal_date: NaiveDate) -> NaiveDate {
    if legal_date.year() < STATUTORY_SHIFT_FIRST_YEAR {
        return legal_date;
    }

    let offset = match legal_date.weekday() {
        Weekday::Sat | Weekday::Tue => -1,
        Weekday::Sun => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Mon | Weekday::Fri => 0,
    };
    legal_date + Duration::days(offset)
}

/// Observed dates of the Day of the Dead (Nov 2) and the Independence of
/// Cuenca (Nov 3), returned in that order.
///
/// Both holidays are moved together, keyed on the weekday of Nov 3, so that
/// they form a contiguous block with a weekend:
///
/// | Nov 3     | Day of the Dead | Independence of Cuenca |
/// |-----------|-----------------|------------------------|
/// | Sunday    | Nov 1           | Nov 4                  |
/// | Wednesday | Nov 2           | Nov 1                  |
/// | Thursday  | Nov 4           | Nov 3                  |
/// | Saturday  | Nov 2           | Nov 1                  |
/// | Monday    | Nov 4           | Nov 3                  |
/// | otherwise | Nov 2           | Nov 3                  |
pub fn adjacent_november_dates(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let dead = ymd(year, 11, 2)?;
    let cuenca = ymd(year, 11, 3)?;

    let shifted = match cuenca.weekday() {
        // Nov 2 is then a Saturday
        Weekday::Sun => (dead - Duration::days(1), cuenca + Duration::days(1)),
        Weekday::Wed | Weekday::Sat => (dead, cuenca - Duration::days(2)),
        Weekday::Thu | Weekday::Mon => (dead + Duration::days(2), cuenca),
        Weekday::Tue | Weekday::Fri => (dead, cuenca),
    };
    Ok(shifted)
}

/// Regional holidays for a province: (month, day, name).
fn regional_holidays(province: Province) -> &'static [(u32, u32, &'static str)] {
    match province {
        Province::Pichincha => &[(12, 6, "Fundación de Quito [Foundation of Quito]")],
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::UnsupportedYear(year))
}

/// The observed holidays of one year, keyed by date.
///
/// Iterates in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holidays {
    year: i32,
    #[serde(rename = "holidays", serialize_with = "serialize_records")]
    records: BTreeMap<NaiveDate, HolidayRecord>,
}

fn serialize_records<S>(
    records: &BTreeMap<NaiveDate, HolidayRecord>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(records.values())
}

impl Holidays {
    fn new(year: i32) -> Self {
        Self {
            year,
            records: BTreeMap::new(),
        }
    }

    /// Insert a record; a later record on the same date replaces the earlier one.
    fn insert(&mut self, record: HolidayRecord) {
        if let Some(previous) = self.records.insert(record.date, record) {
            tracing::debug!(
                date = %previous.date,
                replaced = %previous.name,
                "Holiday replaced by a later rule on the same date"
            );
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether `date` is an observed holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.records.contains_key(&date)
    }

    /// The holiday observed on `date`.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.records.get(&date)
    }

    /// Find a holiday by (part of) its name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&HolidayRecord> {
        self.records.values().find(|r| r.name.contains(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HolidayRecord> {
        self.records.values()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Public holiday calendar for Ecuador, optionally including the regional
/// holidays of one province.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    province: Option<Province>,
}

impl HolidayCalendar {
    /// National holidays only.
    #[must_use]
    pub fn national() -> Self {
        Self { province: None }
    }

    /// National holidays plus those of `province`.
    #[must_use]
    pub fn for_province(province: Province) -> Self {
        Self {
            province: Some(province),
        }
    }

    #[must_use]
    pub fn new(province: Option<Province>) -> Self {
        Self { province }
    }

    #[must_use]
    pub fn province(&self) -> Option<Province> {
        self.province
    }

    /// All holidays observed in `year`.
    pub fn holidays_for(&self, year: i32) -> Result<Holidays> {
        let mut holidays = Holidays::new(year);

        holidays.insert(HolidayRecord::new(ymd(year, 1, 1)?, NEW_YEAR, HolidayKind::Fixed));
        holidays.insert(HolidayRecord::new(ymd(year, 12, 25)?, CHRISTMAS, HolidayKind::Fixed));

        let easter = easter_sunday(year)?;
        holidays.insert(HolidayRecord::new(
            easter - Duration::days(2),
            GOOD_FRIDAY,
            HolidayKind::Movable,
        ));
        holidays.insert(HolidayRecord::new(easter, EASTER, HolidayKind::Movable));
        holidays.insert(HolidayRecord::new(
            easter - Duration::days(LENT_DAYS + 2),
            CARNIVAL_MONDAY,
            HolidayKind::Movable,
        ));
        holidays.insert(HolidayRecord::new(
            easter - Duration::days(LENT_DAYS + 1),
            CARNIVAL_TUESDAY,
            HolidayKind::Movable,
        ));

        for (month, day, name) in STATUTORY_HOLIDAYS {
            let legal = ymd(year, month, day)?;
            holidays.insert(HolidayRecord::observed(
                observed_date(legal),
                legal,
                name,
                HolidayKind::Statutory,
            ));
        }

        let (dead, cuenca) = adjacent_november_dates(year)?;
        holidays.insert(HolidayRecord::observed(
            dead,
            ymd(year, 11, 2)?,
            DAY_OF_THE_DEAD,
            HolidayKind::Adjacent,
        ));
        holidays.insert(HolidayRecord::observed(
            cuenca,
            ymd(year, 11, 3)?,
            CUENCA_INDEPENDENCE,
            HolidayKind::Adjacent,
        ));

        if let Some(province) = self.province {
            for &(month, day, name) in regional_holidays(province) {
                let legal = ymd(year, month, day)?;
                holidays.insert(HolidayRecord::observed(
                    observed_date(legal),
                    legal,
                    name,
                    HolidayKind::Regional,
                ));
            }
        }

        tracing::debug!(
            year,
            province = ?self.province,
            count = holidays.len(),
            "Computed holidays"
        );
        Ok(holidays)
    }

    /// Whether `date` is an observed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.holidays_for(date.year())?.contains(date))
    }
}

/// All holidays observed in `year`, including those of `province` if given.
pub fn holidays_for(year: i32, province: Option<Province>) -> Result<Holidays> {
    HolidayCalendar::new(province).holidays_for(year)
}
