//! Core types for the Pico y Placa engine

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{
    parse_date, parse_time, validate_plate, DATE_FORMAT, EXEMPT_PREFIX_LEN,
    EXEMPT_SECOND_LETTERS, TIME_FORMAT,
};
use crate::error::{EngineError, Result};

/// Ecuadorian provinces with regional holidays.
///
/// Identified by their ISO 3166-2:EC code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    /// Pichincha (EC-P), home of the Foundation of Quito holiday.
    #[serde(rename = "EC-P")]
    Pichincha,
}

impl Province {
    /// ISO 3166-2 subdivision code.
    #[must_use]
    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::Pichincha => "EC-P",
        }
    }

    /// Human-readable province name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pichincha => "Pichincha",
        }
    }
}

impl FromStr for Province {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ec-p" | "p" | "pichincha" => Ok(Self::Pichincha),
            _ => Err(EngineError::InvalidProvince(s.to_string())),
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iso_code())
    }
}

/// How a holiday's observed date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Always observed on its calendar date.
    Fixed,
    /// Derived from the date of Easter.
    Movable,
    /// Fixed date subject to the statutory weekday shift.
    Statutory,
    /// One of the adjacent Nov 2 / Nov 3 pair resolved jointly.
    Adjacent,
    /// Only observed in a specific province.
    Regional,
}

/// A public holiday as observed in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Date on which the holiday is observed.
    pub date: NaiveDate,

    /// Display label (Spanish with English translation).
    pub name: String,

    /// Rule family that produced the date.
    pub kind: HolidayKind,

    /// Date the holiday is legally defined on, before any shift.
    pub legal_date: NaiveDate,
}

impl HolidayRecord {
    /// Create a holiday observed on its legal date.
    #[must_use]
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            legal_date: date,
        }
    }

    /// Create a holiday whose observance may differ from its legal date.
    #[must_use]
    pub fn observed(
        date: NaiveDate,
        legal_date: NaiveDate,
        name: impl Into<String>,
        kind: HolidayKind,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            legal_date,
        }
    }

    /// Whether the observed date differs from the legal date.
    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.date != self.legal_date
    }
}

/// Where holiday information comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayMode {
    /// Computed locally from the statutory rules.
    #[default]
    Local,
    /// Queried from a remote holiday provider.
    Remote,
}

impl HolidayMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for HolidayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "offline" => Ok(Self::Local),
            "remote" | "online" => Ok(Self::Remote),
            other => Err(format!("unknown holiday mode '{other}' (expected local or remote)")),
        }
    }
}

/// Why a plate is categorically exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlateExemption {
    /// Second letter marks an exempt plate class.
    ExemptLetter(char),
    /// Two-letter prefix plates are never restricted.
    TwoLetterPrefix,
}

impl fmt::Display for PlateExemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExemptLetter(c) => write!(f, "second letter '{c}' marks an exempt plate class"),
            Self::TwoLetterPrefix => f.write_str("two-letter plates are exempt"),
        }
    }
}

/// A validated license plate (`XX-YYYY` or `XXX-YYYY`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate {
    raw: String,
    prefix_len: usize,
    second_letter: char,
    last_digit: u8,
}

impl Plate {
    /// Parse and validate a plate.
    ///
    /// # Examples
    /// ```
    /// use picoplaca_engine::types::Plate;
    ///
    /// let plate = Plate::parse("PBX-1234").unwrap();
    /// assert_eq!(plate.prefix(), "PBX");
    /// assert_eq!(plate.second_letter(), 'B');
    /// assert_eq!(plate.last_digit(), 4);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        validate_plate(raw)?;

        let invalid = || EngineError::InvalidPlate(raw.to_string());
        let prefix_len = raw.find('-').ok_or_else(invalid)?;
        let second_letter = raw.chars().nth(1).ok_or_else(invalid)?;
        let last_digit = raw
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(invalid)?;

        Ok(Self {
            raw: raw.to_string(),
            prefix_len,
            second_letter,
            last_digit,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Letter part before the dash.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.raw[..self.prefix_len]
    }

    #[must_use]
    pub fn second_letter(&self) -> char {
        self.second_letter
    }

    /// Final digit, which decides the restricted weekday.
    #[must_use]
    pub fn last_digit(&self) -> u8 {
        self.last_digit
    }

    /// Exemption that applies to this plate, if any.
    ///
    /// The exempt-letter rule is checked before the prefix-length rule.
    #[must_use]
    pub fn exemption(&self) -> Option<PlateExemption> {
        if EXEMPT_SECOND_LETTERS.contains(&self.second_letter) {
            Some(PlateExemption::ExemptLetter(self.second_letter))
        } else if self.prefix_len == EXEMPT_PREFIX_LEN {
            Some(PlateExemption::TwoLetterPrefix)
        } else {
            None
        }
    }
}

impl FromStr for Plate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A validated request: may this plate circulate at this date and time?
///
/// All fields are checked when the query is built; an invalid plate, date or
/// time never produces a partially constructed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleQuery {
    plate: Plate,
    date: NaiveDate,
    time: NaiveTime,
}

impl VehicleQuery {
    /// Validate the three raw inputs, in order plate, date, time.
    ///
    /// # Examples
    /// ```
    /// use picoplaca_engine::VehicleQuery;
    ///
    /// let query = VehicleQuery::parse("PBA-1234", "2021-04-06", "08:00").unwrap();
    /// assert_eq!(query.plate().last_digit(), 4);
    ///
    /// let err = VehicleQuery::parse("ab1234", "2021-04-06", "08:00").unwrap_err();
    /// assert_eq!(err.field().map(|f| f.as_str()), Some("plate"));
    /// ```
    pub fn parse(plate: &str, date: &str, time: &str) -> Result<Self> {
        let plate = Plate::parse(plate)?;
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(Self::new(plate, date, time))
    }

    /// Build a query from already validated parts.
    #[must_use]
    pub fn new(plate: Plate, date: NaiveDate, time: NaiveTime) -> Self {
        Self { plate, date, time }
    }

    #[must_use]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Date in its `YYYY-MM-DD` input form.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Time in its `HH:MM` input form.
    #[must_use]
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}
