//! Pico y Placa Engine
//!
//! A Rust implementation of the Quito "Pico y Placa" circulation rules.
//! This library provides functionality for:
//! - Computing Ecuador's public holidays for a year, including Easter-based
//!   holidays and the statutory weekday shifts
//! - Validating plate, date and time inputs
//! - Deciding whether a vehicle may circulate at a given date and time
//!
//! # Example
//!
//! ```
//! use picoplaca_engine::{holidays_for, RestrictionEvaluator, VehicleQuery};
//!
//! let evaluator = RestrictionEvaluator::local();
//! let query = VehicleQuery::parse("PBX-1234", "2021-04-02", "08:00")?;
//! assert!(evaluator.decide(&query)?); // Good Friday
//!
//! let holidays = holidays_for(2021, None)?;
//! assert_eq!(holidays.len(), 12);
//! # Ok::<(), picoplaca_engine::EngineError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod restriction;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use calendar::{
    adjacent_november_dates, easter_sunday, holidays_for, observed_date, HolidayCalendar,
    Holidays,
};
pub use error::{EngineError, QueryField, Result};
pub use evaluator::{Decision, DecisionReason, RestrictionEvaluator};
pub use restriction::{is_restricted_time, RestrictionTable, TimeWindow, RESTRICTION_TABLE};
pub use source::{HolidaySource, LocalHolidays, StaticHolidays};
pub use types::{
    HolidayKind, HolidayMode, HolidayRecord, Plate, PlateExemption, Province, VehicleQuery,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
