//! Restriction evaluator
//!
//! Applies the Pico y Placa decision procedure to a validated
//! [`VehicleQuery`]. The checks run in a fixed order and the first one that
//! matches decides:
//!
//! 1. The date is a holiday: the vehicle may circulate.
//! 2. The plate is exempt: the vehicle may circulate.
//! 3. The time is outside the rush-hour windows: the vehicle may circulate.
//! 4. The final digit is not restricted on that weekday: the vehicle may
//!    circulate.
//! 5. Otherwise the vehicle may not circulate.
//!
//! # Example
//!
//! ```
//! use picoplaca_engine::{RestrictionEvaluator, VehicleQuery};
//!
//! let evaluator = RestrictionEvaluator::local();
//!
//! let query = VehicleQuery::parse("PBA-1234", "2021-04-06", "08:00").unwrap();
//! assert!(!evaluator.decide(&query).unwrap());
//!
//! let query = VehicleQuery::parse("PBA-1234", "2021-04-06", "11:00").unwrap();
//! assert!(evaluator.decide(&query).unwrap());
//! ```

use chrono::Weekday;
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::restriction::{is_restricted_time, RESTRICTION_TABLE};
use crate::source::{HolidaySource, LocalHolidays};
use crate::types::{PlateExemption, VehicleQuery};

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DecisionReason {
    /// The date is a public holiday.
    Holiday,
    /// The plate belongs to an exempt class.
    ExemptPlate { exemption: PlateExemption },
    /// The time lies outside both restricted windows.
    OutsideRestrictedHours,
    /// The final digit is not restricted on this weekday.
    DigitAllowed {
        #[serde(serialize_with = "serialize_weekday")]
        weekday: Weekday,
        digit: u8,
    },
    /// The final digit is restricted on this weekday, inside a window.
    Restricted {
        #[serde(serialize_with = "serialize_weekday")]
        weekday: Weekday,
        digit: u8,
    },
}

impl DecisionReason {
    /// Whether this reason permits circulation.
    #[must_use]
    pub fn permits(&self) -> bool {
        !matches!(self, Self::Restricted { .. })
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holiday => f.write_str("the date is a public holiday"),
            Self::ExemptPlate { exemption } => write!(f, "{exemption}"),
            Self::OutsideRestrictedHours => {
                f.write_str("the time is outside the restricted hours (07:00-09:30, 16:00-19:30)")
            }
            Self::DigitAllowed { weekday, digit } => {
                write!(f, "plates ending in {digit} are not restricted on {weekday}")
            }
            Self::Restricted { weekday, digit } => {
                write!(f, "plates ending in {digit} are restricted on {weekday} during rush hour")
            }
        }
    }
}

fn serialize_weekday<S: serde::Serializer>(
    weekday: &Weekday,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(weekday)
}

/// Outcome of evaluating a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub may_circulate: bool,
    pub reason: DecisionReason,
}

impl Decision {
    fn from_reason(reason: DecisionReason) -> Self {
        Self {
            may_circulate: reason.permits(),
            reason,
        }
    }
}

/// Decides whether a vehicle may circulate.
///
/// Stateless apart from its holiday source; a single evaluator can serve any
/// number of concurrent queries when the source is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct RestrictionEvaluator<S> {
    source: S,
}

impl RestrictionEvaluator<LocalHolidays> {
    /// Evaluator backed by the locally computed national holidays.
    #[must_use]
    pub fn local() -> Self {
        Self::new(LocalHolidays::default())
    }
}

impl Default for RestrictionEvaluator<LocalHolidays> {
    fn default() -> Self {
        Self::local()
    }
}

impl<S: HolidaySource> RestrictionEvaluator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluate `query` and report which rule decided it.
    ///
    /// # Errors
    ///
    /// Only holiday-source failures propagate; there is no fallback to
    /// another source.
    pub fn explain(&self, query: &VehicleQuery) -> Result<Decision> {
        let plate = query.plate();
        let date = query.date();

        if self.source.is_holiday(date)? {
            tracing::debug!(
                plate = %plate,
                date = %date,
                source = self.source.name(),
                "Holiday, restriction does not apply"
            );
            return Ok(Decision::from_reason(DecisionReason::Holiday));
        }

        if let Some(exemption) = plate.exemption() {
            tracing::debug!(plate = %plate, %exemption, "Exempt plate");
            return Ok(Decision::from_reason(DecisionReason::ExemptPlate { exemption }));
        }

        if !is_restricted_time(query.time()) {
            tracing::debug!(plate = %plate, time = %query.time(), "Outside restricted hours");
            return Ok(Decision::from_reason(DecisionReason::OutsideRestrictedHours));
        }

        let weekday = query.weekday();
        let digit = plate.last_digit();
        let reason = if RESTRICTION_TABLE.is_forbidden(weekday, digit) {
            DecisionReason::Restricted { weekday, digit }
        } else {
            DecisionReason::DigitAllowed { weekday, digit }
        };
        tracing::debug!(
            plate = %plate,
            %weekday,
            digit,
            restricted = !reason.permits(),
            "Checked restriction table"
        );
        Ok(Decision::from_reason(reason))
    }

    /// Whether the vehicle in `query` may circulate.
    pub fn decide(&self, query: &VehicleQuery) -> Result<bool> {
        self.explain(query).map(|decision| decision.may_circulate)
    }
}
