//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use picoplaca_engine::{
    Decision, EngineError, HolidayCalendar, Holidays, LocalHolidays, Province,
    RestrictionEvaluator, VehicleQuery,
};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct PicoPlacaWorld {
    /// Province whose regional holidays apply, if any
    pub province: Option<Province>,
    /// Raw query inputs, in the form an operator would type them
    pub plate: String,
    pub date: String,
    pub time: String,
    /// Last evaluation result (if successful)
    pub decision: Option<Decision>,
    /// Holidays computed in the last step
    pub holidays: Option<Holidays>,
    /// Last error (if evaluation failed)
    pub error: Option<EngineError>,
}

impl Default for PicoPlacaWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PicoPlacaWorld {
    pub fn new() -> Self {
        Self {
            province: None,
            plate: String::new(),
            date: String::new(),
            time: String::new(),
            decision: None,
            holidays: None,
            error: None,
        }
    }

    fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.province)
    }

    /// Build the query from the raw inputs and evaluate it
    pub fn evaluate(&mut self) {
        let evaluator = RestrictionEvaluator::new(LocalHolidays::new(self.calendar()));
        let result = VehicleQuery::parse(&self.plate, &self.date, &self.time)
            .and_then(|query| evaluator.explain(&query));
        match result {
            Ok(decision) => {
                self.decision = Some(decision);
                self.error = None;
            }
            Err(e) => {
                self.decision = None;
                self.error = Some(e);
            }
        }
    }

    /// Compute the holidays of `year` and store them or the error
    pub fn compute_holidays(&mut self, year: i32) {
        match self.calendar().holidays_for(year) {
            Ok(holidays) => {
                self.holidays = Some(holidays);
                self.error = None;
            }
            Err(e) => {
                self.holidays = None;
                self.error = Some(e);
            }
        }
    }

    pub fn decision(&self) -> &Decision {
        match &self.decision {
            Some(decision) => decision,
            None => panic!("Expected a decision, got error: {:?}", self.error_message()),
        }
    }

    pub fn holidays(&self) -> &Holidays {
        match &self.holidays {
            Some(holidays) => holidays,
            None => panic!("Expected holidays, got error: {:?}", self.error_message()),
        }
    }

    /// Get error message if evaluation failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
