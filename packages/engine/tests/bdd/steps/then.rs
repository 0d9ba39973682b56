//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use chrono::NaiveDate;
use cucumber::{gherkin::Step, then};
use picoplaca_engine::DecisionReason;

use crate::helpers::table::parse_holiday_rows;
use crate::world::PicoPlacaWorld;

fn reason_tag(reason: &DecisionReason) -> &'static str {
    match reason {
        DecisionReason::Holiday => "holiday",
        DecisionReason::ExemptPlate { .. } => "exempt_plate",
        DecisionReason::OutsideRestrictedHours => "outside_restricted_hours",
        DecisionReason::DigitAllowed { .. } => "digit_allowed",
        DecisionReason::Restricted { .. } => "restricted",
    }
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("Invalid date '{value}' in step: {e}"))
}

// =============================================================================
// Restriction steps
// =============================================================================

#[then("the vehicle may circulate")]
fn assert_may_circulate(world: &mut PicoPlacaWorld) {
    let decision = world.decision();
    assert!(
        decision.may_circulate,
        "Expected {} to circulate on {} at {}, got {:?}",
        world.plate, world.date, world.time, decision.reason
    );
}

#[then("the vehicle may not circulate")]
fn assert_may_not_circulate(world: &mut PicoPlacaWorld) {
    let decision = world.decision();
    assert!(
        !decision.may_circulate,
        "Expected {} to be restricted on {} at {}, got {:?}",
        world.plate, world.date, world.time, decision.reason
    );
}

#[then(expr = "the decision reason is {string}")]
fn assert_reason(world: &mut PicoPlacaWorld, expected: String) {
    let reason = &world.decision().reason;
    assert_eq!(reason_tag(reason), expected, "Unexpected reason {reason:?}");
}

#[then(expr = "the query is rejected for the {string} field")]
fn assert_rejected(world: &mut PicoPlacaWorld, field: String) {
    let Some(error) = &world.error else {
        panic!("Expected a validation error, got {:?}", world.decision);
    };
    assert!(error.is_validation(), "Expected validation error, got {error}");
    assert_eq!(error.field().map(|f| f.as_str()), Some(field.as_str()));
}

// =============================================================================
// Holiday steps
// =============================================================================

#[then(expr = "there are {int} holidays")]
fn assert_holiday_count(world: &mut PicoPlacaWorld, expected: usize) {
    assert_eq!(world.holidays().len(), expected);
}

#[then("the holidays are:")]
fn assert_holidays(world: &mut PicoPlacaWorld, step: &Step) {
    let Some(table) = &step.table else {
        panic!("Step requires a table");
    };
    let expected = parse_holiday_rows(table);
    let actual: Vec<(NaiveDate, String)> = world
        .holidays()
        .iter()
        .map(|record| (record.date, record.name.clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[then(expr = "{string} is observed on {string}")]
fn assert_observed_on(world: &mut PicoPlacaWorld, name: String, date: String) {
    let record = world
        .holidays()
        .find(&name)
        .unwrap_or_else(|| panic!("No holiday named '{name}'"));
    assert_eq!(record.date, parse_date(&date), "{name}");
}

#[then(expr = "{string} has legal date {string}")]
fn assert_legal_date(world: &mut PicoPlacaWorld, name: String, date: String) {
    let record = world
        .holidays()
        .find(&name)
        .unwrap_or_else(|| panic!("No holiday named '{name}'"));
    assert_eq!(record.legal_date, parse_date(&date), "{name}");
}
