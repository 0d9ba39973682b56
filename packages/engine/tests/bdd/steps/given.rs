//! Given step definitions
//!
//! Steps that set up the initial state for scenarios.

use cucumber::{gherkin::Step, given};
use picoplaca_engine::Province;

use crate::helpers::table::parse_key_values;
use crate::world::PicoPlacaWorld;

#[given(expr = "a vehicle with plate {string}")]
fn set_plate(world: &mut PicoPlacaWorld, plate: String) {
    world.plate = plate;
}

#[given(expr = "the regional holidays of {string} apply")]
fn set_province(world: &mut PicoPlacaWorld, selector: String) {
    let province: Province = selector
        .parse()
        .unwrap_or_else(|e| panic!("Unknown province '{selector}': {e}"));
    world.province = Some(province);
}

#[given("a query with the following data:")]
fn set_query_data(world: &mut PicoPlacaWorld, step: &Step) {
    if let Some(table) = &step.table {
        let data = parse_key_values(table);
        world.plate = data.get("plate").cloned().unwrap_or_default();
        world.date = data.get("date").cloned().unwrap_or_default();
        world.time = data.get("time").cloned().unwrap_or_default();
    }
}
