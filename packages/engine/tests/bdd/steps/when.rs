//! When step definitions
//!
//! Steps that execute actions (evaluations and holiday computations).

use cucumber::when;

use crate::world::PicoPlacaWorld;

#[when(expr = "it is checked on {string} at {string}")]
fn check_at(world: &mut PicoPlacaWorld, date: String, time: String) {
    world.date = date;
    world.time = time;
    world.evaluate();
}

#[when("the query is evaluated")]
fn evaluate_query(world: &mut PicoPlacaWorld) {
    world.evaluate();
}

#[when(expr = "the holidays of {int} are computed")]
fn compute_holidays(world: &mut PicoPlacaWorld, year: i32) {
    world.compute_holidays(year);
}
