//! Per-species update functions dispatched from the tick loop.

mod sand;
mod stone;
mod toxic;
mod water;

use crate::api::SandApi;
use crate::cell::Species;

/// Dispatch to the species' update function. The caller has already
/// checked the age stamp.
pub fn update_cell(species: Species, api: &mut SandApi) {
    match species {
        Species::Sand => sand::update_sand(api),
        Species::Stone => stone::update_stone(api),
        Species::Water => water::update_water(api),
        Species::Toxic => toxic::update_toxic(api),
    }
}
