//! Toxic element: corrodes a random diagonal neighbour, then moves like sand.
//!
//! A corroded neighbour is replaced by a fresh toxic which updates right
//! away, so a single generation can chain conversions. Chains deeper than
//! the grid's cascade cap stop corroding for the rest of the generation.

use crate::api::SandApi;
use crate::elements::sand;

/// Corrosion rolls are out of this many.
const CORROSION_ROLL: u32 = 100;

pub fn update_toxic(api: &mut SandApi) {
    corrode(api);
    let Some(mut me) = api.get(0, 0) else {
        return;
    };
    api.bump_age(&mut me);
    sand::settle(api, me);
}

fn corrode(api: &mut SandApi) {
    let dc = api.dice().offset();
    let dr = api.dice().offset();
    let Some(target) = api.get(dr, dc) else {
        return;
    };
    if target.corrosion_chance <= api.dice().roll(CORROSION_ROLL) {
        return;
    }
    if api.cascade_exhausted() {
        api.stats.cascade_cutoffs += 1;
        log::trace!(
            "corrosion cascade cut off at depth {} ({}, {})",
            api.depth,
            api.row + dr,
            api.col + dc,
        );
        return;
    }
    api.convert(dr, dc);
    update_toxic(&mut api.neighbour(dr, dc));
}
