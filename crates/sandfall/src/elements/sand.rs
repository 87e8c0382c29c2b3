//! Sand element: accelerates downward, slides diagonally, and spills
//! sideways when it lands with enough speed. Sinks through water.

use crate::api::SandApi;
use crate::cell::Particle;

/// Velocity gained per generation of free fall.
pub const FALL_ACCELERATION: f32 = 0.05;

/// Lateral spill reach per unit of velocity on landing.
const SPILL_FACTOR: i32 = 4;

pub fn update_sand(api: &mut SandApi) {
    let Some(mut me) = api.get(0, 0) else {
        return;
    };
    api.bump_age(&mut me);
    settle(api, me);
}

/// Shared powder movement, also used by toxic.
pub(super) fn settle(api: &mut SandApi, mut me: Particle) {
    let offset = api.dice().offset();

    if api.is_passable(1, 0) {
        me.velocity += FALL_ACCELERATION;
        let reach = me.velocity as i32;
        let mut biggest = 1;
        for i in 2..=reach {
            if !api.is_passable(i, 0) {
                break;
            }
            biggest = i;
        }
        api.swap_with(biggest, 0, me);
        return;
    }

    // Both diagonals record the first-choice offset, not the one taken.
    if api.is_passable(1, offset) {
        me.direction = offset;
        api.swap_with(1, offset, me);
        return;
    }
    if api.is_passable(1, -offset) {
        me.direction = offset;
        api.swap_with(1, -offset, me);
        return;
    }

    // Blocked below: spill sideways, then lose half the speed.
    let spill = (me.velocity as i32) * SPILL_FACTOR;
    if spill <= 1 {
        api.store(me);
        return;
    }
    if me.direction == 0 {
        me.direction = offset;
    }
    let dir = me.direction;
    let mut biggest = 0;
    for i in 1..spill {
        if !api.is_passable(0, i * dir) {
            break;
        }
        biggest = i;
    }
    me.velocity /= 2.0;
    if biggest > 0 {
        api.swap_with(0, biggest * dir, me);
    } else {
        api.store(me);
    }
}
