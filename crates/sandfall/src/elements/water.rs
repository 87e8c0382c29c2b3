//! Water element: falls, slides diagonally, and carries sideways momentum.
//!
//! `horizontal` builds up each time water settles diagonally and bleeds
//! off slowly while it is stuck. While it lasts, falling water drifts in
//! its remembered `direction` and resting water slides along the surface,
//! which is what makes puddles spread out instead of forming sand-like
//! piles. Water only moves into strictly empty cells.

use crate::api::SandApi;
use crate::elements::sand::FALL_ACCELERATION;

/// Fall reach per unit of velocity.
const FALL_FACTOR: i32 = 8;

/// Momentum gained on a diagonal settle (and the floor it resets to).
const DIAGONAL_MOMENTUM: f32 = 0.5;

/// Momentum lost per generation spent fully blocked.
const MOMENTUM_DECAY: f32 = 0.03;

pub fn update_water(api: &mut SandApi) {
    let Some(mut me) = api.get(0, 0) else {
        return;
    };
    api.bump_age(&mut me);

    let offset = api.dice().offset();
    let reach = (me.velocity as i32) * FALL_FACTOR;
    let drift = me.horizontal as i32;
    let dir = me.direction;
    let sliding = drift > 0 && dir != 0;

    // Phase 1: Gravity: fall as far as the empty run allows, then drift.
    if api.is_empty(1, 0) {
        me.velocity += FALL_ACCELERATION;
        let mut biggest = 1;
        for i in 2..=reach {
            if !api.is_empty(i, 0) {
                break;
            }
            biggest = i;
        }
        let mut lateral = 0;
        if sliding {
            for i in 1..=drift {
                if !api.is_empty(biggest, i * dir) {
                    break;
                }
                lateral = i;
            }
        }
        api.swap_with(biggest, lateral * dir, me);
        return;
    }

    // Phase 2: Momentum slide along the surface.
    if sliding && api.is_empty(0, dir) {
        let mut lateral = 1;
        for i in 2..=drift {
            if !api.is_empty(0, i * dir) {
                break;
            }
            lateral = i;
        }
        api.swap_with(0, lateral * dir, me);
        return;
    }

    // Phase 3: Diagonal settle picks up momentum.
    for dx in [offset, -offset] {
        if api.is_empty(1, dx) {
            me.direction = offset;
            me.horizontal = (me.horizontal + DIAGONAL_MOMENTUM).max(DIAGONAL_MOMENTUM);
            api.swap_with(1, dx, me);
            return;
        }
    }

    // Phase 4: Fully blocked, nudge sideways and lose energy.
    me.velocity /= 2.0;
    me.horizontal -= MOMENTUM_DECAY;
    for dx in [offset, -offset] {
        if api.is_empty(0, dx) {
            me.direction = offset;
            api.swap_with(0, dx, me);
            return;
        }
    }
    api.store(me);
}
