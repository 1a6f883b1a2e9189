//! Per-frame movement resolution
//!
//! Runs once per animation frame. Resolves the held keys into at most one
//! committed world scroll, in two passes:
//!
//! 1. Exclusive pass: a WASD key that is also the most recent press gets
//!    the whole frame. The first match (checked in W, D, S, A order)
//!    probes, commits, and returns; the general pass never runs.
//! 2. General pass: each direction whose WASD key or arrow key is held
//!    (same order, arrows paired in) probes and commits in sequence. One
//!    cancellation flag is shared across the pass, so a blocked direction
//!    also suppresses the directions after it that frame.
//!
//! Both quirks of the pass structure match the shipped game exactly; see
//! DESIGN.md before changing either.

use crate::input::{Key, KeyState};

use super::collision::scroll_blocked;
use super::sprite::Facing;
use super::world::GameWorld;

/// Base scroll step per frame, in world units
pub const BASE_STEP: f32 = 3.0;
/// Base animation rate (ticks per frame advance)
pub const BASE_RATE: u32 = 4;

/// Step size and animation rate after the crouch/sprint modifiers.
///
/// Crouch halves the step and slows the animation; sprint multiplies the
/// step by 2.4 and speeds the animation up. Crouch applies first, and
/// sprint's rate wins when both are held.
pub fn movement_params(crouch: bool, sprint: bool) -> (f32, u32) {
    let mut step = BASE_STEP;
    let mut rate = BASE_RATE;

    if crouch {
        step /= 2.0;
        rate = 10;
    }
    if sprint {
        step *= 2.4;
        rate = 2;
    }

    (step, rate)
}

/// World-scroll delta for one step toward `facing`. The world moves
/// opposite to the player's intent, and the same delta offsets each
/// boundary for the collision probe.
pub fn scroll_delta(facing: Facing, step: f32) -> (f32, f32) {
    match facing {
        Facing::Up => (0.0, step),
        Facing::Down => (0.0, -step),
        Facing::Left => (step, 0.0),
        Facing::Right => (-step, 0.0),
    }
}

/// Resolve one frame of movement against the held keys.
pub fn update(world: &mut GameWorld, keys: &KeyState) {
    let (step, rate) = movement_params(keys.crouch, keys.sprint);
    world.player.sprite.frames.rate = rate;
    world.player.sprite.moving = false;

    // Exclusive pass
    for &(key, facing) in &[
        (Key::W, Facing::Up),
        (Key::D, Facing::Right),
        (Key::S, Facing::Down),
        (Key::A, Facing::Left),
    ] {
        if keys.down(key) && keys.last_key == Some(key) {
            let mut clear = true;
            try_step(world, facing, step, &mut clear);
            return;
        }
    }

    // General pass, shared cancellation flag
    let mut clear = true;
    for &(key, arrow, facing) in &[
        (Key::W, Key::Up, Facing::Up),
        (Key::D, Key::Right, Facing::Right),
        (Key::S, Key::Down, Facing::Down),
        (Key::A, Key::Left, Facing::Left),
    ] {
        if keys.down(key) || keys.down(arrow) {
            try_step(world, facing, step, &mut clear);
        }
    }
}

/// Mark the player moving and facing `facing`, probe the scroll, and
/// commit it unless this probe (or an earlier one sharing the flag)
/// was blocked. A blocked step still leaves the walk animation running.
fn try_step(world: &mut GameWorld, facing: Facing, step: f32, clear: &mut bool) {
    world.player.sprite.moving = true;
    world.player.face(facing);

    let (dx, dy) = scroll_delta(facing, step);
    if scroll_blocked(world.player.sprite.rect(), &world.boundaries, dx, dy) {
        *clear = false;
    }
    if *clear {
        world.scroll(dx, dy);
    }
}
