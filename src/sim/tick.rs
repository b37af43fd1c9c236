//! Per-frame simulation step
//!
//! Advances the game by a variable timestep. The caller clamps `dt`
//! (see [`crate::consts::MAX_FRAME_DT`]) so a stall never produces a huge
//! integration step.

use super::collision::{circles_overlap, first_overlap};
use super::input::{KeyState, move_intent};
use super::state::{GameState, OrbKind, reset_orb};
use crate::consts::*;

/// Advance `state` by `dt` seconds inside a `width` x `height` field.
///
/// Order: lazy reset, frozen check, clocks and survival score, player
/// kinematics, hazards, pickups, stars, hazard collision, pickup collection.
pub fn update(state: &mut GameState, keys: &impl KeyState, dt: f32, width: usize, height: usize) {
    if !state.initialized {
        state.reset_game(width, height);
    }

    // Lost sessions stay frozen until an explicit reset
    if state.game_over {
        return;
    }

    let (w, h) = (width as f32, height as f32);

    state.elapsed += dt;
    state.difficulty += dt * DIFFICULTY_RATE;
    // Fractional points are dropped every frame, not carried
    state.score += (dt * SURVIVAL_SCORE_RATE) as u64;

    move_player(state, keys, dt, w, h);
    move_hazards(state, dt, w, h);
    move_pickups(state, dt, w, h);
    move_stars(state, dt, w, h);
    resolve_collisions(state, w);
}

fn move_player(state: &mut GameState, keys: &impl KeyState, dt: f32, w: f32, h: f32) {
    let intent = move_intent(keys);
    let player = &mut state.player;

    player.vel += intent * PLAYER_ACCEL * dt;
    player.vel -= player.vel * PLAYER_DAMPING * dt;
    player.pos += player.vel * dt;

    // Hard wall; velocity is kept so the player sticks rather than bounces
    let margin = player.radius + WALL_MARGIN;
    player.pos.x = clamp_axis(player.pos.x, margin, w - margin);
    player.pos.y = clamp_axis(player.pos.y, margin, h - margin);
}

/// Clamp that tolerates an inverted range (field smaller than the player).
#[inline]
fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

fn move_hazards(state: &mut GameState, dt: f32, w: f32, h: f32) {
    let elapsed = state.elapsed;
    let difficulty = state.difficulty;
    for (i, orb) in state.hazards.iter_mut().enumerate() {
        // Slot index is the sway phase, so neighbours never move in lockstep
        let sway = (elapsed * HAZARD_SWAY_FREQUENCY + i as f32).sin() * HAZARD_SWAY_AMPLITUDE;
        orb.pos.x += orb.vel.x * dt;
        orb.pos.y += (orb.vel.y + sway) * dt;

        if orb.pos.y - orb.radius > h + HAZARD_EXIT_MARGIN
            || orb.pos.x < -SIDE_EXIT_MARGIN
            || orb.pos.x > w + SIDE_EXIT_MARGIN
        {
            reset_orb(orb, &mut state.rng, OrbKind::Hazard, w, difficulty);
        }
    }
}

fn move_pickups(state: &mut GameState, dt: f32, w: f32, h: f32) {
    let elapsed = state.elapsed;
    let difficulty = state.difficulty;
    for (i, orb) in state.pickups.iter_mut().enumerate() {
        let sway = (elapsed * PICKUP_SWAY_FREQUENCY + i as f32).cos() * PICKUP_SWAY_AMPLITUDE;
        orb.pos.x += orb.vel.x * dt * PICKUP_DRIFT_SCALE;
        orb.pos.y += (orb.vel.y + sway) * dt;

        if orb.pos.y - orb.radius > h + PICKUP_EXIT_MARGIN
            || orb.pos.x < -SIDE_EXIT_MARGIN
            || orb.pos.x > w + SIDE_EXIT_MARGIN
        {
            reset_orb(orb, &mut state.rng, OrbKind::Pickup, w, difficulty);
        }
    }
}

fn move_stars(state: &mut GameState, dt: f32, w: f32, h: f32) {
    for star in &mut state.stars {
        star.pos.y += star.speed * dt;
        if star.pos.y > h {
            star.pos.y = STAR_WRAP_Y;
            star.pos.x = state.rng.range(0.0, w);
        }
    }
}

fn resolve_collisions(state: &mut GameState, w: f32) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let hit = first_overlap(
        player_pos,
        player_radius,
        state.hazards.iter().map(|o| (o.pos, o.radius)),
    );
    if hit.is_some() {
        state.game_over = true;
        log::info!(
            "Session lost after {:.1}s with score {}",
            state.elapsed,
            state.score
        );
    }

    // Pickups use a smaller player hitbox and are recycled on collection
    let pickup_reach = player_radius * PICKUP_HITBOX_SCALE;
    let difficulty = state.difficulty;
    for orb in &mut state.pickups {
        if circles_overlap(player_pos, pickup_reach, orb.pos, orb.radius) {
            state.score += PICKUP_SCORE;
            reset_orb(orb, &mut state.rng, OrbKind::Pickup, w, difficulty);
        }
    }
}
