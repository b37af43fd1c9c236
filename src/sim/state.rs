//! Game state and entity records
//!
//! Entity collections are fixed-capacity arrays. Orbs are never removed;
//! leaving the field or being collected respawns them in place.

use glam::Vec2;

use super::random::RandomRange;
use crate::color::Rgb;
use crate::consts::*;

/// Hazard palette (warm tones)
pub const HAZARD_PALETTE: [Rgb; 4] = [
    Rgb::new(255, 144, 164),
    Rgb::new(255, 195, 113),
    Rgb::new(250, 132, 176),
    Rgb::new(255, 170, 130),
];

/// Pickup palette (cool tones)
pub const PICKUP_PALETTE: [Rgb; 3] = [
    Rgb::new(120, 230, 210),
    Rgb::new(140, 210, 255),
    Rgb::new(170, 255, 200),
];

/// Orb role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbKind {
    /// Ends the session on touch
    #[default]
    Hazard,
    /// Awards score on touch and respawns
    Pickup,
}

impl OrbKind {
    /// Inclusive-exclusive radius range for freshly spawned orbs
    pub fn radius_range(self) -> (f32, f32) {
        match self {
            OrbKind::Hazard => (HAZARD_RADIUS_MIN, HAZARD_RADIUS_MAX),
            OrbKind::Pickup => (PICKUP_RADIUS_MIN, PICKUP_RADIUS_MAX),
        }
    }

    pub fn palette(self) -> &'static [Rgb] {
        match self {
            OrbKind::Hazard => &HAZARD_PALETTE,
            OrbKind::Pickup => &PICKUP_PALETTE,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
        }
    }
}

/// A falling orb, hazard or pickup
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub kind: OrbKind,
}

/// Background star (decoration only)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
}

/// Re-roll an orb's radius, position, velocity and color.
///
/// The orb is placed above the field (`y` in `-[40, 200)`). Hazard fall speed
/// widens with `difficulty`; pickups ignore it.
pub fn reset_orb(
    orb: &mut Orb,
    rng: &mut RandomRange,
    kind: OrbKind,
    width: f32,
    difficulty: f32,
) {
    let (r_min, r_max) = kind.radius_range();
    orb.kind = kind;
    orb.radius = rng.range(r_min, r_max);
    orb.pos.x = rng.range(orb.radius, width - orb.radius);
    orb.pos.y = -rng.range(SPAWN_HEIGHT_MIN, SPAWN_HEIGHT_MAX);
    orb.vel.x = rng.range(-ORB_DRIFT_MAX, ORB_DRIFT_MAX);
    orb.vel.y = match kind {
        OrbKind::Hazard => rng.range(
            HAZARD_FALL_MIN,
            HAZARD_FALL_MAX + difficulty * HAZARD_FALL_PER_DIFFICULTY,
        ),
        OrbKind::Pickup => rng.range(PICKUP_FALL_MIN, PICKUP_FALL_MAX),
    };
    orb.color = rng.pick(kind.palette());
}

/// Player start position for a client area.
///
/// Multiply before dividing so whole-pixel results stay exact.
pub fn spawn_point(width: f32, height: f32) -> Vec2 {
    Vec2::new(
        width * PLAYER_START_X_PERCENT / 100.0,
        height * PLAYER_START_Y_PERCENT / 100.0,
    )
}

/// Complete game state for one process
#[derive(Debug, Clone)]
pub struct GameState {
    /// False until the first reset
    pub initialized: bool,
    pub game_over: bool,
    pub score: u64,
    /// Session time in seconds
    pub elapsed: f32,
    /// Grows linearly with time; widens hazard fall speeds
    pub difficulty: f32,
    pub player: Player,
    pub hazards: [Orb; HAZARD_COUNT],
    pub pickups: [Orb; PICKUP_COUNT],
    pub stars: [Star; STAR_COUNT],
    pub rng: RandomRange,
}

impl GameState {
    /// Create an uninitialized state; the first update resets it.
    pub fn new(seed: u64) -> Self {
        Self {
            initialized: false,
            game_over: false,
            score: 0,
            elapsed: 0.0,
            difficulty: 0.0,
            player: Player::default(),
            hazards: [Orb::default(); HAZARD_COUNT],
            pickups: [Orb {
                kind: OrbKind::Pickup,
                ..Orb::default()
            }; PICKUP_COUNT],
            stars: [Star::default(); STAR_COUNT],
            rng: RandomRange::new(seed),
        }
    }

    /// Start a fresh session sized to the given client area.
    ///
    /// Safe to call at any time, including after game over.
    pub fn reset_game(&mut self, width: usize, height: usize) {
        let (w, h) = (width as f32, height as f32);

        self.game_over = false;
        self.score = 0;
        self.elapsed = 0.0;
        self.difficulty = 0.0;
        self.player = Player {
            pos: spawn_point(w, h),
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
        };

        // Pre-seed orbs across and above the field so it starts populated
        for orb in &mut self.hazards {
            reset_orb(orb, &mut self.rng, OrbKind::Hazard, w, self.difficulty);
            orb.pos.y = self.rng.range(-h, h * 0.25);
        }
        for orb in &mut self.pickups {
            reset_orb(orb, &mut self.rng, OrbKind::Pickup, w, self.difficulty);
            orb.pos.y = self.rng.range(-h, h * 0.4);
        }
        for star in &mut self.stars {
            star.pos = Vec2::new(self.rng.range(0.0, w), self.rng.range(0.0, h));
            star.speed = self.rng.range(STAR_SPEED_MIN, STAR_SPEED_MAX);
        }

        self.initialized = true;
        log::info!("New session started ({}x{})", width, height);
    }
}
