//! Calm Flight - a calm arcade dodger
//!
//! Core modules:
//! - `sim`: Simulation (kinematics, spawning, collisions, scoring)
//! - `renderer`: Software frame buffer and drawing
//! - `platform`: Windowing host abstraction and the native window
//! - `driver`: Frame loop tying input, simulation and rendering together

pub mod color;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Rgb, mix_color};
pub use driver::{FrameClock, FrameDriver, LoopState};
pub use error::{Error, FrameBufferError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest timestep fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Entity counts (fixed for the whole session)
    pub const HAZARD_COUNT: usize = 28;
    pub const PICKUP_COUNT: usize = 12;
    pub const STAR_COUNT: usize = 64;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    /// Spawn point as a percentage of the client area
    pub const PLAYER_START_X_PERCENT: f32 = 50.0;
    pub const PLAYER_START_Y_PERCENT: f32 = 72.0;
    /// Acceleration applied per unit of input intent (units/s²)
    pub const PLAYER_ACCEL: f32 = 720.0;
    /// First-order drag rate (1/s)
    pub const PLAYER_DAMPING: f32 = 6.0;
    /// Extra gap between the player's edge and the window edge
    pub const WALL_MARGIN: f32 = 8.0;

    /// Difficulty growth per second
    pub const DIFFICULTY_RATE: f32 = 0.08;
    /// Survival points per second (truncated every frame)
    pub const SURVIVAL_SCORE_RATE: f32 = 12.0;
    /// Points per collected pickup
    pub const PICKUP_SCORE: u64 = 55;
    /// Pickup hitbox shrink applied to the player radius
    pub const PICKUP_HITBOX_SCALE: f32 = 0.8;

    /// Orb radius ranges
    pub const HAZARD_RADIUS_MIN: f32 = 14.0;
    pub const HAZARD_RADIUS_MAX: f32 = 26.0;
    pub const PICKUP_RADIUS_MIN: f32 = 10.0;
    pub const PICKUP_RADIUS_MAX: f32 = 18.0;

    /// Orb spawn velocities
    pub const ORB_DRIFT_MAX: f32 = 24.0;
    pub const HAZARD_FALL_MIN: f32 = 120.0;
    pub const HAZARD_FALL_MAX: f32 = 190.0;
    /// Extra hazard fall speed range per unit of difficulty
    pub const HAZARD_FALL_PER_DIFFICULTY: f32 = 30.0;
    pub const PICKUP_FALL_MIN: f32 = 80.0;
    pub const PICKUP_FALL_MAX: f32 = 120.0;
    /// Respawned orbs start this far above the field
    pub const SPAWN_HEIGHT_MIN: f32 = 40.0;
    pub const SPAWN_HEIGHT_MAX: f32 = 200.0;

    /// Sway applied on top of the base fall speed
    pub const HAZARD_SWAY_AMPLITUDE: f32 = 18.0;
    pub const HAZARD_SWAY_FREQUENCY: f32 = 1.5;
    pub const PICKUP_SWAY_AMPLITUDE: f32 = 12.0;
    pub const PICKUP_SWAY_FREQUENCY: f32 = 1.3;
    /// Pickups drift sideways at this fraction of their x velocity
    pub const PICKUP_DRIFT_SCALE: f32 = 0.5;

    /// How far past the field an orb may travel before it is recycled
    pub const HAZARD_EXIT_MARGIN: f32 = 40.0;
    pub const PICKUP_EXIT_MARGIN: f32 = 20.0;
    pub const SIDE_EXIT_MARGIN: f32 = 40.0;

    /// Star fall speeds
    pub const STAR_SPEED_MIN: f32 = 30.0;
    pub const STAR_SPEED_MAX: f32 = 90.0;
    /// Wrapped stars re-enter here
    pub const STAR_WRAP_Y: f32 = -4.0;
}
