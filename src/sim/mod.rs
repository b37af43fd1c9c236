//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, clamped by the caller
//! - Seeded RNG only
//! - Stable slot order for every entity collection
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod random;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, first_overlap};
pub use input::{Key, KeySet, KeyState, move_intent};
pub use random::RandomRange;
pub use state::{
    GameState, HAZARD_PALETTE, Orb, OrbKind, PICKUP_PALETTE, Player, Star, reset_orb,
};
pub use tick::update;
