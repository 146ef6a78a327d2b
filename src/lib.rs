//! Emoji Burst - a deterministic 2D particle simulation for emoji launcher toys
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, lifecycle)
//! - `presets`: Named launcher variants expressed as configuration
//!
//! Rendering and input translation are deliberately absent: a presentation
//! layer owns the display and forwards intents (`spawn_burst`, `set_params`,
//! `blast`) between steps.

pub mod presets;
pub mod sim;

pub use presets::{BurstTuning, LauncherPreset};
pub use sim::{Entity, Force, SimState, SpawnRequest, WorldParams, step};

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the demos' frame cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default boundary box (units)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Default world parameters
    ///
    /// Velocities are in units per tick; gravity is applied as
    /// `vel += gravity * dt`, so this is velocity gained per second.
    pub const DEFAULT_GRAVITY: f32 = 21.0;
    pub const DEFAULT_RESTITUTION: f32 = 0.72;
    pub const DEFAULT_FRICTION: f32 = 0.99;

    /// Default entity capacity (oldest evicted beyond this)
    pub const MAX_ENTITIES: usize = 200;

    /// Default sprite size and lifetime
    pub const DEFAULT_SIZE: f32 = 32.0;
    /// 10 seconds at 60 Hz
    pub const DEFAULT_TTL_TICKS: u32 = 600;

    /// Speed below which a floor-resting entity counts as settling
    pub const SETTLE_SPEED: f32 = 0.5;
    /// Spin damping applied on floor/ceiling contact
    pub const CONTACT_SPIN_DAMPING: f32 = 0.85;
    /// Extra spin damping while settled on the floor
    pub const SETTLE_SPIN_DAMPING: f32 = 0.9;
}

/// Mass of a circular sprite of the given size (diameter)
///
/// Area-proportional; the constant only sets the scale and cancels out of
/// the equal-mass collision cases.
#[inline]
pub fn mass_of(size: f32) -> f32 {
    size * size * 0.01
}

/// Perpendicular (counter-clockwise) of a vector
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
