//! Launcher variant presets
//!
//! The four source demos collapse into one simulation parameterized here:
//! each variant is a set of world parameters, force contributors, and launch
//! tuning. 2D vs. 3D was always a rendering concern; the dynamics are planar.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use crate::consts::*;
use crate::sim::{Force, SimState, WorldParams};

/// Named launcher variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LauncherPreset {
    #[default]
    Classic,
    ZeroG,
    Extreme,
    Vortex,
    BlackHole,
}

impl LauncherPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LauncherPreset::Classic => "classic",
            LauncherPreset::ZeroG => "zero-g",
            LauncherPreset::Extreme => "extreme",
            LauncherPreset::Vortex => "vortex",
            LauncherPreset::BlackHole => "black-hole",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(LauncherPreset::Classic),
            "zero-g" | "zerog" => Some(LauncherPreset::ZeroG),
            "extreme" => Some(LauncherPreset::Extreme),
            "vortex" => Some(LauncherPreset::Vortex),
            "black-hole" | "blackhole" => Some(LauncherPreset::BlackHole),
            _ => None,
        }
    }

    /// World parameters for this variant
    pub fn world_params(&self, bounds: Vec2) -> WorldParams {
        let base = WorldParams {
            bounds,
            ..WorldParams::default()
        };
        match self {
            LauncherPreset::Classic => base,
            LauncherPreset::ZeroG => WorldParams {
                gravity: 0.0,
                restitution: 0.95,
                friction: 0.999,
                ..base
            },
            LauncherPreset::Extreme => WorldParams {
                gravity: DEFAULT_GRAVITY * 2.5,
                restitution: 0.95,
                friction: 0.995,
                ..base
            },
            // The swirl and pull supply all the motion in these two
            LauncherPreset::Vortex | LauncherPreset::BlackHole => WorldParams {
                gravity: 0.0,
                friction: 0.995,
                ..base
            },
        }
    }

    /// Active force contributors for this variant
    pub fn forces(&self, bounds: Vec2) -> Vec<Force> {
        let center = bounds / 2.0;
        match self {
            LauncherPreset::Vortex => vec![Force::Vortex {
                center,
                strength: 2.0,
            }],
            LauncherPreset::BlackHole => vec![Force::BlackHole {
                center,
                strength: 30.0,
            }],
            _ => Vec::new(),
        }
    }

    /// Apply this variant to a running simulation; takes effect next step
    pub fn apply(&self, state: &mut SimState) {
        let bounds = state.params.bounds;
        state.set_params(self.world_params(bounds));
        state.set_forces(self.forces(bounds));
    }
}

/// Launch gesture tuning: scatter ranges for one burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstTuning {
    /// Launch direction (radians, measured up from +x; π/2 is straight up)
    pub aim: f32,
    /// Half-angle of random scatter around `aim` (radians)
    pub spread: f32,
    /// Launch speed range (units per tick)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Sprite size range
    pub size_min: f32,
    pub size_max: f32,
    /// Spin magnitude cap (radians per tick, either direction)
    pub spin_max: f32,
    /// Lifetime for spawned entities
    pub ttl_ticks: u32,
    /// Glyph palette to draw from
    pub glyphs: Vec<char>,
}

impl Default for BurstTuning {
    fn default() -> Self {
        Self {
            aim: FRAC_PI_2,
            spread: 0.5,
            speed_min: 8.0,
            speed_max: 20.0,
            size_min: 24.0,
            size_max: 40.0,
            spin_max: 0.25,
            ttl_ticks: DEFAULT_TTL_TICKS,
            glyphs: vec!['🎉', '🚀', '😀', '✨', '🔥', '💎', '🍕', '⭐'],
        }
    }
}

impl BurstTuning {
    /// Tuning adjusted for a variant's feel
    pub fn for_preset(preset: LauncherPreset) -> Self {
        let mut tuning = Self::default();
        match preset {
            LauncherPreset::Classic => {}
            // No gravity to fight: scatter in every direction, gentler speeds
            LauncherPreset::ZeroG => {
                tuning.spread = PI;
                tuning.speed_min = 3.0;
                tuning.speed_max = 8.0;
            }
            LauncherPreset::Extreme => {
                tuning.speed_min = 15.0;
                tuning.speed_max = 35.0;
                tuning.spin_max = 0.5;
            }
            LauncherPreset::Vortex | LauncherPreset::BlackHole => {
                tuning.spread = PI;
                tuning.speed_min = 4.0;
                tuning.speed_max = 10.0;
                tuning.ttl_ticks = DEFAULT_TTL_TICKS * 2;
            }
        }
        tuning
    }
}
