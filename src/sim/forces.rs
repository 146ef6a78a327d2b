//! Optional force contributors
//!
//! The source variants' "mode" flags (vortex, black hole) modeled as a closed
//! set of pure accelerators composed before the gravity/friction step. Zero-g
//! and "extreme" are parameter choices, not forces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::perp;

/// A pure accelerator: position in, acceleration out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Force {
    /// Tangential swirl around a center with a mild inward pull
    Vortex { center: Vec2, strength: f32 },
    /// Attraction toward a center, stronger when closer
    BlackHole { center: Vec2, strength: f32 },
}

impl Force {
    /// Acceleration contributed at `pos`; the step scales it by dt before
    /// adding it to the velocity
    pub fn accel(&self, pos: Vec2) -> Vec2 {
        match *self {
            Force::Vortex { center, strength } => {
                let to_center = center - pos;
                let dist = to_center.length();
                if dist < 1e-3 {
                    return Vec2::ZERO;
                }
                let inward = to_center / dist;
                // Swirl dominates; the inward bias keeps entities orbiting
                // instead of flinging off
                (perp(inward) + inward * 0.15) * strength
            }
            Force::BlackHole { center, strength } => {
                let to_center = center - pos;
                let dist = to_center.length();
                if dist < 1e-3 {
                    return Vec2::ZERO;
                }
                // Inverse distance scaling, clamped so close passes stay stable
                let multiplier = (200.0 / dist.max(50.0)).min(4.0);
                to_center / dist * strength * multiplier
            }
        }
    }
}
