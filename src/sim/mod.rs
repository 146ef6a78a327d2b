//! Deterministic simulation module
//!
//! All particle dynamics live here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod forces;
pub mod state;
pub mod step;

pub use collision::{Contact, circle_contact, resolve_pair};
pub use forces::Force;
pub use state::{Entity, RngState, SimState, SpawnRequest, WorldParams};
pub use step::step;
