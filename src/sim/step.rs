//! Fixed timestep simulation step
//!
//! Advances every entity by one increment: forces, gravity, friction,
//! position, rotation, then boundary reflection, pairwise collisions, and
//! lifecycle. A closed numeric loop with no I/O; NaN or negative dt is
//! undefined and left to the caller.

use crate::consts::*;
use crate::sim::collision::resolve_pair;
use crate::sim::state::{Entity, SimState, WorldParams};

/// Advance the simulation by one time increment
///
/// `dt == 0` leaves every entity's position, velocity, and rotation
/// unchanged, aside from collision separation if a pair already overlaps.
pub fn step(state: &mut SimState, dt: f32) {
    let params = state.params;
    let moving = dt > 0.0;
    if moving {
        state.time_ticks += 1;
    }

    // Field-level borrows keep the entity loop allocation-free
    let forces = &state.forces;
    for e in &mut state.entities {
        if moving {
            // Composed optional forces first, then gravity, then friction
            for force in forces {
                e.vel += force.accel(e.pos) * dt;
            }
            e.vel.y += params.gravity * dt;
            e.vel *= params.friction;
            // Semi-implicit Euler: position uses the post-gravity velocity.
            // Velocity is in units per tick, so no dt factor here.
            e.pos += e.vel;
            e.rotation += e.rotation_speed;
        }
        reflect_walls(e, &params, moving);
    }

    // Single O(n²) pass over unordered pairs; non-iterative, so dense
    // clusters jitter mildly
    let n = state.entities.len();
    for i in 0..n {
        let (head, tail) = state.entities.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b, params.restitution);
        }
    }

    // Separation can shove a reflected entity back through a wall;
    // re-clamp position only, no velocity change
    for e in &mut state.entities {
        let half = e.half();
        e.pos.x = e.pos.x.max(half).min(params.bounds.x - half);
        e.pos.y = e.pos.y.max(half).min(params.bounds.y - half);
    }

    let now = state.time_ticks;
    state.entities.retain(|e| !e.expired(now));

    // Capacity may have been lowered between steps
    while state.entities.len() > state.capacity {
        state.evict_oldest();
    }
}

/// Reflect an entity off the boundary box, clamping position on contact
///
/// Side walls invert the spin; floor and ceiling dampen it instead (floor
/// contact is treated as settling, not a kick). With `moving` false (a
/// zero-dt step) only the position clamp applies: velocity and spin must
/// stay untouched.
fn reflect_walls(e: &mut Entity, params: &WorldParams, moving: bool) {
    let half = e.half();
    let (w, h) = (params.bounds.x, params.bounds.y);

    if e.pos.x - half < 0.0 {
        e.pos.x = half;
        if moving {
            e.vel.x = -e.vel.x * params.restitution;
            e.rotation_speed = -e.rotation_speed;
        }
    } else if e.pos.x + half > w {
        e.pos.x = w - half;
        if moving {
            e.vel.x = -e.vel.x * params.restitution;
            e.rotation_speed = -e.rotation_speed;
        }
    }

    if e.pos.y - half < 0.0 {
        e.pos.y = half;
        if moving {
            e.vel.y = -e.vel.y * params.restitution;
            e.rotation_speed *= CONTACT_SPIN_DAMPING;
        }
    } else if e.pos.y + half > h {
        e.pos.y = h - half;
        if moving {
            e.vel.y = -e.vel.y * params.restitution;
            e.rotation_speed *= CONTACT_SPIN_DAMPING;
        }
    }

    // Resting on the floor below the settle threshold: damp spin toward zero
    if moving
        && e.pos.y + half >= h - 1e-3
        && e.vel.x.abs() < SETTLE_SPEED
        && e.vel.y.abs() < SETTLE_SPEED
    {
        e.rotation_speed *= SETTLE_SPIN_DAMPING;
    }
}
