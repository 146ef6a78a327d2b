//! Simulation state and core entity types
//!
//! Everything needed for deterministic replay and snapshots lives here.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::forces::Force;
use crate::consts::*;
use crate::mass_of;
use crate::presets::BurstTuning;

/// A launched sprite: a point mass with cosmetic spin and a lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Sprite size (diameter); all circle math uses half of this
    pub size: f32,
    /// Cosmetic rotation (radians); no physical meaning
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Emoji payload for renderers; never read by the physics
    #[serde(default = "default_glyph")]
    pub glyph: char,
    /// Tick the entity was created on
    pub spawned_tick: u64,
    /// Removed once `age >= ttl_ticks`
    pub ttl_ticks: u32,
}

fn default_glyph() -> char {
    '🙂'
}

impl Entity {
    /// Collision radius (half the sprite size)
    #[inline]
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }

    /// Mass derived from sprite size
    #[inline]
    pub fn mass(&self) -> f32 {
        mass_of(self.size)
    }

    /// Ticks since creation
    #[inline]
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.spawned_tick)
    }

    /// True once the entity has outlived its TTL
    #[inline]
    pub fn expired(&self, now: u64) -> bool {
        self.age(now) >= self.ttl_ticks as u64
    }
}

/// World parameters shared by every entity
///
/// Mutated from the outside at any time; updates take effect on the next
/// step, so no consistency protocol is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Downward acceleration, applied as `vel += gravity * dt`; y grows downward
    pub gravity: f32,
    /// Fraction of perpendicular speed retained after a bounce, in [0, 1]
    pub restitution: f32,
    /// Per-step multiplicative velocity decay in (0, 1]; 1.0 means no decay
    pub friction: f32,
    /// Boundary box (width, height); the floor is at `y = bounds.y`
    pub bounds: Vec2,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            bounds: Vec2::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

/// Everything needed to create one entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub rotation_speed: f32,
    pub ttl_ticks: u32,
    pub glyph: char,
}

impl SpawnRequest {
    /// Request with default size, spin, TTL, and glyph
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: DEFAULT_SIZE,
            rotation_speed: 0.0,
            ttl_ticks: DEFAULT_TTL_TICKS,
            glyph: default_glyph(),
        }
    }
}

/// RNG state wrapper for serialization
///
/// Each spawn event gets a fresh generator on its own PCG stream, so replay
/// from a snapshot reproduces the exact same scatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next spawn event; advances the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// World parameters
    pub params: WorldParams,
    /// Optional force contributors, composed before gravity each step
    pub forces: Vec<Force>,
    /// Entity cap; spawning past it evicts the oldest entity first
    pub capacity: usize,
    /// Live entities (sorted by id for determinism)
    pub entities: Vec<Entity>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl SimState {
    /// Create an empty simulation with the given seed and default parameters
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            params: WorldParams::default(),
            forces: Vec::new(),
            capacity: MAX_ENTITIES,
            entities: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the world parameters; takes effect on the next step
    pub fn set_params(&mut self, params: WorldParams) {
        self.params = params;
    }

    /// Replace the active force contributors
    pub fn set_forces(&mut self, forces: Vec<Force>) {
        self.forces = forces;
    }

    /// Append an entity, evicting the oldest first if at capacity
    ///
    /// Eviction is FIFO and unconditional: remaining TTL is ignored.
    pub fn spawn(&mut self, req: SpawnRequest) -> u32 {
        while self.entities.len() >= self.capacity {
            // A zero capacity leaves nothing to evict
            if self.evict_oldest().is_none() {
                break;
            }
        }
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            pos: req.pos,
            vel: req.vel,
            size: req.size,
            rotation: 0.0,
            rotation_speed: req.rotation_speed,
            glyph: req.glyph,
            spawned_tick: self.time_ticks,
            ttl_ticks: req.ttl_ticks,
        });
        id
    }

    /// Remove the oldest-created entity; returns its id
    ///
    /// IDs are monotonically increasing, so the smallest id is the oldest.
    pub fn evict_oldest(&mut self) -> Option<u32> {
        let idx = self
            .entities
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.id)
            .map(|(i, _)| i)?;
        let evicted = self.entities.remove(idx);
        log::debug!("evicted entity {} (age {})", evicted.id, evicted.age(self.time_ticks));
        Some(evicted.id)
    }

    /// Spawn a scattered burst of entities around an origin (the launch gesture)
    ///
    /// Returns the ids of the spawned entities, in spawn order.
    pub fn spawn_burst(&mut self, origin: Vec2, count: usize, tuning: &BurstTuning) -> Vec<u32> {
        let mut rng = self.rng_state.next_rng();
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let angle = tuning.aim + rng.random_range(-tuning.spread..=tuning.spread);
            let speed = rng.random_range(tuning.speed_min..=tuning.speed_max);
            // y grows downward, so "up" is negative sin
            let vel = Vec2::new(angle.cos(), -angle.sin()) * speed;
            let size = rng.random_range(tuning.size_min..=tuning.size_max);
            let spin = rng.random_range(-tuning.spin_max..=tuning.spin_max);
            let glyph = if tuning.glyphs.is_empty() {
                default_glyph()
            } else {
                tuning.glyphs[rng.random_range(0..tuning.glyphs.len())]
            };
            ids.push(self.spawn(SpawnRequest {
                pos: origin,
                vel,
                size,
                rotation_speed: spin,
                ttl_ticks: tuning.ttl_ticks,
                glyph,
            }));
        }
        ids
    }

    /// One-shot radial impulse applied to every entity (the explosion effect)
    ///
    /// Falls off linearly to zero at `radius`; entities at the exact center
    /// get no direction and are left alone.
    pub fn blast(&mut self, center: Vec2, strength: f32, radius: f32) {
        for e in &mut self.entities {
            let offset = e.pos - center;
            let dist = offset.length();
            if dist < 1e-3 || dist >= radius {
                continue;
            }
            let falloff = 1.0 - dist / radius;
            e.vel += offset / dist * strength * falloff;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_assigns_monotonic_ids() {
        let mut state = SimState::new(7);
        let a = state.spawn(SpawnRequest::new(Vec2::new(10.0, 10.0), Vec2::ZERO));
        let b = state.spawn(SpawnRequest::new(Vec2::new(20.0, 10.0), Vec2::ZERO));
        assert!(b > a);
        assert_eq!(state.entities.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let mut state = SimState::new(7);
        state.capacity = 3;
        let first = state.spawn(SpawnRequest::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        for _ in 0..3 {
            state.spawn(SpawnRequest::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        }
        assert_eq!(state.entities.len(), 3);
        assert!(state.entities.iter().all(|e| e.id != first));
        // Survivors are the most recently created three
        let ids: Vec<u32> = state.entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_eviction_ignores_remaining_ttl() {
        let mut state = SimState::new(7);
        state.capacity = 1;
        let mut req = SpawnRequest::new(Vec2::new(1.0, 1.0), Vec2::ZERO);
        req.ttl_ticks = u32::MAX; // effectively immortal
        state.spawn(req);
        let newer = state.spawn(SpawnRequest::new(Vec2::new(2.0, 2.0), Vec2::ZERO));
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].id, newer);
    }

    #[test]
    fn test_zero_capacity_spawn_still_returns() {
        let mut state = SimState::new(7);
        state.capacity = 0;
        let id = state.spawn(SpawnRequest::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        assert_eq!(id, 1);
        // Nothing to evict; the entity lives until the next step enforces
        // the capacity
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_burst_is_reproducible_from_seed() {
        let tuning = BurstTuning::default();
        let mut a = SimState::new(42);
        let mut b = SimState::new(42);
        a.spawn_burst(Vec2::new(400.0, 500.0), 10, &tuning);
        b.spawn_burst(Vec2::new(400.0, 500.0), 10, &tuning);
        for (ea, eb) in a.entities.iter().zip(&b.entities) {
            assert_eq!(ea.vel, eb.vel);
            assert_eq!(ea.size, eb.size);
            assert_eq!(ea.glyph, eb.glyph);
        }
        // Successive bursts draw from a fresh stream
        let before: Vec<Vec2> = a.entities.iter().map(|e| e.vel).collect();
        a.entities.clear();
        a.spawn_burst(Vec2::new(400.0, 500.0), 10, &tuning);
        let after: Vec<Vec2> = a.entities.iter().map(|e| e.vel).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_blast_pushes_outward_with_falloff() {
        let mut state = SimState::new(1);
        state.spawn(SpawnRequest::new(Vec2::new(110.0, 100.0), Vec2::ZERO));
        state.spawn(SpawnRequest::new(Vec2::new(180.0, 100.0), Vec2::ZERO));
        state.spawn(SpawnRequest::new(Vec2::new(500.0, 100.0), Vec2::ZERO));
        state.blast(Vec2::new(100.0, 100.0), 50.0, 200.0);

        // Near entity kicked hardest, along +x
        assert!(state.entities[0].vel.x > state.entities[1].vel.x);
        assert!(state.entities[1].vel.x > 0.0);
        // Outside the blast radius: untouched
        assert_eq!(state.entities[2].vel, Vec2::ZERO);
    }
}
