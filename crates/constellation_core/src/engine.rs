//! Engine facade tying the store, simulator, and pointer state together

use rand::rngs::StdRng;
use rand::SeedableRng;

use constellation_sim::{
    Bounds, Connection, Particle, ParticleStore, PointerSnapshot, SimConfig, Simulator,
};

/// The constellation engine
///
/// Constructed explicitly by the hosting application and owned by it; there
/// is no ambient global. One call to [`tick`](Self::tick) advances the
/// simulation a single step and rebuilds the connection list, so the caller
/// drives it from whatever frame callback the host provides.
pub struct Engine {
    simulator: Simulator,
    store: ParticleStore,
    connections: Vec<Connection>,
    pointer: PointerSnapshot,
    bounds: Bounds,
    rng: StdRng,
    paused: bool,
}

impl Engine {
    /// Create an engine over the given surface, seeding its RNG from
    /// system entropy. The initial batch is generated immediately.
    pub fn new(config: SimConfig, bounds: Bounds) -> Self {
        Self::with_rng(config, bounds, StdRng::from_entropy())
    }

    /// Create an engine with a fixed RNG seed, for deterministic runs
    pub fn with_seed(config: SimConfig, bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(config, bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimConfig, bounds: Bounds, rng: StdRng) -> Self {
        let mut engine = Self {
            simulator: Simulator::new(config),
            store: ParticleStore::new(),
            connections: Vec::new(),
            pointer: PointerSnapshot::INACTIVE,
            bounds,
            rng,
            paused: false,
        };
        engine.store.regenerate(&engine.simulator.config, engine.bounds, &mut engine.rng);
        log::info!(
            "Engine initialized: {} particles over {:.0}x{:.0}",
            engine.store.len(),
            bounds.width,
            bounds.height
        );
        engine
    }

    /// Advance one tick using the given pointer snapshot
    ///
    /// A paused engine ignores the call entirely: particle state, the tick
    /// counter, and the connection list all stay frozen.
    pub fn tick(&mut self, pointer: PointerSnapshot) {
        if self.paused {
            return;
        }
        self.pointer = pointer;
        self.simulator.step(&mut self.store, self.bounds, pointer);
        self.simulator.connections(&self.store, &mut self.connections);
    }

    /// Adopt a new surface extent and regenerate the batch
    ///
    /// The swap happens entirely within this call, between ticks; no tick
    /// ever observes a partially regenerated batch.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.regenerate();
    }

    /// Discard the batch and roll a fresh one within the current bounds
    pub fn regenerate(&mut self) {
        self.store.regenerate(&self.simulator.config, self.bounds, &mut self.rng);
        self.connections.clear();
        log::info!(
            "Regenerated {} particles over {:.0}x{:.0}",
            self.store.len(),
            self.bounds.width,
            self.bounds.height
        );
    }

    /// Change the particle count; takes effect through an immediate
    /// regeneration
    pub fn set_particle_count(&mut self, count: usize) {
        self.simulator.config.particle_count = count;
        self.regenerate();
    }

    /// Change the pointer interaction radius
    pub fn set_pointer_radius(&mut self, radius: f32) {
        self.simulator.config.pointer_radius = radius;
    }

    /// Change the maximum link distance
    pub fn set_max_link_distance(&mut self, distance: f32) {
        self.simulator.config.max_link_distance = distance;
    }

    /// Freeze the simulation; rendering may continue from the frozen state
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Engine paused at tick {}", self.simulator.tick());
        }
    }

    /// Resume a paused simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Engine resumed at tick {}", self.simulator.tick());
        }
    }

    /// Whether the engine is currently paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The current batch
    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    /// Connections computed by the most recent tick
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The pointer snapshot consumed by the most recent tick
    pub fn pointer(&self) -> PointerSnapshot {
        self.pointer
    }

    /// The current surface extent
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The active simulation configuration
    pub fn config(&self) -> &SimConfig {
        &self.simulator.config
    }

    /// Ticks stepped since construction
    pub fn tick_index(&self) -> u64 {
        self.simulator.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_math::Vec2;

    fn test_engine() -> Engine {
        Engine::with_seed(SimConfig::default(), Bounds::new(800.0, 600.0), 7)
    }

    #[test]
    fn test_construction_generates_batch() {
        let engine = test_engine();
        assert_eq!(engine.particles().len(), SimConfig::default().particle_count);
        assert_eq!(engine.tick_index(), 0);
        assert!(engine.connections().is_empty());
    }

    #[test]
    fn test_seeded_engines_are_reproducible() {
        let mut a = test_engine();
        let mut b = test_engine();
        for _ in 0..50 {
            a.tick(PointerSnapshot::at(200.0, 200.0));
            b.tick(PointerSnapshot::at(200.0, 200.0));
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.connections(), b.connections());
    }

    #[test]
    fn test_tick_rebuilds_connections() {
        let mut engine = test_engine();
        engine.tick(PointerSnapshot::inactive());
        // 120 particles over 800x600 with a 120px link distance always pair
        // up somewhere
        assert!(!engine.connections().is_empty());
    }

    #[test]
    fn test_resize_regenerates_into_new_bounds() {
        let mut engine = test_engine();
        for _ in 0..10 {
            engine.tick(PointerSnapshot::inactive());
        }
        let small = Bounds::new(200.0, 100.0);
        engine.resize(small);
        assert_eq!(engine.bounds(), small);
        assert_eq!(engine.particles().len(), SimConfig::default().particle_count);
        for p in engine.particles() {
            assert!(small.contains(p.position));
        }
        assert!(engine.connections().is_empty());
    }

    #[test]
    fn test_set_particle_count_regenerates() {
        let mut engine = test_engine();
        engine.set_particle_count(60);
        assert_eq!(engine.particles().len(), 60);
    }

    #[test]
    fn test_setters_update_config() {
        let mut engine = test_engine();
        engine.set_pointer_radius(100.0);
        engine.set_max_link_distance(80.0);
        assert_eq!(engine.config().pointer_radius, 100.0);
        assert_eq!(engine.config().max_link_distance, 80.0);
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut engine = test_engine();
        engine.tick(PointerSnapshot::inactive());
        let frozen: Vec<Vec2> = engine.particles().iter().map(|p| p.position).collect();
        let tick = engine.tick_index();

        engine.pause();
        assert!(engine.is_paused());
        for _ in 0..20 {
            engine.tick(PointerSnapshot::at(100.0, 100.0));
        }
        let after: Vec<Vec2> = engine.particles().iter().map(|p| p.position).collect();
        assert_eq!(frozen, after);
        assert_eq!(engine.tick_index(), tick);
    }

    #[test]
    fn test_resume_continues_stepping() {
        let mut engine = test_engine();
        engine.pause();
        engine.resume();
        assert!(!engine.is_paused());
        engine.tick(PointerSnapshot::inactive());
        assert_eq!(engine.tick_index(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut engine = test_engine();
        engine.pause();
        engine.pause();
        engine.resume();
        assert!(!engine.is_paused());
    }
}
