//! Particle batch storage

use rand::Rng;

use constellation_math::{Rgba, Vec2};

use crate::bounds::Bounds;
use crate::particle::Particle;
use crate::simulator::SimConfig;

/// Owns the current particle batch
///
/// The batch is replaced wholesale by [`regenerate`](Self::regenerate); the
/// swap is a single assignment, so a caller stepping between regenerations
/// never observes a half-built batch.
#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a specific batch
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard the batch and roll `config.particle_count` fresh particles
    ///
    /// Positions are uniform over the bounds, velocity components uniform in
    /// `±particle_speed / 2`, radius and base opacity uniform over their
    /// configured ranges, color uniform over the palette, twinkle phase
    /// uniform over a full period.
    pub fn regenerate<R: Rng>(&mut self, config: &SimConfig, bounds: Bounds, rng: &mut R) {
        let mut batch = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let position = Vec2::new(
                rng.gen_range(0.0..=bounds.width),
                rng.gen_range(0.0..=bounds.height),
            );
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * config.particle_speed,
                (rng.gen::<f32>() - 0.5) * config.particle_speed,
            );
            let [radius_min, radius_max] = config.radius_range;
            let [opacity_min, opacity_max] = config.opacity_range;
            let color = if config.palette.is_empty() {
                Rgba::WHITE
            } else {
                config.palette[rng.gen_range(0..config.palette.len())]
            };
            batch.push(
                Particle::new(position)
                    .with_velocity(velocity)
                    .with_radius(rng.gen_range(radius_min..=radius_max))
                    .with_color(color)
                    .with_opacity(rng.gen_range(opacity_min..=opacity_max))
                    .with_phase(rng.gen_range(0.0..std::f32::consts::TAU)),
            );
        }
        self.particles = batch;
    }

    /// Read access to the current batch
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Field-level mutation for the simulator; particle identity is fixed
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of particles in the batch
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_regenerate_yields_exact_count() {
        let mut store = ParticleStore::new();
        let config = SimConfig { particle_count: 37, ..SimConfig::default() };
        store.regenerate(&config, Bounds::new(800.0, 600.0), &mut seeded_rng());
        assert_eq!(store.len(), 37);
    }

    #[test]
    fn test_regenerated_particles_start_inside_bounds() {
        let mut store = ParticleStore::new();
        let bounds = Bounds::new(800.0, 600.0);
        store.regenerate(&SimConfig::default(), bounds, &mut seeded_rng());
        for particle in store.particles() {
            assert!(bounds.contains(particle.position));
        }
    }

    #[test]
    fn test_regenerated_fields_respect_config_ranges() {
        let mut store = ParticleStore::new();
        let config = SimConfig::default();
        store.regenerate(&config, Bounds::new(800.0, 600.0), &mut seeded_rng());
        for particle in store.particles() {
            assert!(particle.radius >= config.radius_range[0]);
            assert!(particle.radius <= config.radius_range[1]);
            assert!(particle.base_opacity >= config.opacity_range[0]);
            assert!(particle.base_opacity <= config.opacity_range[1]);
            assert_eq!(particle.opacity, particle.base_opacity);
            assert!(particle.velocity.x.abs() <= config.particle_speed / 2.0);
            assert!(particle.velocity.y.abs() <= config.particle_speed / 2.0);
            assert!(config.palette.contains(&particle.color));
        }
    }

    #[test]
    fn test_regenerate_replaces_previous_batch() {
        let mut store = ParticleStore::new();
        let mut rng = seeded_rng();
        let config = SimConfig { particle_count: 10, ..SimConfig::default() };
        store.regenerate(&config, Bounds::new(100.0, 100.0), &mut rng);
        let first = store.particles().to_vec();

        store.regenerate(&config, Bounds::new(100.0, 100.0), &mut rng);
        assert_eq!(store.len(), 10);
        assert_ne!(store.particles(), first.as_slice());
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        let mut store = ParticleStore::new();
        let config = SimConfig { particle_count: 5, palette: Vec::new(), ..SimConfig::default() };
        store.regenerate(&config, Bounds::new(100.0, 100.0), &mut seeded_rng());
        for particle in store.particles() {
            assert_eq!(particle.color, Rgba::WHITE);
        }
    }

    #[test]
    fn test_zero_sized_bounds() {
        let mut store = ParticleStore::new();
        let config = SimConfig { particle_count: 5, ..SimConfig::default() };
        store.regenerate(&config, Bounds::new(0.0, 0.0), &mut seeded_rng());
        for particle in store.particles() {
            assert_eq!(particle.position, Vec2::ZERO);
        }
    }
}
