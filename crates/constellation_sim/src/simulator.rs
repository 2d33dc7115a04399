//! Per-tick simulation step and proximity-graph pass

use crate::bounds::Bounds;
use crate::connection::Connection;
use crate::pointer::PointerSnapshot;
use crate::store::ParticleStore;
use constellation_math::Rgba;

/// Lower opacity clamp; particles never fade out entirely
pub const MIN_OPACITY: f32 = 0.1;

/// Configuration for the particle simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Particles per batch
    pub particle_count: usize,
    /// Pairs further apart than this emit no connection
    pub max_link_distance: f32,
    /// Upper bound on each initial velocity component's magnitude, doubled
    pub particle_speed: f32,
    /// Disc radius range [min, max] in pixels
    pub radius_range: [f32; 2],
    /// Scale applied to every connection's opacity
    pub connection_opacity: f32,
    /// Base opacity range [min, max]
    pub opacity_range: [f32; 2],
    /// Pointer interaction radius in pixels
    pub pointer_radius: f32,
    /// Gain on the pointer attraction acceleration
    pub pointer_gain: f32,
    /// How strongly proximity to the pointer raises opacity
    pub pointer_glow: f32,
    /// Isotropic velocity factor applied every tick; must stay below 1
    pub damping: f32,
    /// Twinkle oscillation rate in radians per tick
    pub twinkle_rate: f32,
    /// Twinkle oscillation amplitude in opacity units
    pub twinkle_amplitude: f32,
    /// Colors particles are drawn from, uniformly
    pub palette: Vec<Rgba>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            max_link_distance: 120.0,
            particle_speed: 0.5,
            radius_range: [1.0, 3.0],
            connection_opacity: 0.3,
            opacity_range: [0.2, 0.8],
            pointer_radius: 150.0,
            pointer_gain: 0.003,
            pointer_glow: 0.5,
            damping: 0.999,
            twinkle_rate: 0.02,
            twinkle_amplitude: 0.1,
            palette: vec![
                Rgba::from_rgb8(0x3b, 0x82, 0xf6),
                Rgba::from_rgb8(0x25, 0x63, 0xeb),
                Rgba::from_rgb8(0x60, 0xa5, 0xfa),
                Rgba::WHITE,
            ],
        }
    }
}

/// Advances particle state one tick at a time and rebuilds the
/// proximity graph
///
/// The step is a discrete unit-timestep update: positions advance by one
/// velocity per tick, driven by the host's frame callback.
pub struct Simulator {
    /// Simulation configuration
    pub config: SimConfig,
    tick: u64,
}

impl Simulator {
    /// Create a simulator with the given configuration
    pub fn new(config: SimConfig) -> Self {
        Self { config, tick: 0 }
    }

    /// Number of ticks stepped so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the batch by one tick
    ///
    /// Per particle, in order: integrate position and reflect off the
    /// walls, apply pointer attraction and glow, damp velocity, twinkle,
    /// clamp opacity. After the step every position lies inside `bounds`
    /// and every opacity inside `[MIN_OPACITY, 1.0]`.
    pub fn step(&mut self, store: &mut ParticleStore, bounds: Bounds, pointer: PointerSnapshot) {
        self.tick = self.tick.wrapping_add(1);
        let time = self.tick as f32;

        for particle in store.particles_mut() {
            // Integrate, then reflect off whichever walls were crossed.
            // Comparisons are inclusive so a particle resting exactly on a
            // wall still bounces instead of sticking.
            particle.position += particle.velocity;
            if particle.position.x <= 0.0 || particle.position.x >= bounds.width {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y <= 0.0 || particle.position.y >= bounds.height {
                particle.velocity.y = -particle.velocity.y;
            }
            particle.position = bounds.clamp(particle.position);

            // Pointer attraction: linear falloff over the interaction
            // radius, accelerating along the full offset vector. Proximity
            // also lifts opacity; away from the pointer it snaps back to
            // the particle's base.
            let mut boosted = false;
            if pointer.active {
                let offset = pointer.position - particle.position;
                let distance = offset.length();
                if distance < self.config.pointer_radius {
                    let falloff =
                        (self.config.pointer_radius - distance) / self.config.pointer_radius;
                    particle.velocity += offset * (falloff * self.config.pointer_gain);
                    particle.opacity =
                        (particle.base_opacity + falloff * self.config.pointer_glow).min(1.0);
                    boosted = true;
                }
            }
            if !boosted {
                particle.opacity = particle.base_opacity;
            }

            // The pointer force is not conservative; this damping factor is
            // the only bound on long-run velocity growth.
            particle.velocity *= self.config.damping;

            // Twinkle, then clamp.
            particle.opacity += (time * self.config.twinkle_rate + particle.phase).sin()
                * self.config.twinkle_amplitude;
            particle.opacity = particle.opacity.clamp(MIN_OPACITY, 1.0);
        }
    }

    /// Rebuild the connection list into `out`
    ///
    /// Scans every unordered pair; O(n²) over the batch, which stays in the
    /// low hundreds. A spatial grid is the upgrade path if counts grow.
    pub fn connections(&self, store: &ParticleStore, out: &mut Vec<Connection>) {
        out.clear();
        let particles = store.particles();
        let max_distance = self.config.max_link_distance;
        if max_distance <= 0.0 {
            return;
        }
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let distance = particles[i].position.distance(particles[j].position);
                if distance < max_distance {
                    let attenuation = (1.0 - distance / max_distance) * self.config.connection_opacity;
                    out.push(Connection {
                        a: i,
                        b: j,
                        distance,
                        opacity: attenuation * particles[i].opacity.min(particles[j].opacity),
                    });
                }
            }
        }
    }
}
