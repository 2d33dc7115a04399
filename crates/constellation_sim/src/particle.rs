//! Particle state

use constellation_math::{Rgba, Vec2};

/// A single constellation particle
///
/// Particles are created in a batch by [`crate::ParticleStore::regenerate`]
/// and live until the next regeneration; no particle is added or removed
/// individually mid-run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface space, kept within the surface bounds
    pub position: Vec2,
    /// Velocity in pixels per tick
    pub velocity: Vec2,
    /// Disc radius in pixels
    pub radius: f32,
    /// Base color, drawn from the configured palette
    pub color: Rgba,
    /// Current opacity, clamped to `[MIN_OPACITY, 1.0]` at the end of each tick
    pub opacity: f32,
    /// Opacity the particle relaxes to when the pointer is elsewhere
    pub base_opacity: f32,
    /// Phase offset for the twinkle oscillation
    pub phase: f32,
}

impl Particle {
    /// Create a stationary white particle at the given position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: 1.5,
            color: Rgba::WHITE,
            opacity: 0.6,
            base_opacity: 0.6,
            phase: 0.0,
        }
    }

    /// Set the velocity of this particle
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the disc radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set both the current and base opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.base_opacity = opacity;
        self
    }

    /// Set the twinkle phase offset
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Current speed in pixels per tick
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let p = Particle::new(Vec2::new(10.0, 20.0))
            .with_velocity(Vec2::new(0.3, -0.4))
            .with_radius(2.0)
            .with_opacity(0.8)
            .with_phase(1.0);
        assert_eq!(p.position, Vec2::new(10.0, 20.0));
        assert_eq!(p.radius, 2.0);
        assert_eq!(p.opacity, 0.8);
        assert_eq!(p.base_opacity, 0.8);
        assert_eq!(p.phase, 1.0);
        assert!((p.speed() - 0.5).abs() < 1e-6);
    }
}
