//! Scene renderer
//!
//! Draw order per frame: background fade, connection links, pointer links,
//! particles. Purely side-effecting against a [`Frame`]; no error
//! conditions.

use constellation_core::{Connection, Engine, Particle, PointerSnapshot};
use constellation_math::Rgba;

use crate::frame::Frame;

/// Visual style knobs, decoupled from the simulation config
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Background color, also the trail overlay color
    pub background: Rgba,
    /// Alpha of the per-frame background overlay; lower leaves longer trails
    pub trail_alpha: f32,
    /// Color blended in at every link's midpoint
    pub link_color: Rgba,
    /// Color of the particle-to-pointer links
    pub pointer_link_color: Rgba,
    /// Peak alpha of a pointer link, at zero distance
    pub pointer_link_alpha: f32,
    /// Links dimmer than this are skipped entirely
    pub min_link_alpha: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Rgba::from_rgb8(0x66, 0x7e, 0xea),
            trail_alpha: 0.05,
            link_color: Rgba::WHITE,
            pointer_link_color: Rgba::WHITE,
            pointer_link_alpha: 0.4,
            min_link_alpha: 0.01,
        }
    }
}

/// Draws one frame from the engine's current state
pub struct Renderer {
    style: RenderStyle,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderStyle::default())
    }
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Draw the engine's current batch, links, and pointer effects
    pub fn draw_engine(&self, frame: &mut Frame, engine: &Engine) {
        self.draw(
            frame,
            engine.particles(),
            engine.connections(),
            engine.pointer(),
            engine.config().pointer_radius,
        );
    }

    /// Draw one frame from explicit particle and connection lists
    ///
    /// Connection indices must refer to `particles`; the engine maintains
    /// that pairing across regenerations.
    pub fn draw(
        &self,
        frame: &mut Frame,
        particles: &[Particle],
        connections: &[Connection],
        pointer: PointerSnapshot,
        pointer_radius: f32,
    ) {
        frame.fade(self.style.background, self.style.trail_alpha);
        self.draw_connections(frame, particles, connections);
        self.draw_pointer_links(frame, particles, pointer, pointer_radius);
        self.draw_particles(frame, particles);
    }

    fn draw_connections(&self, frame: &mut Frame, particles: &[Particle], connections: &[Connection]) {
        for connection in connections {
            if connection.opacity <= self.style.min_link_alpha {
                continue;
            }
            let a = &particles[connection.a];
            let b = &particles[connection.b];
            frame.draw_line(
                a.position,
                b.position,
                a.color.with_alpha(connection.opacity),
                self.style.link_color.with_alpha(connection.opacity * 0.5),
                b.color.with_alpha(connection.opacity),
            );
        }
    }

    fn draw_pointer_links(
        &self,
        frame: &mut Frame,
        particles: &[Particle],
        pointer: PointerSnapshot,
        pointer_radius: f32,
    ) {
        if !pointer.active || pointer_radius <= 0.0 {
            return;
        }
        for particle in particles {
            let distance = particle.position.distance(pointer.position);
            if distance < pointer_radius {
                let alpha = (1.0 - distance / pointer_radius) * self.style.pointer_link_alpha;
                let color = self.style.pointer_link_color.with_alpha(alpha);
                frame.draw_line(particle.position, pointer.position, color, color, color);
            }
        }
    }

    fn draw_particles(&self, frame: &mut Frame, particles: &[Particle]) {
        for particle in particles {
            frame.draw_glow_disc(particle.position, particle.radius, particle.color, particle.opacity);
        }
    }
}
