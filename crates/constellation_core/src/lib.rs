//! Core engine for the constellation animation
//!
//! This crate provides the [`Engine`] facade that the application owns: it
//! holds the particle batch, steps the simulator once per frame callback,
//! rebuilds the proximity graph, and exposes the external control surface
//! (particle count, pointer radius, link distance, pause/resume).

mod engine;

pub use engine::Engine;

// Re-export simulation types so callers only need this crate
pub use constellation_sim::{
    Bounds, Connection, Particle, ParticleStore, PointerSnapshot, SimConfig, Simulator,
    MIN_OPACITY,
};

// Re-export commonly used math types for convenience
pub use constellation_math::{Rgba, Vec2};
