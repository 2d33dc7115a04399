//! Constellation - animated particle-constellation background
//!
//! A batch of drifting particles linked by a proximity graph, with
//! pointer-driven attraction and glow, rendered into a native window.
//!
//! The simulation core lives in [`constellation_core`] and
//! [`constellation_sim`]; this crate adds the layered configuration and the
//! windowed application shell.

pub mod config;

pub use constellation_core::{Bounds, Connection, Engine, Particle, PointerSnapshot, SimConfig};
pub use constellation_render::{Frame, RenderStyle, Renderer};
