//! Rendering for the constellation engine
//!
//! Drawing happens in two layers:
//!
//! - [`Frame`] + [`Renderer`] rasterize particles, links, and pointer
//!   effects into a CPU-side RGBA buffer, so every visual rule is plain
//!   arithmetic that unit tests can inspect pixel by pixel
//! - [`context::RenderContext`] + [`pipeline::BlitPipeline`] own the wgpu
//!   surface and present that buffer through a fullscreen blit
//!
//! A missing or incompatible drawing surface at start-up surfaces as a
//! fatal [`ContextError`]; past initialization the draw path has no error
//! conditions.

pub mod context;
pub mod frame;
pub mod pipeline;
pub mod renderer;

pub use context::{ContextError, RenderContext};
pub use frame::Frame;
pub use pipeline::BlitPipeline;
pub use renderer::{RenderStyle, Renderer};

// Re-export core types for convenience
pub use constellation_core::{Connection, Engine, Particle, PointerSnapshot};
