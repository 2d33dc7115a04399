//! Pointer state snapshot

use constellation_math::Vec2;

/// Immutable pointer (mouse/touch) state, read by the simulator at the
/// start of each tick
///
/// Snapshots are published by input handlers and never mutated in place, so
/// a tick can never observe a partially updated pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Last known pointer position in surface space
    pub position: Vec2,
    /// Whether the pointer is currently over the surface
    pub active: bool,
}

impl PointerSnapshot {
    pub const INACTIVE: Self = Self { position: Vec2::ZERO, active: false };

    /// An active pointer at the given surface coordinates
    pub fn at(x: f32, y: f32) -> Self {
        Self { position: Vec2::new(x, y), active: true }
    }

    /// No pointer over the surface
    pub fn inactive() -> Self {
        Self::INACTIVE
    }
}
