//! Proximity-graph edges

/// An ephemeral link between two particles closer than the configured
/// link distance
///
/// Connections index into the batch they were computed from and are
/// rebuilt from scratch every tick; they are never stored across ticks or
/// across a regeneration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Index of the first endpoint in the batch
    pub a: usize,
    /// Index of the second endpoint in the batch
    pub b: usize,
    /// Euclidean distance between the endpoints at computation time
    pub distance: f32,
    /// Link opacity, attenuated by distance and both endpoints' opacity
    pub opacity: f32,
}
