//! Pointer input for the constellation engine
//!
//! Input handlers never share mutable pointer state with the tick loop.
//! They publish immutable [`PointerSnapshot`]s into a single-slot
//! [`PointerMailbox`]; the loop reads the latest snapshot at the start of
//! each tick.
//!
//! [`PointerSnapshot`]: constellation_sim::PointerSnapshot

mod mailbox;
mod tracker;

pub use mailbox::PointerMailbox;
pub use tracker::PointerTracker;
