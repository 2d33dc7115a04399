//! Window pointer event translation

use winit::dpi::PhysicalPosition;
use winit::event::TouchPhase;

use constellation_sim::PointerSnapshot;

use crate::mailbox::PointerMailbox;

/// Translates cursor and touch input into mailbox snapshots
///
/// The application shell forwards the relevant pieces of each window event;
/// the tick loop reads the result through [`mailbox`](Self::mailbox).
#[derive(Debug, Default)]
pub struct PointerTracker {
    mailbox: PointerMailbox,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mailbox this tracker publishes into
    pub fn mailbox(&self) -> &PointerMailbox {
        &self.mailbox
    }

    /// Cursor moved over the surface
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.mailbox
            .publish(PointerSnapshot::at(position.x as f32, position.y as f32));
    }

    /// Cursor left the surface
    pub fn process_cursor_left(&mut self) {
        self.mailbox.publish(PointerSnapshot::inactive());
    }

    /// Touch input; contact maps to an active pointer, release to an
    /// inactive one
    pub fn process_touch(&mut self, phase: TouchPhase, position: PhysicalPosition<f64>) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.mailbox
                    .publish(PointerSnapshot::at(position.x as f32, position.y as f32));
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.mailbox.publish(PointerSnapshot::inactive());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moved_publishes_active_snapshot() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(PhysicalPosition::new(120.0, 45.0));
        let snapshot = tracker.mailbox().latest();
        assert!(snapshot.active);
        assert_eq!((snapshot.position.x, snapshot.position.y), (120.0, 45.0));
    }

    #[test]
    fn test_cursor_left_deactivates() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(PhysicalPosition::new(10.0, 10.0));
        tracker.process_cursor_left();
        assert!(!tracker.mailbox().latest().active);
    }

    #[test]
    fn test_touch_phases() {
        let mut tracker = PointerTracker::new();
        tracker.process_touch(TouchPhase::Started, PhysicalPosition::new(50.0, 60.0));
        assert!(tracker.mailbox().latest().active);

        tracker.process_touch(TouchPhase::Moved, PhysicalPosition::new(55.0, 65.0));
        let moved = tracker.mailbox().latest();
        assert!(moved.active);
        assert_eq!((moved.position.x, moved.position.y), (55.0, 65.0));

        tracker.process_touch(TouchPhase::Ended, PhysicalPosition::new(55.0, 65.0));
        assert!(!tracker.mailbox().latest().active);
    }

    #[test]
    fn test_touch_cancel_deactivates() {
        let mut tracker = PointerTracker::new();
        tracker.process_touch(TouchPhase::Moved, PhysicalPosition::new(5.0, 5.0));
        tracker.process_touch(TouchPhase::Cancelled, PhysicalPosition::new(5.0, 5.0));
        assert!(!tracker.mailbox().latest().active);
    }
}
