//! Diagnostic events emitted by the hull algorithms.
//!
//! The caller injects a sink; the algorithms never print. `NullSink` drops
//! everything, `TracingSink` forwards to `tracing` at DEBUG, and a
//! `Vec<HullEvent>` collects events (handy in tests).

use crate::sort::Axis;
use crate::Point;

/// One step of a hull computation.
#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    /// Gift wrap sorted its input to find the start vertex.
    Sorted { axis: Axis, len: usize },
    /// First hull vertex (gift wrap start or Graham anchor).
    Start { point: Point },
    /// Graham scan finished its angular sort.
    AngleSorted { len: usize },
    /// A point was pushed as a hull vertex.
    Accepted { point: Point },
    /// Graham scan removed a point from the stack.
    Popped { point: Point },
    /// Hull complete.
    Closed { vertices: usize },
}

/// Receiver for `HullEvent`s.
pub trait EventSink {
    fn record(&mut self, event: HullEvent);
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn record(&mut self, _event: HullEvent) {}
}

/// Sink that forwards events to `tracing::debug!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: HullEvent) {
        match event {
            HullEvent::Sorted { axis, len } => tracing::debug!(?axis, len, "sorted"),
            HullEvent::Start { point } => tracing::debug!(x = point.x, y = point.y, "start"),
            HullEvent::AngleSorted { len } => tracing::debug!(len, "angle_sorted"),
            HullEvent::Accepted { point } => tracing::debug!(x = point.x, y = point.y, "accepted"),
            HullEvent::Popped { point } => tracing::debug!(x = point.x, y = point.y, "popped"),
            HullEvent::Closed { vertices } => tracing::debug!(vertices, "closed"),
        }
    }
}

impl EventSink for Vec<HullEvent> {
    #[inline]
    fn record(&mut self, event: HullEvent) {
        self.push(event);
    }
}
