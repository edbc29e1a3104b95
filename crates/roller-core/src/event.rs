#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The widget consumes a flat stream of [`PointerEvent`]s; the host is
//! responsible for translating its native input (touch, mouse, pen) into
//! these four phases. Coordinates are pixels in viewport space, x growing
//! rightward.
//!
//! # Design Notes
//!
//! - Events carry their own timestamp so velocity estimation does not
//!   depend on when the host delivers them.
//! - `Cancel` is a first-class phase: gesture state must be torn down
//!   without a click or fling being synthesized from it.

use web_time::Instant;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer made contact.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted.
    Up,
    /// Interaction aborted by the host (focus loss, palm rejection, ...).
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Interaction phase.
    pub phase: PointerPhase,
    /// Horizontal position in viewport coordinates, pixels.
    pub x: f32,
    /// When the event occurred.
    pub time: Instant,
}

impl PointerEvent {
    /// Create an event with an explicit phase.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, time: Instant) -> Self {
        Self { phase, x, time }
    }

    /// Pointer-down at `x`.
    #[must_use]
    pub const fn down(x: f32, time: Instant) -> Self {
        Self::new(PointerPhase::Down, x, time)
    }

    /// Pointer-move to `x`.
    #[must_use]
    pub const fn moved(x: f32, time: Instant) -> Self {
        Self::new(PointerPhase::Move, x, time)
    }

    /// Pointer-up at `x`.
    #[must_use]
    pub const fn up(x: f32, time: Instant) -> Self {
        Self::new(PointerPhase::Up, x, time)
    }

    /// Interaction cancelled at `x`.
    #[must_use]
    pub const fn cancel(x: f32, time: Instant) -> Self {
        Self::new(PointerPhase::Cancel, x, time)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{PointerEvent, PointerPhase};
    use web_time::Instant;

    #[test]
    fn constructors_set_phase() {
        let t = Instant::now();
        assert_eq!(PointerEvent::down(1.0, t).phase, PointerPhase::Down);
        assert_eq!(PointerEvent::moved(1.0, t).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::up(1.0, t).phase, PointerPhase::Up);
        assert_eq!(PointerEvent::cancel(1.0, t).phase, PointerPhase::Cancel);
    }

    #[test]
    fn events_compare_by_value() {
        let t = Instant::now();
        assert_eq!(PointerEvent::down(4.0, t), PointerEvent::down(4.0, t));
        assert_ne!(PointerEvent::down(4.0, t), PointerEvent::up(4.0, t));
    }
}
