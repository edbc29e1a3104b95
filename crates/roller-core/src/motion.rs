#![forbid(unsafe_code)]

//! Scroll motion: fling physics and eased positional animation.
//!
//! [`Scroller`] owns at most one motion at a time and turns it into a
//! frame-by-frame offset sequence via [`tick`](Scroller::tick). Two ways to
//! start a motion:
//!
//! - [`fling`](Scroller::fling): free scroll under constant deceleration.
//!   The natural travel is `v² / (2a)` in the direction of `v`; the terminal
//!   offset is clamped to the given bounds and the offset follows the
//!   deceleration curve toward it. Constant deceleration from velocity `v`
//!   over duration `T = |v| / a` is exactly a quadratic ease-out of
//!   normalized time, which is how it is evaluated here.
//! - [`animate_to`](Scroller::animate_to): fixed-duration eased move, used
//!   for centering corrections.
//!
//! # Invariants
//!
//! 1. Starting any motion supersedes and discards an in-flight one (last
//!    writer wins; no queueing).
//! 2. A fling's offset never leaves `[min, max]` at any tick, and its
//!    terminal offset equals the clamped target exactly.
//! 3. `abort()` freezes the offset where it is and reports finished.
//! 4. Once finished, `tick()` returns the settled offset unchanged until a
//!    new motion starts.
//!
//! # Failure Modes
//!
//! - Zero (or non-finite) fling velocity: finishes immediately at the
//!   clamped start position.
//! - Zero-duration animation: clamped to 1 ns, so the first tick lands on
//!   the target.
//! - Inverted bounds (`min > max`) are normalized by swapping.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// An easing function mapping normalized time `[0, 1]` to progress `[0, 1]`.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn ease_linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-out. This is the constant-deceleration curve.
#[inline]
#[must_use]
pub fn ease_out_quad(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u
}

/// Cubic ease-out; a slightly snappier settle for positional animations.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

// ---------------------------------------------------------------------------
// Scroller
// ---------------------------------------------------------------------------

/// Minimum deceleration, px/s². Keeps fling durations finite.
const MIN_DECELERATION: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
enum Mode {
    Idle,
    Active {
        start: f32,
        delta: f32,
        duration: Duration,
        easing: EasingFn,
    },
}

/// Produces a frame-by-frame scroll offset sequence for one motion at a time.
#[derive(Debug, Clone)]
pub struct Scroller {
    mode: Mode,
    elapsed: Duration,
    offset: f32,
}

impl Scroller {
    /// Create an idle scroller at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            elapsed: Duration::ZERO,
            offset: 0.0,
        }
    }

    /// Start a fling from `start` with `velocity` (px/s) under
    /// `deceleration` (px/s²), bounded to `[min, max]`.
    ///
    /// Supersedes any in-flight motion.
    pub fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, deceleration: f32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let a = deceleration.max(MIN_DECELERATION);

        if !velocity.is_finite() || velocity == 0.0 {
            self.settle(start.clamp(min, max));
            return;
        }

        let duration_secs = velocity.abs() / a;
        let natural_travel = velocity * duration_secs / 2.0;
        let end = (start + natural_travel).clamp(min, max);
        let delta = end - start;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "scroller.fling",
            start,
            velocity,
            end,
            duration_ms = duration_secs * 1000.0
        );

        if delta == 0.0 {
            self.settle(end);
            return;
        }

        self.mode = Mode::Active {
            start,
            delta,
            duration: Duration::from_secs_f32(duration_secs),
            easing: ease_out_quad,
        };
        self.elapsed = Duration::ZERO;
        self.offset = start;
    }

    /// Start an eased move from `from` to `to` over `duration`.
    ///
    /// Uses [`ease_out_cubic`]; see [`animate_to_with`](Self::animate_to_with)
    /// to pick another curve. Supersedes any in-flight motion.
    pub fn animate_to(&mut self, from: f32, to: f32, duration: Duration) {
        self.animate_to_with(from, to, duration, ease_out_cubic);
    }

    /// Start an eased move with an explicit easing function.
    pub fn animate_to_with(&mut self, from: f32, to: f32, duration: Duration, easing: EasingFn) {
        let duration = if duration.is_zero() {
            Duration::from_nanos(1)
        } else {
            duration
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "scroller.animate", from, to, ?duration);

        self.mode = Mode::Active {
            start: from,
            delta: to - from,
            duration,
            easing,
        };
        self.elapsed = Duration::ZERO;
        self.offset = from;
    }

    /// Advance the motion by one frame and return the current offset.
    ///
    /// Finished or idle scrollers return the settled offset unchanged.
    pub fn tick(&mut self, dt: Duration) -> f32 {
        let Mode::Active {
            start,
            delta,
            duration,
            easing,
        } = self.mode
        else {
            return self.offset;
        };

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= duration {
            self.settle(start + delta);
            return self.offset;
        }

        let t = (self.elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
        self.offset = start + easing(t) * delta;
        self.offset
    }

    /// Cancel the motion immediately, freezing at the current offset.
    pub fn abort(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Current offset (settled or mid-motion).
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether no motion is in flight (naturally terminated or aborted).
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.mode, Mode::Idle)
    }

    fn settle(&mut self, offset: f32) {
        self.mode = Mode::Idle;
        self.offset = offset;
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
