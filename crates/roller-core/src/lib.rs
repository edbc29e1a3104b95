#![forbid(unsafe_code)]

//! Core: pointer input, velocity tracking, and scroll motion.
//!
//! # Role in the roller
//! `roller-core` is the host-independent layer. It owns the pixel-space
//! geometry primitives, the canonical pointer event type the widget
//! consumes, the trailing-window velocity tracker that classifies flings,
//! and the [`motion::Scroller`] that turns a release into a frame-by-frame
//! offset sequence.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Size`, `Rect` in f32 pixel space.
//! - **Event**: canonical pointer phases (down, move, up, cancel).
//! - **VelocityTracker**: average velocity over a trailing time window.
//! - **Scroller**: one-at-a-time fling / eased-scroll motion with `tick`.
//!
//! # How it fits in the system
//! The widget crate (`roller-widget`) feeds pointer events through its input
//! state machine and drives the `Scroller` from the host's per-frame tick.
//! Nothing in this crate touches text, styling, or selection.

pub mod event;
pub mod geometry;
pub mod motion;
pub mod velocity;
