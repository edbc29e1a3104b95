#![forbid(unsafe_code)]

//! The roller widget: gesture classification, selection, and settling.
//!
//! [`Roller`] is a stateful processor in the host's input/render loop. The
//! host feeds it pointer events ([`on_pointer`](Roller::on_pointer)) and
//! display ticks ([`on_frame`](Roller::on_frame)); the widget answers with
//! [`Signals`] telling the host what to refresh, and exposes the scroll
//! offset, item geometry, and selection the paint layer reads.
//!
//! # State Machine
//!
//! `Idle → Touching → { Idle (click resolved) | Flinging }`
//!
//! - **Down** aborts any in-flight motion and snapshots the gesture.
//! - **Move** re-classifies the gesture on every event: within the touch
//!   slop it stays a potential click; beyond it it is a drag and the scroll
//!   offset tracks the pointer directly, without bounds clamping.
//! - **Up** resolves a click at the tap position, starts a fling when the
//!   trailing-window velocity clears the threshold, or resolves at the
//!   viewport center otherwise.
//! - **Cancel** is the slow-release branch with the click classification
//!   forced off: resolve at the viewport center, never fling.
//!
//! A fling converges to a discrete selection through the frame driver: the
//! tick that completes the motion (with no finger down) resolves the item
//! nearest the viewport center, which in turn starts the centering
//! correction.
//!
//! # Invariants
//!
//! 1. Click and drag never both resolve for one down→up cycle; the
//!    classification at the moment of release wins.
//! 2. At most one motion is in flight; down, fling, and centering each
//!    supersede whatever was running.
//! 3. The selection listener fires before the stored selection changes, at
//!    most once per actual index change, and never re-enters the widget
//!    (dispatch happens under `&mut self`).
//! 4. After any selection settles, the chosen item's center sits within
//!    1 px of the viewport center.
//!
//! # Failure Modes
//!
//! - Content narrower than the viewport: pointer handling is a no-op from
//!   the down event on. Deliberate policy, not an error.
//! - Empty item list: nearest-item resolution is skipped entirely and the
//!   selection stays `None`.
//! - Out-of-range indices and unmatched labels: rejected with no state
//!   change and no listener call.

use std::time::Duration;

use bitflags::bitflags;
use roller_core::event::{PointerEvent, PointerPhase};
use roller_core::geometry::Size;
use roller_core::motion::Scroller;
use roller_core::velocity::VelocityTracker;

use crate::layout::{Layout, MonoMeasurer, TextMeasurer};
use crate::style::{Color, EdgeFade, RollerStyle};

/// Centering dead-zone in px. Int/float conversions in hosts keep a settled
/// offset from landing exactly on zero delta; anything inside the dead-zone
/// would otherwise restart a sub-pixel animation every resolution.
const CENTERING_TOLERANCE: f32 = 1.0;

/// Fallback intrinsic width for hosts that ask the widget to size itself.
const PREFERRED_WIDTH: f32 = 150.0;

/// Vertical breathing room around the tallest font in the intrinsic height.
const PREFERRED_VERTICAL_PADDING: f32 = 20.0;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and timings for gesture handling and settling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RollerConfig {
    /// Minimum pointer displacement (px) before a gesture counts as a drag
    /// (default: 8).
    pub touch_slop: f32,
    /// Minimum release velocity (px/s) for a fling (default: 300).
    pub min_fling_velocity: f32,
    /// Constant fling deceleration (px/s², default: 2400).
    pub fling_deceleration: f32,
    /// Duration of the centering correction (default: 250 ms).
    pub centering_duration: Duration,
    /// Trailing window for release-velocity averaging (default: 100 ms).
    pub velocity_window: Duration,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 300.0,
            fling_deceleration: 2400.0,
            centering_duration: Duration::from_millis(250),
            velocity_window: Duration::from_millis(100),
        }
    }
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

bitflags! {
    /// What the host must refresh after an operation.
    ///
    /// `RELAYOUT` asks for a measurement pass; the host answers it by
    /// calling [`Roller::set_viewport`] (which also repaints). `REDRAW`
    /// asks for a repaint only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Signals: u8 {
        /// Repaint with the current geometry.
        const REDRAW = 1 << 0;
        /// Re-run the host layout pass, then repaint.
        const RELAYOUT = 1 << 1;
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Snapshot of one pointer-down→up cycle. Created on down, destroyed on
/// up/cancel.
#[derive(Debug, Clone, Copy)]
struct GestureState {
    /// Scroll offset when the pointer went down.
    start_scroll: f32,
    /// Pointer x when the pointer went down.
    start_x: f32,
    /// Whether the gesture still reads as a click.
    is_click: bool,
}

/// Listener invoked on selection changes with `(new_index, previous)`.
pub type SelectionListener = Box<dyn FnMut(usize, Option<usize>)>;

// ---------------------------------------------------------------------------
// Roller
// ---------------------------------------------------------------------------

/// Horizontally scrollable single-choice selector.
pub struct Roller<M: TextMeasurer = MonoMeasurer> {
    measurer: M,
    labels: Vec<String>,
    layout: Layout,
    style: RollerStyle,
    config: RollerConfig,
    viewport: Size,
    scroll_offset: f32,
    selected: Option<usize>,
    /// Selection deferred until the next layout pass (`set_viewport`).
    pending_selected: Option<usize>,
    gesture: Option<GestureState>,
    scroller: Scroller,
    velocity: VelocityTracker,
    listener: Option<SelectionListener>,
}

impl<M: TextMeasurer> std::fmt::Debug for Roller<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roller")
            .field("items", &self.layout.len())
            .field("selected", &self.selected)
            .field("scroll_offset", &self.scroll_offset)
            .field("touching", &self.gesture.is_some())
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl Roller<MonoMeasurer> {
    /// Create an empty roller with the built-in approximate measurer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_measurer(MonoMeasurer::default())
    }
}

impl Default for Roller<MonoMeasurer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> Roller<M> {
    /// Create an empty roller measuring text through `measurer`.
    #[must_use]
    pub fn with_measurer(measurer: M) -> Self {
        let config = RollerConfig::default();
        Self {
            measurer,
            labels: Vec::new(),
            layout: Layout::empty(),
            style: RollerStyle::default(),
            config,
            viewport: Size::default(),
            scroll_offset: 0.0,
            selected: None,
            pending_selected: None,
            gesture: None,
            scroller: Scroller::new(),
            velocity: VelocityTracker::with_window(config.velocity_window),
            listener: None,
        }
    }

    /// Replace the style at construction time (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: RollerStyle) -> Self {
        self.style = style;
        self.rebuild_layout();
        self
    }

    /// Replace the tuning config at construction time (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RollerConfig) -> Self {
        self.set_config(config);
        self
    }

    // -- data API -----------------------------------------------------------

    /// Replace the item labels. Geometry is rebuilt immediately; a selection
    /// that no longer fits the new list is dropped.
    pub fn set_items<I, S>(&mut self, labels: I) -> Signals
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self.pending_selected = None;
        self.rebuild_layout();
        if let Some(index) = self.selected
            && index >= self.layout.len()
        {
            self.selected = None;
        }
        Signals::RELAYOUT
    }

    /// Replace the item labels and select `index` once the host completes
    /// its next layout pass.
    ///
    /// Centering needs both geometry and the viewport, so the selection is
    /// stashed and consumed by the next [`set_viewport`](Self::set_viewport)
    /// call. An index that does not fit the new list is dropped there.
    pub fn set_items_with_selected<I, S>(&mut self, labels: I, index: usize) -> Signals
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let signals = self.set_items(labels);
        self.pending_selected = Some(index);
        signals
    }

    /// Current item labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Select the item at `index`.
    ///
    /// Returns `None` (no state change, no listener call) when `index` is
    /// out of range. On success returns the signals of the centering
    /// correction; re-selecting the current index still re-centers, which
    /// recovers from any accumulated drift.
    pub fn set_selected(&mut self, index: usize, suppress_listener: bool) -> Option<Signals> {
        if index >= self.layout.len() {
            return None;
        }
        Some(self.apply_selection(index, suppress_listener))
    }

    /// Select the first item whose label equals `label`.
    ///
    /// Returns `None` when no label matches.
    pub fn set_selected_by_label(
        &mut self,
        label: &str,
        suppress_listener: bool,
    ) -> Option<Signals> {
        let index = self.labels.iter().position(|l| l == label)?;
        Some(self.apply_selection(index, suppress_listener))
    }

    /// Currently selected index, if any.
    #[inline]
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Register the selection-changed listener.
    ///
    /// The listener receives `(new_index, previous)` before the stored
    /// selection is updated. It runs while the widget is exclusively
    /// borrowed, so it cannot trigger another selection change from inside
    /// the callback.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(usize, Option<usize>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // -- host boundary ------------------------------------------------------

    /// Record the viewport from the host's layout pass.
    ///
    /// Also the layout-complete notification: a selection deferred by
    /// [`set_items_with_selected`](Self::set_items_with_selected) is applied
    /// here.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Signals {
        self.viewport = Size::new(width, height);
        match self.pending_selected.take() {
            Some(index) if index < self.layout.len() => self.apply_selection(index, false),
            _ => Signals::empty(),
        }
    }

    /// Viewport recorded from the host.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Intrinsic size for hosts that let the widget pick its own
    /// dimensions: a fixed fallback width and the taller of the two fonts
    /// plus vertical breathing room.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        Size::new(
            PREFERRED_WIDTH,
            self.style.normal_size.max(self.style.selected_size) + PREFERRED_VERTICAL_PADDING,
        )
    }

    /// Feed one pointer event through the gesture state machine.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Signals {
        match event.phase {
            PointerPhase::Down => self.on_down(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Up => self.on_up(event),
            PointerPhase::Cancel => self.on_cancel(),
        }
    }

    /// Advance one display frame.
    ///
    /// Ticks the in-flight motion, applies its offset, and — when the
    /// motion finished on this very tick with no finger down — resolves the
    /// selection at the viewport center.
    pub fn on_frame(&mut self, dt: Duration) -> Signals {
        if self.scroller.is_finished() {
            return Signals::empty();
        }
        self.scroll_offset = self.scroller.tick(dt);
        let mut signals = Signals::REDRAW;
        if self.scroller.is_finished() && self.gesture.is_none() {
            signals |= self.resolve_at(self.viewport_center());
        }
        signals
    }

    /// Whether no motion is in flight and no finger is down.
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scroller.is_finished() && self.gesture.is_none()
    }

    /// Current scroll offset of the viewport over the content.
    #[inline]
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Current item geometry.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Edge fade description for the current viewport.
    #[must_use]
    pub fn edge_fade(&self) -> EdgeFade {
        self.style.edge_fade(self.viewport.width)
    }

    // -- configuration surface ----------------------------------------------

    /// Current style.
    #[inline]
    #[must_use]
    pub const fn style(&self) -> &RollerStyle {
        &self.style
    }

    /// Current tuning config.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// Replace the tuning config.
    pub fn set_config(&mut self, config: RollerConfig) {
        self.config = config;
        self.velocity = VelocityTracker::with_window(config.velocity_window);
    }

    /// Replace the whole style; rebuilds geometry.
    pub fn set_style(&mut self, style: RollerStyle) -> Signals {
        self.style = style;
        self.rebuild_layout();
        Signals::RELAYOUT
    }

    /// Text color of unselected items.
    pub fn set_normal_color(&mut self, color: Color) -> Signals {
        self.style.normal_color = color;
        Signals::REDRAW
    }

    /// Text color of the selected item.
    pub fn set_selected_color(&mut self, color: Color) -> Signals {
        self.style.selected_color = color;
        Signals::REDRAW
    }

    /// Base color of the edge fade bands.
    pub fn set_shader_color(&mut self, color: Color) -> Signals {
        self.style.shader_color = color;
        Signals::REDRAW
    }

    /// Whether to draw the top/bottom border lines.
    pub fn set_show_edge_line(&mut self, show: bool) -> Signals {
        self.style.show_edge_line = show;
        Signals::REDRAW
    }

    /// Font size of unselected items; invalidates geometry.
    pub fn set_normal_size(&mut self, size: f32) -> Signals {
        self.style.normal_size = size;
        self.rebuild_layout();
        Signals::RELAYOUT
    }

    /// Font size of the selected item; invalidates geometry.
    pub fn set_selected_size(&mut self, size: f32) -> Signals {
        self.style.selected_size = size;
        self.rebuild_layout();
        Signals::RELAYOUT
    }

    /// Padding between neighboring items; invalidates geometry.
    pub fn set_text_padding(&mut self, padding: f32) -> Signals {
        self.style.text_padding = padding;
        self.rebuild_layout();
        Signals::RELAYOUT
    }

    // -- gesture handling ---------------------------------------------------

    fn on_down(&mut self, event: PointerEvent) -> Signals {
        // Content that fits the viewport cannot scroll; skip the whole
        // gesture cycle.
        if !self.scrollable() {
            return Signals::empty();
        }
        if !self.scroller.is_finished() {
            self.scroller.abort();
            self.scroll_offset = self.scroller.offset();
        }
        self.velocity.clear();
        self.velocity.push(event.time, event.x);
        self.gesture = Some(GestureState {
            start_scroll: self.scroll_offset,
            start_x: event.x,
            is_click: true,
        });
        Signals::empty()
    }

    fn on_move(&mut self, event: PointerEvent) -> Signals {
        let Some(mut gesture) = self.gesture else {
            return Signals::empty();
        };
        self.velocity.push(event.time, event.x);

        let delta = gesture.start_x - event.x;
        let signals = if delta.abs() < self.config.touch_slop {
            gesture.is_click = true;
            Signals::empty()
        } else {
            gesture.is_click = false;
            // No clamping mid-drag: the first and last items must remain
            // reachable past the bounds; correction happens at gesture end.
            self.scroll_offset = gesture.start_scroll + delta;
            Signals::REDRAW
        };
        self.gesture = Some(gesture);
        signals
    }

    fn on_up(&mut self, event: PointerEvent) -> Signals {
        let Some(gesture) = self.gesture.take() else {
            return Signals::empty();
        };
        self.velocity.push(event.time, event.x);

        if gesture.is_click {
            return self.resolve_at(gesture.start_scroll + event.x);
        }

        let velocity = self.velocity.velocity();
        if velocity.abs() > self.config.min_fling_velocity {
            let (min, max) = self.fling_bounds();
            // Content scrolls against the pointer, hence the negation.
            self.scroller.fling(
                self.scroll_offset,
                -velocity,
                min,
                max,
                self.config.fling_deceleration,
            );
            if self.scroller.is_finished() {
                // Pinned on a bound; there is no motion for the frame
                // driver to complete, so resolve here.
                self.scroll_offset = self.scroller.offset();
                return Signals::REDRAW | self.resolve_at(self.viewport_center());
            }
            Signals::REDRAW
        } else {
            self.resolve_at(self.viewport_center())
        }
    }

    fn on_cancel(&mut self) -> Signals {
        if self.gesture.take().is_none() {
            return Signals::empty();
        }
        self.velocity.clear();
        self.resolve_at(self.viewport_center())
    }

    // -- selection ----------------------------------------------------------

    /// Resolve the item nearest to `focus_x` (content coordinates) and
    /// select it. No-op on an empty layout.
    fn resolve_at(&mut self, focus_x: f32) -> Signals {
        match self.layout.nearest(focus_x) {
            Some(index) => self.apply_selection(index, false),
            None => Signals::empty(),
        }
    }

    /// Commit a selection: notify, store, and start the centering
    /// correction. `index` must be in range.
    fn apply_selection(&mut self, index: usize, suppress_listener: bool) -> Signals {
        debug_assert!(index < self.layout.len());
        let previous = self.selected;
        if !suppress_listener
            && previous != Some(index)
            && let Some(listener) = self.listener.as_mut()
        {
            listener(index, previous);
        }
        #[cfg(feature = "tracing")]
        if previous != Some(index) {
            tracing::debug!(message = "roller.select", from = ?previous, to = index);
        }
        self.selected = Some(index);
        self.center_selected()
    }

    /// Animate the selected item's center onto the viewport center.
    fn center_selected(&mut self) -> Signals {
        let Some(index) = self.selected else {
            return Signals::empty();
        };
        let Some(item) = self.layout.items().get(index) else {
            return Signals::empty();
        };
        let delta = item.center_x() - self.viewport_center();
        if delta.abs() <= CENTERING_TOLERANCE {
            return Signals::empty();
        }
        self.scroller.animate_to(
            self.scroll_offset,
            self.scroll_offset + delta,
            self.config.centering_duration,
        );
        Signals::REDRAW
    }

    // -- helpers ------------------------------------------------------------

    fn rebuild_layout(&mut self) {
        self.layout = Layout::compute(
            &self.labels,
            &self.measurer,
            self.style.normal_font(),
            self.style.selected_font(),
            self.style.text_padding,
        );
    }

    /// Whether the content overflows the viewport at all.
    fn scrollable(&self) -> bool {
        self.layout.content_width() > self.viewport.width
    }

    /// Content-space x of the viewport's center.
    fn viewport_center(&self) -> f32 {
        self.scroll_offset + self.viewport.width / 2.0
    }

    /// Overscroll-tolerant fling bounds: half a viewport past either end.
    fn fling_bounds(&self) -> (f32, f32) {
        let half = self.viewport.width / 2.0;
        (-half, self.layout.content_width() - half)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
