#![forbid(unsafe_code)]

//! End-to-end gesture scenarios driven through a simulated host loop.
//!
//! Proves that:
//! 1. A tap session converges to the tapped item centered in the viewport
//! 2. A fling session defers the selection until the motion settles
//! 3. RELAYOUT signals round-trip through the host's layout pass, applying
//!    deferred selections
//! 4. Geometry reconfiguration mid-session keeps the selection coherent
//!
//! Run:
//!   cargo test -p roller-widget --test gesture_scenarios

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use roller_core::event::PointerEvent;
use roller_core::geometry::Size;
use roller_widget::{FontConfig, Roller, Signals, TextMeasurer};
use web_time::Instant;

const FRAME: Duration = Duration::from_millis(16);

/// Fixed-width measurer: every label is 20 px wide, so with the default
/// 10 px padding the centers are 20/50/80/... and content width is
/// `count * 30 + 10`.
struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, _text: &str, font: FontConfig) -> Size {
        Size::new(20.0, font.size)
    }
}

/// Minimal host: owns the clock, honors signals, and counts repaints.
struct Host {
    roller: Roller<FixedMeasurer>,
    viewport: (f32, f32),
    now: Instant,
    repaints: usize,
    layout_passes: usize,
}

impl Host {
    fn new(viewport_width: f32) -> Self {
        Self {
            roller: Roller::with_measurer(FixedMeasurer),
            viewport: (viewport_width, 48.0),
            now: Instant::now(),
            repaints: 0,
            layout_passes: 0,
        }
    }

    /// Honor a signal set the way a host framework would: a relayout runs
    /// the measurement pass (which may itself request a repaint) and always
    /// ends in a repaint.
    fn honor(&mut self, signals: Signals) {
        if signals.contains(Signals::RELAYOUT) {
            self.layout_passes += 1;
            let follow_up = self.roller.set_viewport(self.viewport.0, self.viewport.1);
            self.repaints += 1;
            self.honor(follow_up);
        } else if signals.contains(Signals::REDRAW) {
            self.repaints += 1;
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        let signals = self.roller.on_pointer(event);
        self.honor(signals);
    }

    /// Advance the clock in display frames, ticking the widget each frame.
    fn advance(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME);
            self.now += step;
            let signals = self.roller.on_frame(step);
            self.honor(signals);
            remaining -= step;
        }
    }

    fn run_until_settled(&mut self) {
        for _ in 0..2_000 {
            if self.roller.is_settled() {
                return;
            }
            self.advance(FRAME);
        }
        panic!("roller never settled");
    }

    fn assert_selected_item_centered(&self) {
        let index = self.roller.selected().expect("an item should be selected");
        let center = self.roller.layout().items()[index].center_x();
        let viewport_center = self.roller.scroll_offset() + self.viewport.0 / 2.0;
        assert!(
            (center - viewport_center).abs() <= 1.0 + 1e-3,
            "item {index} center {center} vs viewport center {viewport_center}"
        );
    }
}

fn record_selections(host: &mut Host) -> Rc<RefCell<Vec<(usize, Option<usize>)>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    host.roller.set_selection_listener(move |new, previous| {
        sink.borrow_mut().push((new, previous));
    });
    calls
}

// ============================================================================
// 1. Tap session
// ============================================================================

#[test]
fn tap_session_settles_on_tapped_item() {
    let mut host = Host::new(60.0);
    let calls = record_selections(&mut host);
    let signals = host.roller.set_items(["A", "B", "C"]);
    host.honor(signals);

    let t0 = host.now;
    host.pointer(PointerEvent::down(50.0, t0));
    host.pointer(PointerEvent::up(50.0, t0 + Duration::from_millis(60)));

    assert_eq!(host.roller.selected(), Some(1));
    host.run_until_settled();

    host.assert_selected_item_centered();
    assert_eq!(calls.borrow().as_slice(), &[(1, None)]);
    assert!(host.repaints > 0);
}

// ============================================================================
// 2. Fling session
// ============================================================================

#[test]
fn fling_session_defers_selection_until_motion_settles() {
    let mut host = Host::new(60.0);
    let calls = record_selections(&mut host);
    let signals = host.roller.set_items(["A", "B", "C", "D", "E", "F"]);
    host.honor(signals);

    // Fast leftward swipe: 6 px per 10 ms = 600 px/s.
    let t0 = host.now;
    host.pointer(PointerEvent::down(100.0, t0));
    for step in 1..=4u64 {
        host.pointer(PointerEvent::moved(
            100.0 - 6.0 * step as f32,
            t0 + Duration::from_millis(10 * step),
        ));
    }
    host.pointer(PointerEvent::up(76.0, t0 + Duration::from_millis(40)));

    // Nothing resolved while the fling is in flight.
    assert_eq!(host.roller.selected(), None);
    assert!(calls.borrow().is_empty());

    host.run_until_settled();
    let selected = host.roller.selected().expect("fling must resolve a selection");
    host.assert_selected_item_centered();
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0], (selected, None));

    // The fling scrolled rightward (content dragged left), so the winner
    // sits to the right of where the gesture began.
    assert!(selected >= 1);
}

// ============================================================================
// 3. Deferred selection through the layout pass
// ============================================================================

#[test]
fn deferred_selection_applies_on_host_layout_pass() {
    let mut host = Host::new(60.0);
    let calls = record_selections(&mut host);

    let signals = host.roller.set_items_with_selected(["A", "B", "C"], 2);
    assert_eq!(host.roller.selected(), None);

    // Honoring RELAYOUT runs set_viewport, which applies the pending
    // selection and starts its centering.
    host.honor(signals);
    assert_eq!(host.layout_passes, 1);
    assert_eq!(host.roller.selected(), Some(2));
    assert_eq!(calls.borrow().as_slice(), &[(2, None)]);

    host.run_until_settled();
    host.assert_selected_item_centered();
}

// ============================================================================
// 4. Reconfiguration mid-session
// ============================================================================

#[test]
fn padding_change_relayouts_and_reselect_recenters() {
    let mut host = Host::new(60.0);
    let signals = host.roller.set_items(["A", "B", "C"]);
    host.honor(signals);
    let signals = host.roller.set_selected(1, false).expect("index 1 exists");
    host.honor(signals);
    host.run_until_settled();
    host.assert_selected_item_centered();

    // Widening the padding moves every center; the old offset is stale.
    let signals = host.roller.set_text_padding(30.0);
    assert_eq!(signals, Signals::RELAYOUT);
    host.honor(signals);
    assert_eq!(host.roller.layout().content_width(), 3.0 * 50.0 + 30.0);

    // Re-selecting the same index recovers the drift.
    let signals = host.roller.set_selected(1, false).expect("index 1 exists");
    host.honor(signals);
    host.run_until_settled();
    host.assert_selected_item_centered();
    assert_eq!(host.roller.selected(), Some(1));
}
