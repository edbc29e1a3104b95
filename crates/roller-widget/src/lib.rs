#![forbid(unsafe_code)]

//! Horizontally scrollable single-choice roller selector.
//!
//! A row of labeled items the user drags, flings, or taps; the widget
//! always settles with the chosen item centered in the viewport. Rendering
//! stays with the host: the widget owns gesture classification, fling and
//! centering motion, item geometry, and selection state, and tells the host
//! what to repaint through [`Signals`].
//!
//! # Wiring into a host
//!
//! ```ignore
//! use roller_core::event::PointerEvent;
//! use roller_widget::Roller;
//!
//! let mut roller = Roller::new();
//! roller.set_items(["Mon", "Tue", "Wed", "Thu", "Fri"]);
//! roller.set_viewport(320.0, 48.0);          // from the host layout pass
//! roller.set_selection_listener(|new, previous| {
//!     println!("selected {new}, was {previous:?}");
//! });
//!
//! // Per input event:       roller.on_pointer(PointerEvent::down(x, now));
//! // Per display frame:     roller.on_frame(frame_dt);
//! // When painting:         roller.layout(), roller.scroll_offset(),
//! //                        roller.selected(), roller.edge_fade()
//! ```

pub mod layout;
pub mod roller;
pub mod style;

pub use layout::{FontConfig, Item, Layout, MonoMeasurer, TextMeasurer};
pub use roller::{Roller, RollerConfig, SelectionListener, Signals};
pub use style::{Color, EdgeFade, RollerStyle};
