#![forbid(unsafe_code)]

//! Layout geometry: measured item bounds, center coordinates, and total
//! content width.
//!
//! [`Layout::compute`] is a pure function from a label list plus font/padding
//! configuration to an immutable [`Layout`]. The widget rebuilds the layout
//! wholesale whenever labels, either font size, or the padding change; it is
//! never patched in place.
//!
//! Every label is measured with the **larger** of the normal/selected fonts:
//! when the selection grows, only its visual weight changes, never the
//! horizontal position of its neighbors.
//!
//! # Invariants
//!
//! 1. `items[i].center_x` is strictly increasing for positive padding and
//!    non-empty labels.
//! 2. `content_width` equals the rightmost item's right edge plus one
//!    padding.
//! 3. An empty label list produces an empty layout with `content_width`
//!    of 0.
//!
//! # Failure Modes
//!
//! - Zero-width labels (empty strings) are legal; their bounds collapse but
//!   padding still separates the centers.

use roller_core::geometry::{Rect, Size};
use unicode_width::UnicodeWidthStr;

// ---------------------------------------------------------------------------
// Measurement seam
// ---------------------------------------------------------------------------

/// Font description handed to the measurer. Deliberately minimal: the host's
/// text stack resolves family, weight, and shaping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontConfig {
    /// Font size in pixels.
    pub size: f32,
}

impl FontConfig {
    /// Create a font configuration.
    #[inline]
    #[must_use]
    pub const fn new(size: f32) -> Self {
        Self { size }
    }
}

/// Measures the bounding box of a label. Implemented by the host against its
/// real text stack; [`MonoMeasurer`] is the built-in approximation.
pub trait TextMeasurer {
    /// Bounding box of `text` rendered with `font`.
    fn measure(&self, text: &str, font: FontConfig) -> Size;
}

/// Approximate measurer for hosts without font metrics: every display column
/// advances by `advance_ratio × size`, line height equals the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoMeasurer {
    /// Horizontal advance per display column, as a fraction of the font size.
    pub advance_ratio: f32,
}

impl Default for MonoMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasurer for MonoMeasurer {
    fn measure(&self, text: &str, font: FontConfig) -> Size {
        let columns = text.width() as f32;
        Size::new(columns * font.size * self.advance_ratio, font.size)
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// One selectable item: its label, measured bounds, and horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    label: String,
    bounds: Rect,
    center_x: f32,
}

impl Item {
    /// The item's label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Measured bounding box in content coordinates (`y` is always 0;
    /// vertical placement belongs to the painter).
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Horizontal center in content coordinates.
    #[inline]
    #[must_use]
    pub const fn center_x(&self) -> f32 {
        self.center_x
    }
}

/// Immutable item geometry plus total content width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    items: Vec<Item>,
    content_width: f32,
}

impl Layout {
    /// The empty layout.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Measure `labels` and lay them out on a running horizontal cursor.
    ///
    /// For item *i*: `cursor += padding + width_i`, with
    /// `center_x_i = cursor - width_i / 2`; the total content width is the
    /// final cursor plus one trailing padding.
    #[must_use]
    pub fn compute(
        labels: &[String],
        measurer: &impl TextMeasurer,
        normal: FontConfig,
        selected: FontConfig,
        padding: f32,
    ) -> Self {
        if labels.is_empty() {
            return Self::empty();
        }

        let font = if selected.size > normal.size {
            selected
        } else {
            normal
        };

        let mut items = Vec::with_capacity(labels.len());
        let mut cursor = 0.0f32;
        for label in labels {
            let size = measurer.measure(label, font);
            cursor += padding + size.width;
            items.push(Item {
                label: label.clone(),
                bounds: Rect::new(cursor - size.width, 0.0, size.width, size.height),
                center_x: cursor - size.width / 2.0,
            });
        }

        Self {
            items,
            content_width: cursor + padding,
        }
    }

    /// The laid-out items, leftmost first.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the layout holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total content width including leading and trailing padding.
    #[inline]
    #[must_use]
    pub const fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Index of the item whose center lies nearest to `focus_x`.
    ///
    /// Scans left to right with a strict `<`, so an exact tie between two
    /// centers keeps the lower index. `None` on an empty layout.
    #[must_use]
    pub fn nearest(&self, focus_x: f32) -> Option<usize> {
        let mut best = None;
        let mut best_delta = f32::INFINITY;
        for (i, item) in self.items.iter().enumerate() {
            let delta = (item.center_x - focus_x).abs();
            if delta < best_delta {
                best_delta = delta;
                best = Some(i);
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
