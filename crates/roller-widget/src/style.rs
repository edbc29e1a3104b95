#![forbid(unsafe_code)]

//! Paint configuration for the roller: colors, font sizes, padding, and the
//! edge fade description handed to the host's gradient painter.
//!
//! Nothing here draws. [`RollerStyle`] is pure data the host reads when
//! painting, and [`EdgeFade`] describes the gradient band at each viewport
//! edge so partially scrolled-out items blend into the background.

use crate::layout::FontConfig;

/// Fraction of the viewport width covered by each edge fade band.
pub const EDGE_FADE_FRACTION: f32 = 0.2;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A packed ARGB8888 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Color(pub u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Build a color from individual channels.
    #[inline]
    #[must_use]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The same color with the alpha channel zeroed (fully transparent).
    #[inline]
    #[must_use]
    pub const fn with_alpha_cleared(self) -> Self {
        Color(self.0 & 0x00FF_FFFF)
    }

    /// The same color forced opaque when no alpha was supplied.
    ///
    /// Plain RGB values (alpha 0) get alpha FF; anything else is kept.
    #[inline]
    #[must_use]
    pub const fn or_opaque(self) -> Self {
        if self.0 & 0xFF00_0000 == 0 {
            Color(self.0 | 0xFF00_0000)
        } else {
            self
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Visual configuration for the roller.
///
/// Changing a color only needs a repaint; changing a size or the padding
/// invalidates the layout geometry. The widget's setters return the matching
/// signal, so hosts normally mutate through those rather than poking fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RollerStyle {
    /// Text color of unselected items.
    pub normal_color: Color,
    /// Text color of the selected item.
    pub selected_color: Color,
    /// Font size of unselected items, px.
    pub normal_size: f32,
    /// Font size of the selected item, px.
    pub selected_size: f32,
    /// Horizontal padding between neighboring items, px.
    pub text_padding: f32,
    /// Base color of the edge fade bands.
    pub shader_color: Color,
    /// Whether to draw the top/bottom border lines.
    pub show_edge_line: bool,
}

impl Default for RollerStyle {
    fn default() -> Self {
        let normal_size = 14.0;
        Self {
            normal_color: Color::BLACK,
            selected_color: Color::BLACK,
            normal_size,
            selected_size: 1.3 * normal_size,
            text_padding: 10.0,
            shader_color: Color::WHITE,
            show_edge_line: false,
        }
    }
}

impl RollerStyle {
    /// Font configuration for unselected items.
    #[inline]
    #[must_use]
    pub const fn normal_font(&self) -> FontConfig {
        FontConfig::new(self.normal_size)
    }

    /// Font configuration for the selected item.
    #[inline]
    #[must_use]
    pub const fn selected_font(&self) -> FontConfig {
        FontConfig::new(self.selected_size)
    }

    /// Describe the fade band painted at each viewport edge.
    #[must_use]
    pub fn edge_fade(&self, viewport_width: f32) -> EdgeFade {
        let outer = self.shader_color.or_opaque();
        EdgeFade {
            outer,
            inner: outer.with_alpha_cleared(),
            width: viewport_width * EDGE_FADE_FRACTION,
        }
    }
}

/// One edge fade band: a horizontal gradient from `outer` at the viewport
/// edge to `inner` at `width` pixels inward. The same description applies
/// mirrored to both edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFade {
    /// Color at the viewport edge (opaque).
    pub outer: Color,
    /// Color at the inner end of the band (transparent).
    pub inner: Color,
    /// Band width in pixels.
    pub width: f32,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
