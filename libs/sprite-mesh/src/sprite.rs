//! # Sprite and Layout Descriptions
//!
//! Read-only inputs of a build: the sprite asset's slicing data and the
//! destination rect the mesh must fill.
//!
//! Four-component insets use `glam::DVec4` in left, bottom, right, top order
//! (`x`, `y`, `z`, `w`). UV rects use the same layout: `(min.x, min.y,
//! max.x, max.y)`.

use config::constants::DEFAULT_PIVOT;
use glam::{DVec2, DVec4};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in destination units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rect from its minimum corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x + self.width, self.y + self.height)
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.min() + self.size() * 0.5
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Destination rect of a build.
///
/// `original` is the layout rect before pixel snapping; `adjusted` is the
/// pixel-adjusted rect the mesh actually fills (possibly marginally larger).
/// Borders are rescaled by the ratio between the two.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{LayoutRect, Rect};
///
/// let layout = LayoutRect::new(Rect::new(0.0, 0.0, 100.0, 50.0));
/// assert_eq!(layout.original, layout.adjusted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub original: Rect,
    pub adjusted: Rect,
    /// Normalized pivot used to place an aspect-fitted rect.
    #[serde(default = "default_pivot")]
    pub pivot: DVec2,
}

fn default_pivot() -> DVec2 {
    DVec2::from_array(DEFAULT_PIVOT)
}

impl LayoutRect {
    /// Layout whose pixel-adjusted rect equals the layout rect.
    pub fn new(rect: Rect) -> Self {
        Self {
            original: rect,
            adjusted: rect,
            pivot: default_pivot(),
        }
    }

    /// Layout with a distinct pixel-adjusted rect.
    pub fn with_adjusted(original: Rect, adjusted: Rect) -> Self {
        Self {
            original,
            adjusted,
            pivot: default_pivot(),
        }
    }

    /// Replaces the pivot.
    pub fn pivot(mut self, pivot: DVec2) -> Self {
        self.pivot = pivot;
        self
    }
}

impl Default for LayoutRect {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

/// Slicing data of a sprite asset.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::SpriteFrame;
/// use glam::{DVec2, DVec4};
///
/// let sprite = SpriteFrame::new(DVec2::new(64.0, 64.0))
///     .with_border(DVec4::splat(16.0));
/// assert!(sprite.has_border());
/// assert_eq!(sprite.inner_uv, DVec4::new(0.25, 0.25, 0.75, 0.75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Source rect size in pixels.
    pub size: DVec2,
    /// Border inset in pixels (left, bottom, right, top).
    #[serde(default)]
    pub border: DVec4,
    /// Transparent padding trimmed by the packer, in pixels.
    #[serde(default)]
    pub padding: DVec4,
    /// UV rect of the whole sprite.
    pub outer_uv: DVec4,
    /// UV rect of the area inside the border.
    pub inner_uv: DVec4,
}

impl SpriteFrame {
    /// Sprite covering the full texture, without border or padding.
    pub fn new(size: DVec2) -> Self {
        let full = DVec4::new(0.0, 0.0, 1.0, 1.0);
        Self {
            size,
            border: DVec4::ZERO,
            padding: DVec4::ZERO,
            outer_uv: full,
            inner_uv: full,
        }
    }

    /// Sets the border and derives the inner UV rect from it.
    pub fn with_border(mut self, border: DVec4) -> Self {
        self.border = border;
        self.derive_inner_uv();
        self
    }

    /// Sets the padding inset.
    pub fn with_padding(mut self, padding: DVec4) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the outer UV rect (an atlas sub-region); the inner UV rect is
    /// re-derived from the current border.
    pub fn with_outer_uv(mut self, outer_uv: DVec4) -> Self {
        self.outer_uv = outer_uv;
        self.derive_inner_uv();
        self
    }

    /// Interpolates the border's pixel insets inside the outer UV rect.
    fn derive_inner_uv(&mut self) {
        if !self.has_border() {
            self.inner_uv = self.outer_uv;
            return;
        }
        let outer_min = DVec2::new(self.outer_uv.x, self.outer_uv.y);
        let outer_span = DVec2::new(self.outer_uv.z, self.outer_uv.w) - outer_min;
        let ratio = |px: f64, size: f64| if size > 0.0 { px / size } else { 0.0 };
        self.inner_uv = DVec4::new(
            outer_min.x + outer_span.x * ratio(self.border.x, self.size.x),
            outer_min.y + outer_span.y * ratio(self.border.y, self.size.y),
            outer_min.x + outer_span.x * (1.0 - ratio(self.border.z, self.size.x)),
            outer_min.y + outer_span.y * (1.0 - ratio(self.border.w, self.size.y)),
        );
    }

    /// True when any border component is nonzero.
    #[inline]
    pub fn has_border(&self) -> bool {
        self.border.length_squared() > 0.0
    }

    /// True when either source dimension is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.size.is_finite()
            && self.border.is_finite()
            && self.padding.is_finite()
            && self.outer_uv.is_finite()
            && self.inner_uv.is_finite()
    }

    /// Size of the region between the borders, in source pixels.
    pub fn inner_size(&self) -> DVec2 {
        self.size - DVec2::new(self.border.x + self.border.z, self.border.y + self.border.w)
    }
}
