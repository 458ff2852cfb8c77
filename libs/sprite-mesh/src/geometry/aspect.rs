//! # Drawing Dimensions
//!
//! Where the simple path puts its single quad: the pixel-adjusted rect,
//! optionally shrunk to the sprite's aspect ratio around the layout pivot,
//! then inset by the sprite's transparent padding.

use crate::sprite::{Rect, SpriteFrame};
use glam::{DVec2, DVec4};

/// Shrinks `rect` along one axis so its aspect ratio matches `sprite_size`.
///
/// The removed space is distributed according to `pivot`: a pivot of 0 keeps
/// the min edge in place, 1 keeps the max edge, 0.5 centers the result.
/// Zero-area sprites and rects are returned unchanged.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::aspect::preserve_aspect;
/// use sprite_mesh::Rect;
/// use glam::DVec2;
///
/// let fitted = preserve_aspect(
///     Rect::new(0.0, 0.0, 200.0, 100.0),
///     DVec2::new(32.0, 32.0),
///     DVec2::splat(0.5),
/// );
/// assert_eq!(fitted, Rect::new(50.0, 0.0, 100.0, 100.0));
/// ```
pub fn preserve_aspect(rect: Rect, sprite_size: DVec2, pivot: DVec2) -> Rect {
    if sprite_size.x <= 0.0 || sprite_size.y <= 0.0 || rect.is_degenerate() {
        return rect;
    }

    let sprite_ratio = sprite_size.x / sprite_size.y;
    let rect_ratio = rect.width / rect.height;
    let mut fitted = rect;

    if sprite_ratio > rect_ratio {
        fitted.height = rect.width / sprite_ratio;
        fitted.y += (rect.height - fitted.height) * pivot.y;
    } else {
        fitted.width = rect.height * sprite_ratio;
        fitted.x += (rect.width - fitted.width) * pivot.x;
    }
    fitted
}

/// Padding as fractions of the sprite: (left, bottom, 1 - right, 1 - top).
///
/// An axis whose sprite dimension is zero keeps the full `0..1` span.
pub fn normalized_padding(sprite: &SpriteFrame) -> DVec4 {
    let size = sprite.size.round();
    let padding = sprite.padding;
    let (min_x, max_x) = if size.x > 0.0 {
        (padding.x / size.x, (size.x - padding.z) / size.x)
    } else {
        (0.0, 1.0)
    };
    let (min_y, max_y) = if size.y > 0.0 {
        (padding.y / size.y, (size.y - padding.w) / size.y)
    } else {
        (0.0, 1.0)
    };
    DVec4::new(min_x, min_y, max_x, max_y)
}

/// Rect covered by the simple path's quad.
pub fn drawing_rect(sprite: &SpriteFrame, rect: Rect, pivot: DVec2, preserve: bool) -> Rect {
    let span = normalized_padding(sprite);
    let rect = if preserve {
        preserve_aspect(rect, sprite.size, pivot)
    } else {
        rect
    };

    let min = rect.min() + rect.size() * DVec2::new(span.x, span.y);
    let max = rect.min() + rect.size() * DVec2::new(span.z, span.w);
    Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
}
