//! # Border Adjustment
//!
//! Rescales 9-slice border insets so they line up with the pixel-adjusted
//! rect and never overlap.

use glam::{DVec2, DVec4};

/// Fits a border (left, bottom, right, top, in destination units) to the
/// drawn rect.
///
/// Per axis:
/// 1. Scales both insets by `adjusted / original` when the original size is
///    nonzero, so borders follow the pixel-snapped growth of the rect.
/// 2. If the insets then sum to more than the adjusted size, scales them
///    down so they exactly fill it.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::border::adjust_borders;
/// use glam::{DVec2, DVec4};
///
/// let border = adjust_borders(DVec4::splat(40.0), DVec2::splat(50.0), DVec2::splat(50.0));
/// assert_eq!(border, DVec4::splat(25.0));
/// ```
pub fn adjust_borders(border: DVec4, original_size: DVec2, adjusted_size: DVec2) -> DVec4 {
    let mut border = border.to_array();

    for axis in 0..2 {
        // Pixel snapping may have grown the rect; keep borders aligned with it.
        if original_size[axis] != 0.0 {
            let ratio = adjusted_size[axis] / original_size[axis];
            border[axis] *= ratio;
            border[axis + 2] *= ratio;
        }

        let combined = border[axis] + border[axis + 2];
        if adjusted_size[axis] < combined && combined != 0.0 {
            let ratio = adjusted_size[axis] / combined;
            border[axis] *= ratio;
            border[axis + 2] *= ratio;
        }
    }

    DVec4::from_array(border)
}
