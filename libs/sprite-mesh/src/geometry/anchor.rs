//! # Slice Anchoring
//!
//! Pins inner boundaries of a sliced image to the rect center. With an
//! anchor bit set, the inner boundary on that side moves from
//! `edge -/+ border` to `center +/- border`, so the stretchable band hugs the
//! center while the anchored side's border region grows to fill its half.

use crate::geometry::grid::ScratchGrid;
use crate::params::SlicedAnchor;
use crate::sprite::Rect;
use glam::DVec4;

/// Moves the grid's inner breakpoints for every side set in `anchor`.
///
/// `border` is the adjusted border (left, bottom, right, top). Results are
/// clamped into the outer breakpoints and kept ordered.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::{anchor::apply_sliced_anchor, ScratchGrid};
/// use sprite_mesh::{Rect, SlicedAnchor};
/// use glam::{DVec2, DVec4};
///
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let mut grid = ScratchGrid::default();
/// grid.vert[0] = DVec2::ZERO;
/// grid.vert[1] = DVec2::splat(10.0);
/// grid.vert[2] = DVec2::splat(90.0);
/// grid.vert[3] = DVec2::splat(100.0);
///
/// apply_sliced_anchor(&mut grid, &rect, DVec4::splat(10.0), SlicedAnchor::UPPER);
/// assert_eq!(grid.vert[2].y, 60.0);
/// assert_eq!(grid.vert[2].x, 90.0);
/// ```
pub fn apply_sliced_anchor(grid: &mut ScratchGrid, rect: &Rect, border: DVec4, anchor: SlicedAnchor) {
    if anchor.is_empty() {
        return;
    }

    let center = rect.center();
    let (mut inner_min, mut inner_max) = (grid.vert[1], grid.vert[2]);

    if anchor.contains(SlicedAnchor::LEFT) {
        inner_min.x = center.x - border.x;
    }
    if anchor.contains(SlicedAnchor::LOWER) {
        inner_min.y = center.y - border.y;
    }
    if anchor.contains(SlicedAnchor::RIGHT) {
        inner_max.x = center.x + border.z;
    }
    if anchor.contains(SlicedAnchor::UPPER) {
        inner_max.y = center.y + border.w;
    }

    let (outer_min, outer_max) = (grid.vert[0], grid.vert[3]);
    inner_min = inner_min.clamp(outer_min, outer_max.max(outer_min));
    inner_max = inner_max.clamp(inner_min, outer_max.max(inner_min));

    tracing::trace!(?anchor, ?inner_min, ?inner_max, "anchored inner boundary");
    grid.vert[1] = inner_min;
    grid.vert[2] = inner_max;
}
