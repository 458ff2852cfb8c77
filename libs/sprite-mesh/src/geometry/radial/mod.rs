//! # Sweep Geometry
//!
//! Sweep lines for partial fills. Linear fills use an axis-aligned line
//! across the rect; radial fills rotate a line around a corner, an edge
//! midpoint or (for 360 degree fills) the center of each quadrant.
//!
//! Angles are in degrees; `0` points along +y from the sweep origin and
//! positive angles turn toward +x for corner 0.

use crate::geometry::clip::ClipLine;
use crate::geometry::grid::ScratchGrid;
use crate::sprite::Rect;
use glam::DVec2;
use std::ops::Range;

/// End point of a radial sweep line starting at `start`.
///
/// Odd corners invert the sweep direction so the visual direction stays
/// the same whichever corner the fill starts from. `extent` stretches the
/// unit direction into rect space; pass `DVec2::ONE` to keep the true
/// geometric angle.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::radial::radial_cut_offset;
/// use glam::DVec2;
///
/// // Half of a 90 degree clockwise sweep from the bottom-left corner
/// let end = radial_cut_offset(DVec2::ZERO, 0.5, true, 0, 0.0, 90.0, DVec2::ONE);
/// assert!((end.x - end.y).abs() < 1e-12);
/// ```
pub fn radial_cut_offset(
    start: DVec2,
    fill: f64,
    clockwise: bool,
    corner: u8,
    start_angle: f64,
    max_angle: f64,
    extent: DVec2,
) -> DVec2 {
    let invert = clockwise ^ (corner & 1 == 1);

    let mut t = fill.clamp(0.0, 1.0);
    if !invert {
        t = 1.0 - t;
    }
    let angle = (t * max_angle + start_angle).to_radians();

    let offset = DVec2::new(angle.sin() * extent.x, angle.cos() * extent.y);
    let sign = match (corner & 3, invert) {
        (0, true) | (2, false) => DVec2::new(1.0, 1.0),
        (0, false) | (2, true) => DVec2::new(-1.0, -1.0),
        (1, true) | (3, false) => DVec2::new(-1.0, 1.0),
        _ => DVec2::new(1.0, -1.0),
    };
    start + offset * sign
}

/// Extent used by a sweep: the rect-space extent, or unit when the fill
/// keeps its geometric angle.
#[inline]
pub fn sweep_extent(keep_angle: bool, extent: DVec2) -> DVec2 {
    if keep_angle {
        DVec2::ONE
    } else {
        extent
    }
}

/// Vertical line at `amount` of the rect width, from the left (origin 0)
/// or from the right (origin 1). The kept side faces the origin edge.
pub fn horizontal_sweep(rect: &Rect, amount: f64, origin: u8) -> ClipLine {
    let fill = rect.width * amount;
    if origin == 1 {
        let x = rect.x + rect.width - fill;
        ClipLine::new(DVec2::new(x, rect.y + rect.height), DVec2::new(x, rect.y))
    } else {
        let x = rect.x + fill;
        ClipLine::new(DVec2::new(x, rect.y), DVec2::new(x, rect.y + rect.height))
    }
}

/// Horizontal line at `amount` of the rect height, from the bottom
/// (origin 0) or from the top (origin 1).
pub fn vertical_sweep(rect: &Rect, amount: f64, origin: u8) -> ClipLine {
    let fill = rect.height * amount;
    if origin == 1 {
        let y = rect.y + rect.height - fill;
        ClipLine::new(DVec2::new(rect.x, y), DVec2::new(rect.x + rect.width, y))
    } else {
        let y = rect.y + fill;
        ClipLine::new(DVec2::new(rect.x + rect.width, y), DVec2::new(rect.x, y))
    }
}

/// Quarter sweep around a corner of the grid's outer rect.
///
/// Origins: 0 bottom-left, 1 top-left, 2 top-right, 3 bottom-right.
pub fn radial90_sweep(
    grid: &ScratchGrid,
    rect: &Rect,
    amount: f64,
    clockwise: bool,
    origin: u8,
    keep_angle: bool,
) -> ClipLine {
    let (min, max) = (grid.vert[0], grid.vert[3]);
    let start = match origin {
        0 => min,
        1 => DVec2::new(min.x, max.y),
        2 => max,
        _ => DVec2::new(max.x, min.y),
    };
    let extent = sweep_extent(keep_angle, rect.size());
    let end = radial_cut_offset(start, amount, clockwise, origin, 0.0, 90.0, extent);
    ClipLine::new(start, end)
}

/// Half sweep around the middle of an edge.
///
/// Origins: 0 bottom, 1 left, 2 top, 3 right.
pub fn radial180_sweep(
    rect: &Rect,
    amount: f64,
    clockwise: bool,
    origin: u8,
    keep_angle: bool,
) -> ClipLine {
    let half = rect.size() * 0.5;
    let (start, start_angle, extent) = match origin {
        0 => (
            DVec2::new(rect.x + half.x, rect.y),
            -90.0,
            DVec2::new(half.x, rect.height),
        ),
        1 => (
            DVec2::new(rect.x, rect.y + half.y),
            0.0,
            DVec2::new(rect.width, half.y),
        ),
        2 => (
            DVec2::new(rect.x + half.x, rect.y + rect.height),
            -90.0,
            DVec2::new(half.x, rect.height),
        ),
        _ => (
            DVec2::new(rect.x + rect.width, rect.y + half.y),
            0.0,
            DVec2::new(rect.width, half.y),
        ),
    };
    let extent = sweep_extent(keep_angle, extent);
    let end = radial_cut_offset(start, amount, clockwise, origin, start_angle, 180.0, extent);
    ClipLine::new(start, end)
}

/// One quadrant of a 360 degree fill: its index and the breakpoint ranges
/// it covers in a grid with an inserted center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrant {
    pub index: u8,
    pub xs: Range<usize>,
    pub ys: Range<usize>,
}

/// Quadrants in sweep order: bottom-left, top-left, top-right, bottom-right.
pub fn quadrants() -> [Quadrant; 4] {
    [
        Quadrant { index: 0, xs: 0..2, ys: 0..2 },
        Quadrant { index: 1, xs: 0..2, ys: 2..4 },
        Quadrant { index: 2, xs: 2..4, ys: 2..4 },
        Quadrant { index: 3, xs: 2..4, ys: 0..2 },
    ]
}

/// Fraction of `quadrant` covered by a 360 degree fill, clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::radial::quadrant_fill;
///
/// let fills: Vec<f64> = (0..4).map(|q| quadrant_fill(0.5, true, 0, q)).collect();
/// assert_eq!(fills, vec![1.0, 1.0, 0.0, 0.0]);
/// ```
pub fn quadrant_fill(amount: f64, clockwise: bool, origin: u8, quadrant: u8) -> f64 {
    let offset = f64::from((quadrant + origin) % 4);
    let val = if clockwise {
        amount * 4.0 - offset
    } else {
        amount * 4.0 - (3.0 - offset)
    };
    val.clamp(0.0, 1.0)
}

/// Sweep line of a partially filled quadrant, rotating around `center`.
pub fn quadrant_sweep(
    center: DVec2,
    fill: f64,
    clockwise: bool,
    quadrant: u8,
    keep_angle: bool,
    half_size: DVec2,
) -> ClipLine {
    let extent = sweep_extent(keep_angle, half_size);
    let end = radial_cut_offset(center, fill, clockwise, quadrant, -180.0, 90.0, extent);
    ClipLine::new(center, end)
}

#[cfg(test)]
mod tests;
