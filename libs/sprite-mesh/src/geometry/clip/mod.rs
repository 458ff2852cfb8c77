//! # Quad Clipping
//!
//! Clips one grid cell against a sweep line. Corners are classified against
//! the infinite line through the sweep's two points; the polygon that
//! remains on the kept side is fan-triangulated.
//!
//! ## Algorithm
//!
//! ```text
//! for each corner (cyclic, emission order):
//!     side changes from previous corner -> insert edge/line crossing
//!     corner on kept side               -> keep corner
//! ```

use crate::geometry::grid::Quad;
use crate::mesh::Mesh;
use config::constants::approx_zero;
use glam::DVec2;

/// Sweep line through `start` and `end`.
///
/// Points with a non-negative cross product against `end - start` lie on
/// the kept side (to the left when walking from `start` to `end`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipLine {
    pub start: DVec2,
    pub end: DVec2,
}

impl ClipLine {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Signed cross product of the line direction against `point - start`.
    #[inline]
    pub fn side(&self, point: DVec2) -> f64 {
        (self.end - self.start).perp_dot(point - self.start)
    }

    /// True if `point` is on the kept side.
    #[inline]
    pub fn keeps(&self, point: DVec2) -> bool {
        self.side(point) >= 0.0
    }

    /// Crossing of the line with the edge `from -> to`.
    ///
    /// Returns `None` when the two are exactly parallel or when the crossing
    /// falls outside the edge.
    pub fn intersect_edge(&self, from: DVec2, to: DVec2) -> Option<DVec2> {
        let dir = self.end - self.start;
        let edge = to - from;
        let denom = dir.perp_dot(edge);
        if denom == 0.0 {
            return None;
        }

        let t = (from - self.start).perp_dot(dir) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(from + edge * t)
    }
}

/// Polygon left after clipping a quad: at most the four corners plus one
/// crossing per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedPolygon {
    points: [(DVec2, DVec2); 8],
    len: usize,
}

impl ClippedPolygon {
    fn new() -> Self {
        Self {
            points: [(DVec2::ZERO, DVec2::ZERO); 8],
            len: 0,
        }
    }

    fn push(&mut self, position: DVec2, uv: DVec2) {
        self.points[self.len] = (position, uv);
        self.len += 1;
    }

    /// `(position, uv)` pairs in winding order.
    pub fn as_slice(&self) -> &[(DVec2, DVec2)] {
        &self.points[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unsigned shoelace area of the polygon.
    pub fn area(&self) -> f64 {
        let points = self.as_slice();
        let twice: f64 = (0..points.len())
            .map(|i| points[i].0.perp_dot(points[(i + 1) % points.len()].0))
            .sum();
        twice.abs() * 0.5
    }
}

/// Texture coordinate of a crossing on the edge `last -> cur`.
///
/// Each axis interpolates independently along the edge; an axis the edge
/// does not move along takes `cur_uv`'s component. Movement is measured
/// relative to the coordinates' magnitude, so tiny cells still interpolate.
pub fn crossing_uv(
    crossing: DVec2,
    cur: DVec2,
    last: DVec2,
    cur_uv: DVec2,
    last_uv: DVec2,
    tolerance: f64,
) -> DVec2 {
    let axis = |x: f64, c: f64, l: f64, cu: f64, lu: f64| {
        let d = c - l;
        if d.abs() <= tolerance * c.abs().max(l.abs()) {
            cu
        } else {
            (cu - lu) * (x - l) / d + lu
        }
    };
    DVec2::new(
        axis(crossing.x, cur.x, last.x, cur_uv.x, last_uv.x),
        axis(crossing.y, cur.y, last.y, cur_uv.y, last_uv.y),
    )
}

/// Clips `quad` against `line` without emitting anything.
pub fn clip_quad(quad: &Quad, line: &ClipLine, tolerance: f64) -> ClippedPolygon {
    let corners = quad.corners();
    let kept = corners.map(|(pos, _)| line.keeps(pos));
    let mut polygon = ClippedPolygon::new();

    for i in 0..4 {
        let prev = (i + 3) % 4;
        let (cur, cur_uv) = corners[i];
        let (last, last_uv) = corners[prev];

        if kept[i] != kept[prev] {
            if let Some(crossing) = line.intersect_edge(last, cur) {
                let uv = crossing_uv(crossing, cur, last, cur_uv, last_uv, tolerance);
                polygon.push(crossing, uv);
            }
        }
        if kept[i] {
            polygon.push(cur, cur_uv);
        }
    }

    polygon
}

/// Emits the part of `quad` on the kept side of `line`.
///
/// Degenerate quads emit nothing, as do polygons with fewer than three
/// vertices or no area (a line lying on a quad edge leaves only that edge).
/// Returns the number of vertices emitted.
pub fn emit_clipped_quad(
    mesh: &mut Mesh,
    quad: &Quad,
    color: [f32; 4],
    line: &ClipLine,
    tolerance: f64,
) -> usize {
    if quad.is_degenerate() {
        tracing::trace!(?quad, "skipping zero-area quad");
        return 0;
    }

    let polygon = clip_quad(quad, line, tolerance);
    if polygon.len() < 3 {
        return 0;
    }
    let quad_size = quad.pos_max - quad.pos_min;
    if approx_zero(polygon.area(), tolerance * quad_size.x * quad_size.y) {
        tracing::trace!(?quad, "skipping collapsed clip polygon");
        return 0;
    }

    let start = mesh.vertex_count() as u32;
    for &(pos, uv) in polygon.as_slice() {
        mesh.add_vertex(pos, color, uv);
    }
    for i in 1..polygon.len() as u32 - 1 {
        mesh.add_triangle(start, start + i, start + i + 1);
    }
    polygon.len()
}
