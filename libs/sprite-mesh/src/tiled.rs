//! # Tiled Interior
//!
//! Tiled images keep the 9-slice borders but repeat the interior instead of
//! stretching it. Each axis of the scratch grid is turned into a list of
//! segments: the min border, the repeated interior tiles and the max border.
//! Quads are the cross product of column and row segments.
//!
//! How the interior span is cut into tiles is behind the [`TileRepeat`]
//! trait; [`RepeatInner`] is the default.

use crate::geometry::grid::{emit_quad, Quad, ScratchGrid};
use crate::mesh::Mesh;
use glam::DVec2;
use std::fmt::Debug;

/// One interval of a grid axis with its texture range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub pos_min: f64,
    pub pos_max: f64,
    pub uv_min: f64,
    pub uv_max: f64,
    /// True for segments cut from the interior span.
    pub interior: bool,
}

impl AxisSegment {
    /// Span covered by the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.pos_max - self.pos_min
    }
}

/// Expands an interior span into repeated tiles.
///
/// Implementations push segments covering `span` in increasing position
/// order and mark every pushed segment as interior.
pub trait TileRepeat: Debug + Send + Sync {
    /// Appends the tiles of `span` to `out`.
    fn repeat(&self, span: AxisSegment, tile_extent: f64, out: &mut Vec<AxisSegment>);

    /// Number of tiles `repeat` produces for a span of `length`.
    fn tile_count(&self, length: f64, tile_extent: f64) -> usize {
        if length <= 0.0 || tile_extent <= 0.0 {
            1
        } else {
            (length / tile_extent).ceil() as usize
        }
    }
}

/// Repeats whole tiles from the span's min edge; the last tile is cut short
/// along with its texture range.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::tiled::{AxisSegment, RepeatInner, TileRepeat};
///
/// let span = AxisSegment { pos_min: 0.0, pos_max: 25.0, uv_min: 0.0, uv_max: 1.0, interior: true };
/// let mut out = Vec::new();
/// RepeatInner.repeat(span, 10.0, &mut out);
/// assert_eq!(out.len(), 3);
/// assert_eq!(out[2].uv_max, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatInner;

impl TileRepeat for RepeatInner {
    fn repeat(&self, span: AxisSegment, tile_extent: f64, out: &mut Vec<AxisSegment>) {
        let length = span.length();
        if length <= 0.0 || tile_extent <= 0.0 {
            out.push(AxisSegment { interior: true, ..span });
            return;
        }

        let uv_span = span.uv_max - span.uv_min;
        for i in 0..self.tile_count(length, tile_extent) {
            let pos_min = span.pos_min + i as f64 * tile_extent;
            let pos_max = (pos_min + tile_extent).min(span.pos_max);
            out.push(AxisSegment {
                pos_min,
                pos_max,
                uv_min: span.uv_min,
                uv_max: span.uv_min + uv_span * (pos_max - pos_min) / tile_extent,
                interior: true,
            });
        }
    }
}

/// Grows `tile_extent` uniformly until the interior holds at most
/// `max_tiles` tiles.
pub fn capped_tile_extent(
    repeat: &dyn TileRepeat,
    interior: DVec2,
    tile_extent: DVec2,
    max_tiles: usize,
) -> DVec2 {
    let max_tiles = max_tiles.max(1);
    let mut extent = tile_extent;
    loop {
        let count = repeat
            .tile_count(interior.x, extent.x)
            .saturating_mul(repeat.tile_count(interior.y, extent.y));
        if count <= max_tiles {
            return extent;
        }
        let factor = (count as f64 / max_tiles as f64).sqrt();
        tracing::trace!(count, max_tiles, factor, "growing tile extent");
        extent *= factor;
    }
}

/// Segments of one grid axis (0 = x, 1 = y): min border, tiled interior,
/// max border.
pub fn axis_segments(
    grid: &ScratchGrid,
    axis: usize,
    tile_extent: f64,
    repeat: &dyn TileRepeat,
    out: &mut Vec<AxisSegment>,
) {
    out.clear();
    let segment = |lo: usize, interior: bool| AxisSegment {
        pos_min: grid.vert[lo][axis],
        pos_max: grid.vert[lo + 1][axis],
        uv_min: grid.uv[lo][axis],
        uv_max: grid.uv[lo + 1][axis],
        interior,
    };

    out.push(segment(0, false));
    repeat.repeat(segment(1, true), tile_extent, out);
    out.push(segment(2, false));
}

/// Emits one quad per column/row pair. With `include_center` false, quads
/// whose column and row are both interior are left out.
pub fn emit_segments(
    mesh: &mut Mesh,
    columns: &[AxisSegment],
    rows: &[AxisSegment],
    color: [f32; 4],
    include_center: bool,
) {
    for col in columns {
        for row in rows {
            if !include_center && col.interior && row.interior {
                continue;
            }
            let quad = Quad {
                pos_min: DVec2::new(col.pos_min, row.pos_min),
                pos_max: DVec2::new(col.pos_max, row.pos_max),
                uv_min: DVec2::new(col.uv_min, row.uv_min),
                uv_max: DVec2::new(col.uv_max, row.uv_max),
            };
            emit_quad(mesh, &quad, color);
        }
    }
}
