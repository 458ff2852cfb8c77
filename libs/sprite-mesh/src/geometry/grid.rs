//! # Scratch Grid and Quad Emission
//!
//! The 9-slice layout is a 4x4 lattice of breakpoints per axis: outer-min,
//! inner-min, inner-max, outer-max. Radial 360 fills insert the rect center
//! as a fifth breakpoint. Every cell of the lattice becomes one quad.

use crate::mesh::Mesh;
use glam::DVec2;

/// One axis-aligned cell: position rect and matching UV rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub pos_min: DVec2,
    pub pos_max: DVec2,
    pub uv_min: DVec2,
    pub uv_max: DVec2,
}

impl Quad {
    /// True when the position rect has no positive area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pos_max.x - self.pos_min.x <= 0.0 || self.pos_max.y - self.pos_min.y <= 0.0
    }

    /// Corners in emission order with their UVs:
    /// (min, min), (min, max), (max, max), (max, min).
    pub fn corners(&self) -> [(DVec2, DVec2); 4] {
        [
            (self.pos_min, self.uv_min),
            (
                DVec2::new(self.pos_min.x, self.pos_max.y),
                DVec2::new(self.uv_min.x, self.uv_max.y),
            ),
            (self.pos_max, self.uv_max),
            (
                DVec2::new(self.pos_max.x, self.pos_min.y),
                DVec2::new(self.uv_max.x, self.uv_min.y),
            ),
        ]
    }
}

/// Breakpoint lattice shared by the fill paths.
///
/// Owned by one builder and overwritten at the start of every build; only
/// the first four entries are meaningful unless [`ScratchGrid::insert_center`]
/// has been called.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScratchGrid {
    pub vert: [DVec2; 5],
    pub uv: [DVec2; 5],
}

impl ScratchGrid {
    /// Number of cells per axis in the 9-slice layout.
    pub const CELLS: usize = 3;

    /// Quad spanning breakpoints `x..x + 1` and `y..y + 1`.
    #[inline]
    pub fn quad(&self, x: usize, y: usize) -> Quad {
        Quad {
            pos_min: DVec2::new(self.vert[x].x, self.vert[y].y),
            pos_max: DVec2::new(self.vert[x + 1].x, self.vert[y + 1].y),
            uv_min: DVec2::new(self.uv[x].x, self.uv[y].y),
            uv_max: DVec2::new(self.uv[x + 1].x, self.uv[y + 1].y),
        }
    }

    /// Shifts breakpoints to outer-min, inner-min, `center`, inner-max,
    /// outer-max so the lattice splits into four quadrants.
    pub fn insert_center(&mut self, center: DVec2, center_uv: DVec2) {
        self.vert[4] = self.vert[3];
        self.vert[3] = self.vert[2];
        self.vert[2] = center;
        self.uv[4] = self.uv[3];
        self.uv[3] = self.uv[2];
        self.uv[2] = center_uv;
    }

    /// Collapses the inner breakpoints onto the outer ones, leaving a single
    /// cell with the full outer UV range.
    pub fn collapse_inner(&mut self) {
        self.vert[1] = self.vert[0];
        self.vert[2] = self.vert[3];
        self.uv[1] = self.uv[0];
        self.uv[2] = self.uv[3];
    }
}

/// Emits a quad as 4 vertices and 2 triangles fanned from the first vertex.
///
/// Quads without positive width and height are skipped. Returns true if the
/// quad was emitted.
pub fn emit_quad(mesh: &mut Mesh, quad: &Quad, color: [f32; 4]) -> bool {
    if quad.is_degenerate() {
        tracing::trace!(?quad, "skipping zero-area quad");
        return false;
    }

    let start = mesh.vertex_count() as u32;
    for (pos, uv) in quad.corners() {
        mesh.add_vertex(pos, color, uv);
    }
    mesh.add_triangle(start, start + 1, start + 2);
    mesh.add_triangle(start, start + 2, start + 3);
    true
}

/// Emits the cells `xs` x `ys` of the grid.
///
/// When `include_center` is false the middle cell of the 9-slice layout
/// (`x == 1 && y == 1`) is left out.
pub fn emit_grid(
    mesh: &mut Mesh,
    grid: &ScratchGrid,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
    color: [f32; 4],
    include_center: bool,
) {
    for x in xs {
        for y in ys.clone() {
            if !include_center && x == 1 && y == 1 {
                continue;
            }
            emit_quad(mesh, &grid.quad(x, y), color);
        }
    }
}
