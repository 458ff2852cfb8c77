//! # Sprite Mesh Builder
//!
//! Turns a [`MeshRequest`] into quads. One builder owns the scratch grid the
//! fill paths share; `build` takes `&mut self`, so a builder serves one
//! build at a time and separate threads use separate builders.
//!
//! ## Paths
//!
//! ```text
//! Simple  -> one quad over the drawing rect
//! Sliced  -> 9-slice grid, anchor, grid emitter (center optional)
//! Tiled   -> 9-slice grid, interior repeated through TileRepeat
//! Filled  -> 9-slice grid (bordered sprite, no aspect fit) or one cell
//!            over the drawing rect, clipped by a sweep line
//!            (Radial360: four quadrant sweeps around the center)
//! ```

use crate::error::{MeshError, MeshResult};
use crate::geometry::anchor::apply_sliced_anchor;
use crate::geometry::aspect::drawing_rect;
use crate::geometry::border::adjust_borders;
use crate::geometry::clip::{emit_clipped_quad, ClipLine};
use crate::geometry::grid::{emit_grid, emit_quad, Quad, ScratchGrid};
use crate::geometry::radial::{
    horizontal_sweep, quadrant_fill, quadrant_sweep, quadrants, radial180_sweep, radial90_sweep,
    vertical_sweep,
};
use crate::mesh::Mesh;
use crate::params::{FillMethod, FillParameters, ImageType};
use crate::sprite::{LayoutRect, Rect, SpriteFrame};
use crate::tiled::{axis_segments, capped_tile_extent, emit_segments, AxisSegment, RepeatInner, TileRepeat};
use config::constants::{GlobalConfig, DEFAULT_COLOR, DEFAULT_PIXELS_PER_UNIT};
use glam::{DVec2, DVec4};
use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST
// =============================================================================

fn default_pixels_per_unit() -> f64 {
    DEFAULT_PIXELS_PER_UNIT
}

fn default_color() -> [f32; 4] {
    DEFAULT_COLOR
}

/// Everything one build reads.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{FillParameters, LayoutRect, MeshRequest, Rect, SpriteFrame};
/// use glam::DVec2;
///
/// let request = MeshRequest::new(
///     Some(SpriteFrame::new(DVec2::new(32.0, 32.0))),
///     LayoutRect::new(Rect::new(0.0, 0.0, 64.0, 64.0)),
///     FillParameters::simple(),
/// )
/// .with_color([1.0, 0.0, 0.0, 1.0]);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRequest {
    #[serde(default)]
    pub sprite: Option<SpriteFrame>,
    pub layout: LayoutRect,
    #[serde(default)]
    pub params: FillParameters,
    /// Source pixels per destination unit; divides borders, padding and
    /// tile sizes.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f64,
    /// Flat vertex color.
    #[serde(default = "default_color")]
    pub color: [f32; 4],
}

impl MeshRequest {
    pub fn new(sprite: Option<SpriteFrame>, layout: LayoutRect, params: FillParameters) -> Self {
        Self {
            sprite,
            layout,
            params,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            color: DEFAULT_COLOR,
        }
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Rejects inputs that break the build contract.
    ///
    /// Degenerate but finite geometry passes; the builder falls back to a
    /// simple quad for it.
    pub fn validate(&self) -> MeshResult<()> {
        self.params.validate()?;

        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(MeshError::InvalidPixelsPerUnit {
                value: self.pixels_per_unit,
            });
        }
        if !self.layout.original.is_finite() || !self.layout.adjusted.is_finite() {
            return Err(MeshError::non_finite("layout rect"));
        }
        if !self.layout.pivot.is_finite() {
            return Err(MeshError::non_finite("layout pivot"));
        }
        if let Some(sprite) = &self.sprite {
            if !sprite.is_finite() {
                return Err(MeshError::non_finite("sprite frame"));
            }
        }
        if self.color.iter().any(|c| !c.is_finite()) {
            return Err(MeshError::non_finite("color"));
        }
        Ok(())
    }

    /// The sprite when it can drive a sliced, tiled or filled build.
    fn drawable_sprite(&self) -> Option<&SpriteFrame> {
        self.sprite
            .as_ref()
            .filter(|sprite| !sprite.is_degenerate() && !self.layout.adjusted.is_degenerate())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds sprite meshes, reusing its scratch state between calls.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{FillMethod, FillParameters, LayoutRect, Mesh, MeshRequest, Rect, SpriteFrame, SpriteMeshBuilder};
/// use glam::{DVec2, DVec4};
///
/// let sprite = SpriteFrame::new(DVec2::new(32.0, 32.0)).with_border(DVec4::splat(8.0));
/// let request = MeshRequest::new(
///     Some(sprite),
///     LayoutRect::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
///     FillParameters::filled(FillMethod::Horizontal, 0.5),
/// );
///
/// let mut builder = SpriteMeshBuilder::new();
/// let mut mesh = Mesh::new();
/// builder.build(&request, &mut mesh).unwrap();
///
/// let (_, max) = mesh.bounding_box();
/// assert!((max.x - 50.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct SpriteMeshBuilder {
    grid: ScratchGrid,
    config: GlobalConfig,
    tile_repeat: Box<dyn TileRepeat>,
    columns: Vec<AxisSegment>,
    rows: Vec<AxisSegment>,
}

impl Default for SpriteMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteMeshBuilder {
    /// Builder with the default configuration and [`RepeatInner`] tiling.
    pub fn new() -> Self {
        Self::with_config(GlobalConfig::default())
    }

    pub fn with_config(config: GlobalConfig) -> Self {
        Self {
            grid: ScratchGrid::default(),
            config,
            tile_repeat: Box::new(RepeatInner),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Replaces the strategy used to repeat the tiled interior.
    pub fn with_tile_repeat(mut self, tile_repeat: impl TileRepeat + 'static) -> Self {
        self.tile_repeat = Box::new(tile_repeat);
        self
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Clears `mesh` and fills it for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] when the request fails [`MeshRequest::validate`];
    /// `mesh` is left untouched in that case.
    pub fn build(&mut self, request: &MeshRequest, mesh: &mut Mesh) -> MeshResult<()> {
        request.validate()?;
        mesh.clear();

        let params = &request.params;
        match (params.image_type, request.drawable_sprite()) {
            (ImageType::Filled, _) if self.config.is_empty_fill(params.clamped_amount()) => {
                tracing::trace!(amount = params.fill_amount, "fill amount below threshold");
            }
            (_, None) => self.build_fallback(request, mesh),
            (ImageType::Simple, Some(sprite)) => {
                self.build_simple(request, sprite, params.preserve_aspect, mesh)
            }
            (ImageType::Sliced, Some(sprite)) if !sprite.has_border() => {
                self.build_simple(request, sprite, false, mesh)
            }
            (ImageType::Sliced, Some(sprite)) => self.build_sliced(request, sprite, mesh),
            (ImageType::Tiled, Some(sprite)) => self.build_tiled(request, sprite, mesh),
            (ImageType::Filled, Some(sprite)) => self.build_filled(request, sprite, mesh),
        }

        tracing::debug!(
            image_type = ?params.image_type,
            fill_method = ?params.fill_method,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "built sprite mesh"
        );
        Ok(())
    }

    // =========================================================================
    // SIMPLE
    // =========================================================================

    /// Single quad over the adjusted rect, used when there is no usable
    /// sprite or rect.
    fn build_fallback(&self, request: &MeshRequest, mesh: &mut Mesh) {
        let rect = request.layout.adjusted;
        let uv = request
            .sprite
            .map_or(DVec4::new(0.0, 0.0, 1.0, 1.0), |sprite| sprite.outer_uv);
        tracing::trace!(?rect, has_sprite = request.sprite.is_some(), "simple fallback");
        emit_quad(mesh, &rect_quad(&rect, uv), request.color);
    }

    fn build_simple(
        &self,
        request: &MeshRequest,
        sprite: &SpriteFrame,
        preserve: bool,
        mesh: &mut Mesh,
    ) {
        let layout = &request.layout;
        let rect = drawing_rect(sprite, layout.adjusted, layout.pivot, preserve);
        emit_quad(mesh, &rect_quad(&rect, sprite.outer_uv), request.color);
    }

    // =========================================================================
    // SLICED / TILED
    // =========================================================================

    fn build_sliced(&mut self, request: &MeshRequest, sprite: &SpriteFrame, mesh: &mut Mesh) {
        let layout = &request.layout;
        let rect = layout.adjusted;
        let border = self.load_grid(sprite, layout.original.size(), &rect, request.pixels_per_unit);
        apply_sliced_anchor(&mut self.grid, &rect, border, request.params.sliced_anchor);
        emit_grid(
            mesh,
            &self.grid,
            0..ScratchGrid::CELLS,
            0..ScratchGrid::CELLS,
            request.color,
            request.params.fill_center,
        );
    }

    fn build_tiled(&mut self, request: &MeshRequest, sprite: &SpriteFrame, mesh: &mut Mesh) {
        let layout = &request.layout;
        let rect = layout.adjusted;
        self.load_grid(sprite, layout.original.size(), &rect, request.pixels_per_unit);

        let interior = self.grid.vert[2] - self.grid.vert[1];
        let tile = sprite.inner_size() / request.pixels_per_unit;
        let tile = capped_tile_extent(
            self.tile_repeat.as_ref(),
            interior,
            tile,
            self.config.max_tile_quads,
        );

        axis_segments(&self.grid, 0, tile.x, self.tile_repeat.as_ref(), &mut self.columns);
        axis_segments(&self.grid, 1, tile.y, self.tile_repeat.as_ref(), &mut self.rows);
        emit_segments(
            mesh,
            &self.columns,
            &self.rows,
            request.color,
            request.params.fill_center,
        );
    }

    // =========================================================================
    // FILLED
    // =========================================================================

    fn build_filled(&mut self, request: &MeshRequest, sprite: &SpriteFrame, mesh: &mut Mesh) {
        let params = &request.params;
        let layout = &request.layout;
        let amount = params.clamped_amount();

        let rect = if params.preserve_aspect || !sprite.has_border() {
            let drawn = drawing_rect(sprite, layout.adjusted, layout.pivot, params.preserve_aspect);
            self.load_single_cell(&drawn, sprite.outer_uv);
            drawn
        } else {
            let rect = layout.adjusted;
            self.load_grid(sprite, layout.original.size(), &rect, request.pixels_per_unit);
            rect
        };

        if self.config.is_full_fill(amount) {
            emit_grid(
                mesh,
                &self.grid,
                0..ScratchGrid::CELLS,
                0..ScratchGrid::CELLS,
                request.color,
                true,
            );
            return;
        }

        let line = match params.fill_method {
            FillMethod::Radial360 => {
                self.fill_radial360(params, &rect, amount, request.color, mesh);
                return;
            }
            FillMethod::Horizontal => horizontal_sweep(&rect, amount, params.fill_origin),
            FillMethod::Vertical => vertical_sweep(&rect, amount, params.fill_origin),
            FillMethod::Radial90 => radial90_sweep(
                &self.grid,
                &rect,
                amount,
                params.fill_clockwise,
                params.fill_origin,
                params.fill_keep_angle,
            ),
            FillMethod::Radial180 => radial180_sweep(
                &rect,
                amount,
                params.fill_clockwise,
                params.fill_origin,
                params.fill_keep_angle,
            ),
        };
        self.emit_clipped(mesh, 0..ScratchGrid::CELLS, 0..ScratchGrid::CELLS, &line, request.color);
    }

    /// Sweeps the four quadrants around the rect center.
    ///
    /// The center UV sits halfway between the inner breakpoints, which for a
    /// single-cell grid are the outer UV corners.
    fn fill_radial360(
        &mut self,
        params: &FillParameters,
        rect: &Rect,
        amount: f64,
        color: [f32; 4],
        mesh: &mut Mesh,
    ) {
        let half = rect.size() * 0.5;
        let center_uv = (self.grid.uv[1] + self.grid.uv[2]) * 0.5;
        let center = self.grid.vert[0] + half;
        self.grid.insert_center(center, center_uv);

        for quadrant in quadrants() {
            let fill = quadrant_fill(amount, params.fill_clockwise, params.fill_origin, quadrant.index);
            if self.config.is_empty_fill(fill) {
                tracing::trace!(quadrant = quadrant.index, "empty quadrant");
            } else if self.config.is_full_fill(fill) {
                emit_grid(mesh, &self.grid, quadrant.xs, quadrant.ys, color, true);
            } else {
                let line = quadrant_sweep(
                    center,
                    fill,
                    params.fill_clockwise,
                    quadrant.index,
                    params.fill_keep_angle,
                    half,
                );
                self.emit_clipped(mesh, quadrant.xs, quadrant.ys, &line, color);
            }
        }
    }

    fn emit_clipped(
        &self,
        mesh: &mut Mesh,
        xs: std::ops::Range<usize>,
        ys: std::ops::Range<usize>,
        line: &ClipLine,
        color: [f32; 4],
    ) {
        for x in xs {
            for y in ys.clone() {
                emit_clipped_quad(mesh, &self.grid.quad(x, y), color, line, self.config.tolerance);
            }
        }
    }

    // =========================================================================
    // GRID
    // =========================================================================

    /// Loads the 9-slice breakpoints for `rect` and returns the adjusted
    /// border in destination units.
    ///
    /// Sprites without a border collapse the inner breakpoints onto the
    /// outer ones.
    fn load_grid(
        &mut self,
        sprite: &SpriteFrame,
        original_size: DVec2,
        rect: &Rect,
        pixels_per_unit: f64,
    ) -> DVec4 {
        let padding = sprite.padding / pixels_per_unit;
        let border = adjust_borders(sprite.border / pixels_per_unit, original_size, rect.size());

        let grid = &mut self.grid;
        grid.vert[0] = rect.min() + DVec2::new(padding.x, padding.y);
        grid.vert[1] = rect.min() + DVec2::new(border.x, border.y);
        grid.vert[2] = rect.max() - DVec2::new(border.z, border.w);
        grid.vert[3] = rect.max() - DVec2::new(padding.z, padding.w);
        grid.vert[4] = grid.vert[3];

        let (outer, inner) = (sprite.outer_uv, sprite.inner_uv);
        grid.uv[0] = DVec2::new(outer.x, outer.y);
        grid.uv[1] = DVec2::new(inner.x, inner.y);
        grid.uv[2] = DVec2::new(inner.z, inner.w);
        grid.uv[3] = DVec2::new(outer.z, outer.w);
        grid.uv[4] = grid.uv[3];

        if !sprite.has_border() {
            grid.collapse_inner();
        }
        border
    }

    /// Loads one cell spanning `rect` with the `uv` corners.
    fn load_single_cell(&mut self, rect: &Rect, uv: DVec4) {
        let grid = &mut self.grid;
        grid.vert[0] = rect.min();
        grid.vert[3] = rect.max();
        grid.vert[4] = grid.vert[3];
        grid.uv[0] = DVec2::new(uv.x, uv.y);
        grid.uv[3] = DVec2::new(uv.z, uv.w);
        grid.uv[4] = grid.uv[3];
        grid.collapse_inner();
    }
}

fn rect_quad(rect: &Rect, uv: DVec4) -> Quad {
    Quad {
        pos_min: rect.min(),
        pos_max: rect.max(),
        uv_min: DVec2::new(uv.x, uv.y),
        uv_max: DVec2::new(uv.z, uv.w),
    }
}
