//! # Sprite Image
//!
//! Host-facing image that owns its inputs and a cached mesh. Setters flag
//! the mesh dirty when a value actually changes; [`SpriteImage::mesh`]
//! rebuilds on the next read.

use crate::builder::{MeshRequest, SpriteMeshBuilder};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::params::{FillMethod, FillParameters, ImageType, SlicedAnchor};
use crate::sprite::{LayoutRect, SpriteFrame};

/// An image with lazy mesh regeneration.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{FillMethod, ImageType, LayoutRect, Rect, SpriteFrame, SpriteImage};
/// use glam::DVec2;
///
/// let mut image = SpriteImage::new(LayoutRect::new(Rect::new(0.0, 0.0, 64.0, 64.0)));
/// image.set_sprite(Some(SpriteFrame::new(DVec2::new(16.0, 16.0))));
/// image.set_image_type(ImageType::Filled);
/// image.set_fill_method(FillMethod::Vertical);
/// image.set_fill_amount(0.25);
///
/// let mesh = image.mesh().unwrap();
/// let (_, max) = mesh.bounding_box();
/// assert!((max.y - 16.0).abs() < 1e-9);
/// assert!(!image.is_dirty());
/// ```
#[derive(Debug)]
pub struct SpriteImage {
    request: MeshRequest,
    builder: SpriteMeshBuilder,
    mesh: Mesh,
    dirty: bool,
}

impl SpriteImage {
    /// Image without a sprite, using default parameters.
    pub fn new(layout: LayoutRect) -> Self {
        Self::with_builder(layout, SpriteMeshBuilder::new())
    }

    pub fn with_builder(layout: LayoutRect, builder: SpriteMeshBuilder) -> Self {
        Self {
            request: MeshRequest::new(None, layout, FillParameters::default()),
            builder,
            mesh: Mesh::new(),
            dirty: true,
        }
    }

    /// Inputs of the next build.
    pub fn request(&self) -> &MeshRequest {
        &self.request
    }

    pub fn params(&self) -> &FillParameters {
        &self.request.params
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces a rebuild on the next [`SpriteImage::mesh`] call.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the mesh, rebuilding it first if any input changed.
    ///
    /// A failed rebuild leaves the image dirty and the previous mesh intact.
    pub fn mesh(&mut self) -> MeshResult<&Mesh> {
        if self.dirty {
            self.builder.build(&self.request, &mut self.mesh)?;
            self.dirty = false;
        }
        Ok(&self.mesh)
    }

    fn update<T: PartialEq>(dirty: &mut bool, field: &mut T, value: T) {
        if *field != value {
            *field = value;
            *dirty = true;
        }
    }

    pub fn set_sprite(&mut self, sprite: Option<SpriteFrame>) {
        Self::update(&mut self.dirty, &mut self.request.sprite, sprite);
    }

    pub fn set_layout(&mut self, layout: LayoutRect) {
        Self::update(&mut self.dirty, &mut self.request.layout, layout);
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        Self::update(&mut self.dirty, &mut self.request.color, color);
    }

    pub fn set_pixels_per_unit(&mut self, pixels_per_unit: f64) {
        Self::update(&mut self.dirty, &mut self.request.pixels_per_unit, pixels_per_unit);
    }

    /// Replaces every parameter at once.
    pub fn set_params(&mut self, params: FillParameters) {
        Self::update(&mut self.dirty, &mut self.request.params, params);
    }

    pub fn set_image_type(&mut self, image_type: ImageType) {
        Self::update(&mut self.dirty, &mut self.request.params.image_type, image_type);
    }

    pub fn set_fill_method(&mut self, method: FillMethod) {
        Self::update(&mut self.dirty, &mut self.request.params.fill_method, method);
    }

    pub fn set_fill_origin(&mut self, origin: u8) {
        Self::update(&mut self.dirty, &mut self.request.params.fill_origin, origin);
    }

    /// Sets the fill amount, clamped to [0, 1].
    pub fn set_fill_amount(&mut self, amount: f64) {
        let amount = amount.clamp(0.0, 1.0);
        Self::update(&mut self.dirty, &mut self.request.params.fill_amount, amount);
    }

    pub fn set_fill_clockwise(&mut self, clockwise: bool) {
        Self::update(&mut self.dirty, &mut self.request.params.fill_clockwise, clockwise);
    }

    pub fn set_fill_keep_angle(&mut self, keep_angle: bool) {
        Self::update(&mut self.dirty, &mut self.request.params.fill_keep_angle, keep_angle);
    }

    pub fn set_fill_center(&mut self, fill_center: bool) {
        Self::update(&mut self.dirty, &mut self.request.params.fill_center, fill_center);
    }

    pub fn set_preserve_aspect(&mut self, preserve_aspect: bool) {
        Self::update(&mut self.dirty, &mut self.request.params.preserve_aspect, preserve_aspect);
    }

    pub fn set_sliced_anchor(&mut self, anchor: SlicedAnchor) {
        Self::update(&mut self.dirty, &mut self.request.params.sliced_anchor, anchor);
    }

    pub fn set_sliced_keep_inner(&mut self, keep_inner: bool) {
        Self::update(&mut self.dirty, &mut self.request.params.sliced_keep_inner, keep_inner);
    }
}
