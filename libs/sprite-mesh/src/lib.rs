//! # Sprite Mesh
//!
//! Quad mesh generation for 2D UI sprites: simple, 9-slice, tiled and
//! partially filled images.
//!
//! ## Architecture
//!
//! ```text
//! SpriteFrame + LayoutRect + FillParameters (MeshRequest)
//!     → SpriteMeshBuilder (scratch grid, fill paths)
//!         → geometry kernels (border, grid, clip, radial, anchor, aspect)
//!     → Mesh (positions, colors, UVs, triangles)
//! ```
//!
//! ## Fill Methods
//!
//! - **Horizontal / Vertical**: one axis-aligned sweep line
//! - **Radial90**: sweep around a corner
//! - **Radial180**: sweep around an edge midpoint
//! - **Radial360**: four quadrant sweeps around the rect center
//!
//! ## Usage
//!
//! ```rust
//! use sprite_mesh::{build_sprite_mesh, FillMethod, FillParameters, LayoutRect, MeshRequest, Rect, SpriteFrame};
//! use glam::{DVec2, DVec4};
//!
//! let sprite = SpriteFrame::new(DVec2::new(64.0, 64.0)).with_border(DVec4::splat(16.0));
//! let request = MeshRequest::new(
//!     Some(sprite),
//!     LayoutRect::new(Rect::new(0.0, 0.0, 200.0, 100.0)),
//!     FillParameters::sliced(),
//! );
//!
//! let mesh = build_sprite_mesh(&request).unwrap();
//! assert_eq!(mesh.vertex_count(), 36);
//! assert_eq!(mesh.triangle_count(), 18);
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod image;
pub mod mesh;
pub mod params;
pub mod sprite;
pub mod tiled;

pub use builder::{MeshRequest, SpriteMeshBuilder};
pub use error::{MeshError, MeshResult};
pub use image::SpriteImage;
pub use mesh::Mesh;
pub use params::{FillMethod, FillParameters, ImageType, SlicedAnchor};
pub use sprite::{LayoutRect, Rect, SpriteFrame};
pub use tiled::{RepeatInner, TileRepeat};

/// Builds a fresh mesh for `request` with a one-off builder.
///
/// Hosts that rebuild often should keep a [`SpriteMeshBuilder`] (or a
/// [`SpriteImage`]) around to reuse its allocations.
pub fn build_sprite_mesh(request: &MeshRequest) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    SpriteMeshBuilder::new().build(request, &mut mesh)?;
    Ok(mesh)
}
