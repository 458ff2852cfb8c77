//! # Mesh Data Structure
//!
//! Output representation of a sprite build: vertices with position, color
//! and texture coordinates, plus triangle indices.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh with per-vertex color and UV.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::Mesh;
/// use glam::DVec2;
///
/// let mut mesh = Mesh::new();
/// let color = [1.0, 1.0, 1.0, 1.0];
/// mesh.add_vertex(DVec2::new(0.0, 0.0), color, DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec2::new(0.0, 1.0), color, DVec2::new(0.0, 1.0));
/// mesh.add_vertex(DVec2::new(1.0, 1.0), color, DVec2::new(1.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (z is always zero)
    positions: Vec<DVec3>,
    /// Vertex colors (RGBA, f32 for GPU)
    colors: Vec<[f32; 4]>,
    /// Texture coordinates
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Removes all vertices and triangles, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
        self.uvs.clear();
        self.triangles.clear();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex on the z = 0 plane and returns its index.
    pub fn add_vertex(&mut self, position: DVec2, color: [f32; 4], uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.extend(0.0));
        self.colors.push(color);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the vertex colors.
    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position of the vertex at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the texture coordinate of the vertex at the given index.
    #[inline]
    pub fn uv(&self, index: u32) -> DVec2 {
        self.uvs[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `(DVec3::ZERO, DVec3::ZERO)` for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for p in &self.positions {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// Sums the area of every triangle.
    ///
    /// Useful for checking how much of a rect a partial fill covers.
    pub fn area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.positions[tri[0] as usize];
                let v1 = self.positions[tri[1] as usize];
                let v2 = self.positions[tri[2] as usize];
                (v1 - v0).cross(v2 - v0).length() * 0.5
            })
            .sum()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Attribute arrays have matching lengths
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len();
        if self.colors.len() != vertex_count || self.uvs.len() != vertex_count {
            return false;
        }

        let vertex_count = vertex_count as u32;
        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];
            if (v1 - v0).cross(v2 - v0).length() < EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            result.push(p.x as f32);
            result.push(p.y as f32);
            result.push(p.z as f32);
        }
        result
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports colors as flattened [r, g, b, a, ...] array.
    pub fn colors_f32(&self) -> Vec<f32> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec2::ZERO, WHITE, DVec2::ZERO);
        mesh.add_vertex(DVec2::X, WHITE, DVec2::X);
        mesh.add_vertex(DVec2::Y, WHITE, DVec2::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec2::new(1.0, 2.0), WHITE, DVec2::new(0.25, 0.75));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.position(0), DVec3::new(1.0, 2.0, 0.0));
        assert_eq!(mesh.uv(0), DVec2::new(0.25, 0.75));
        assert_eq!(mesh.colors()[0], WHITE);
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_clear() {
        let mut mesh = unit_triangle();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.uvs().is_empty());
        assert!(mesh.colors().is_empty());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec2::new(-1.0, -2.0), WHITE, DVec2::ZERO);
        mesh.add_vertex(DVec2::new(4.0, 5.0), WHITE, DVec2::ONE);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 0.0));
    }

    #[test]
    fn test_mesh_area() {
        let mesh = unit_triangle();
        assert!((mesh.area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec2::ZERO, WHITE, DVec2::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec2::ZERO, WHITE, DVec2::ZERO);
        mesh.add_vertex(DVec2::X, WHITE, DVec2::ZERO);
        mesh.add_vertex(DVec2::new(2.0, 0.0), WHITE, DVec2::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_exports() {
        let mesh = unit_triangle();
        assert_eq!(
            mesh.positions_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.colors_f32().len(), 12);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }
}
