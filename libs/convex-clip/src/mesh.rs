//! # Polygon Mesh
//!
//! Indexed polygon mesh used as clipping input and output.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An indexed mesh of points and variable-length polygons.
///
/// Polygons are closed loops of point indices; the last index connects back
/// to the first. Counter-clockwise order seen from outside gives an outward
/// normal.
///
/// # Example
///
/// ```rust
/// use convex_clip::PolyMesh;
/// use glam::DVec3;
///
/// let mut mesh = PolyMesh::new();
/// let a = mesh.add_point(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_point(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_polygon(vec![a, b, c]);
/// assert_eq!(mesh.polygon_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    /// Point positions
    points: Vec<DVec3>,
    /// Polygon loops as indices into `points`
    polygons: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(point_count: usize, polygon_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            polygons: Vec::with_capacity(polygon_count),
        }
    }

    /// Creates a mesh from existing point and polygon arrays.
    ///
    /// Indices are not checked here; clipping validates them on ingestion.
    pub fn from_parts(points: Vec<DVec3>, polygons: Vec<Vec<u32>>) -> Self {
        Self { points, polygons }
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the mesh has no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Adds a point and returns its index.
    pub fn add_point(&mut self, position: DVec3) -> u32 {
        let index = self.points.len() as u32;
        self.points.push(position);
        index
    }

    /// Adds a polygon by point indices.
    pub fn add_polygon(&mut self, indices: Vec<u32>) {
        self.polygons.push(indices);
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns a reference to the polygons.
    #[inline]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: u32) -> DVec3 {
        self.points[index as usize]
    }

    /// Returns the polygon at the given index.
    #[inline]
    pub fn polygon(&self, index: usize) -> &[u32] {
        &self.polygons[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        bounds_of(&self.points)
    }

    /// Newell normal of a polygon (unnormalized, length = 2 × area).
    ///
    /// Robust for non-planar or slightly concave loops; zero for
    /// degenerate ones.
    pub fn polygon_normal(&self, index: usize) -> DVec3 {
        let polygon = &self.polygons[index];
        let mut normal = DVec3::ZERO;
        for (i, &a) in polygon.iter().enumerate() {
            let b = polygon[(i + 1) % polygon.len()];
            normal += self.point(a).cross(self.point(b));
        }
        normal
    }

    /// Fan-triangulates every polygon.
    ///
    /// Valid for the convex polygons clipping produces; winding is kept.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::new();
        for polygon in &self.polygons {
            if polygon.len() < 3 {
                continue;
            }
            for i in 1..polygon.len() - 1 {
                triangles.push([polygon[0], polygon[i], polygon[i + 1]]);
            }
        }
        triangles
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }
}

/// Axis-aligned bounds of a point cloud, (ZERO, ZERO) when empty.
pub(crate) fn bounds_of(points: &[DVec3]) -> (DVec3, DVec3) {
    let Some((first, rest)) = points.split_first() else {
        return (DVec3::ZERO, DVec3::ZERO);
    };

    rest.iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
}

// =============================================================================
// TESTS
// =============================================================================
