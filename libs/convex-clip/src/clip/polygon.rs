//! # Polygon Set
//!
//! Working representation of the mesh while it is being clipped: polygons
//! hold vertex coordinates rather than indices, so clipping never has to
//! renumber shared points.

use glam::DVec3;

use super::merge::PointMerger;
use super::tolerance::Tolerance;
use crate::error::{ClipError, ClipResult};
use crate::mesh::PolyMesh;

// =============================================================================
// POLYGON
// =============================================================================

/// A closed loop of vertices. Vertex order sets the winding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
}

impl Polygon {
    /// Create polygon from vertices.
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self { vertices }
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// An empty polygon has been clipped away entirely.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the edges `(v[i], v[i + 1])`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Reverse the winding in place.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Newell normal (unnormalized).
    pub fn normal(&self) -> DVec3 {
        self.edges().map(|(a, b)| a.cross(b)).sum()
    }
}

impl From<Vec<DVec3>> for Polygon {
    fn from(vertices: Vec<DVec3>) -> Self {
        Self::new(vertices)
    }
}

// =============================================================================
// POLYGON SET
// =============================================================================

/// The mesh in progress: an ordered collection of polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Create a set from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Copies every polygon of an indexed mesh out as vertex coordinates.
    ///
    /// # Errors
    ///
    /// `ClipError::PointOutOfRange` if a polygon index exceeds the point
    /// array.
    pub fn from_mesh(mesh: &PolyMesh) -> ClipResult<Self> {
        let points = mesh.points();
        let polygons = mesh
            .polygons()
            .iter()
            .enumerate()
            .map(|(polygon, indices)| {
                indices
                    .iter()
                    .map(|&index| {
                        points
                            .get(index as usize)
                            .copied()
                            .ok_or(ClipError::PointOutOfRange {
                                polygon,
                                index,
                                count: points.len(),
                            })
                    })
                    .collect::<ClipResult<Vec<_>>>()
                    .map(Polygon::new)
            })
            .collect::<ClipResult<Vec<_>>>()?;

        Ok(Self { polygons })
    }

    /// Get the polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// True if no polygons remain.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Append a polygon (used for caps).
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Replaces the set with the non-empty polygons of `polygons`.
    pub fn replace_with(&mut self, polygons: impl IntoIterator<Item = Polygon>) {
        self.polygons = polygons.into_iter().filter(|p| !p.is_empty()).collect();
    }

    /// Converts back to an indexed mesh, merging points within tolerance.
    ///
    /// Merging can make consecutive indices of a polygon equal; those
    /// collapse, and a polygon left with fewer than three distinct indices
    /// is dropped.
    pub fn to_mesh(&self, tolerance: &Tolerance) -> PolyMesh {
        let mut merger = PointMerger::new(tolerance.value());
        let mut polygons = Vec::with_capacity(self.polygons.len());

        for polygon in &self.polygons {
            let mut indices: Vec<u32> = Vec::with_capacity(polygon.len());
            for &vertex in polygon.vertices() {
                let index = merger.insert(vertex);
                if indices.last() != Some(&index) {
                    indices.push(index);
                }
            }
            while indices.len() > 1 && indices.first() == indices.last() {
                indices.pop();
            }
            if indices.len() >= 3 {
                polygons.push(indices);
            } else {
                log::debug!("dropping polygon collapsed to {} points by merging", indices.len());
            }
        }

        PolyMesh::from_parts(merger.into_points(), polygons)
    }
}

// =============================================================================
// TESTS
// =============================================================================
