//! # Edge Validation
//!
//! Edge-use analysis for indexed polygon meshes. A clipped convex mesh must
//! stay a closed 2-manifold: every edge is used by exactly two polygons, once
//! in each direction.

use hashbrown::HashMap;

use crate::mesh::PolyMesh;

/// Edge-use summary of a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Distinct undirected edges.
    pub edge_count: usize,
    /// Edges used by a single polygon, as `[low, high]` index pairs.
    pub boundary_edges: Vec<[u32; 2]>,
    /// Edges used by more than two polygons.
    pub overused_edges: Vec<[u32; 2]>,
    /// Directed edges traversed more than once in the same direction.
    pub misoriented_edges: Vec<[u32; 2]>,
    /// Euler characteristic V - E + F (2 for a closed convex polyhedron).
    pub euler_characteristic: i64,
}

impl EdgeReport {
    /// Every edge is shared by exactly two polygon traversals.
    pub fn is_closed(&self) -> bool {
        self.boundary_edges.is_empty() && self.overused_edges.is_empty()
    }

    /// Closed, and neighbouring polygons traverse shared edges in opposite
    /// directions.
    pub fn is_consistently_wound(&self) -> bool {
        self.is_closed() && self.misoriented_edges.is_empty()
    }
}

/// Counts how every edge of the mesh is used.
///
/// # Example
///
/// ```rust
/// use convex_clip::{analyze_edges, create_cuboid};
/// use glam::DVec3;
///
/// let cube = create_cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
/// let report = analyze_edges(&cube);
/// assert!(report.is_consistently_wound());
/// assert_eq!(report.euler_characteristic, 2);
/// ```
pub fn analyze_edges(mesh: &PolyMesh) -> EdgeReport {
    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();

    for polygon in mesh.polygons() {
        let n = polygon.len();
        for i in 0..n {
            let edge = (polygon[i], polygon[(i + 1) % n]);
            *directed.entry(edge).or_default() += 1;
        }
    }

    let mut undirected: HashMap<(u32, u32), usize> = HashMap::new();
    let mut misoriented_edges = Vec::new();
    for (&(a, b), &count) in &directed {
        *undirected.entry((a.min(b), a.max(b))).or_default() += count;
        if count > 1 {
            misoriented_edges.push([a, b]);
        }
    }

    let mut boundary_edges = Vec::new();
    let mut overused_edges = Vec::new();
    for (&(a, b), &count) in &undirected {
        match count {
            1 => boundary_edges.push([a, b]),
            2 => {}
            _ => overused_edges.push([a, b]),
        }
    }

    boundary_edges.sort_unstable();
    overused_edges.sort_unstable();
    misoriented_edges.sort_unstable();

    let vertices = mesh.point_count() as i64;
    let edges = undirected.len() as i64;
    let faces = mesh.polygon_count() as i64;

    EdgeReport {
        edge_count: undirected.len(),
        boundary_edges,
        overused_edges,
        misoriented_edges,
        euler_characteristic: vertices - edges + faces,
    }
}
