//! Grid-based point merging for the output mesh.
//!
//! Each point is looked up in its own cell and the 26 neighbours; a point
//! within tolerance of an earlier one reuses that point's index.

use glam::DVec3;
use hashbrown::HashMap;

type Cell = (i64, i64, i64);

/// Assigns indices to points, merging those closer than the tolerance.
pub struct PointMerger {
    cells: HashMap<Cell, Vec<u32>>,
    points: Vec<DVec3>,
    cell_size: f64,
    tolerance: f64,
}

impl PointMerger {
    /// Create an empty merger for the given tolerance.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        // Two tolerances per cell keeps any merge partner in an adjacent cell
        Self {
            cells: HashMap::new(),
            points: Vec::new(),
            cell_size: tolerance * 2.0,
            tolerance,
        }
    }

    #[inline]
    fn cell_coords(&self, p: DVec3) -> Cell {
        #[allow(clippy::cast_possible_truncation)]
        let discretize = |v: f64| (v / self.cell_size).floor() as i64;
        (discretize(p.x), discretize(p.y), discretize(p.z))
    }

    fn find(&self, point: DVec3) -> Option<u32> {
        let (cx, cy, cz) = self.cell_coords(point);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(indices) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    let hit = indices
                        .iter()
                        .copied()
                        .find(|&i| self.points[i as usize].distance(point) < self.tolerance);
                    if hit.is_some() {
                        return hit;
                    }
                }
            }
        }

        None
    }

    /// Index of an existing point within tolerance, or of the newly stored one.
    pub fn insert(&mut self, point: DVec3) -> u32 {
        if let Some(index) = self.find(point) {
            return index;
        }
        let index = self.points.len() as u32;
        self.points.push(point);
        self.cells
            .entry(self.cell_coords(point))
            .or_default()
            .push(index);
        index
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the merger, returning the distinct points in insertion order.
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }
}
