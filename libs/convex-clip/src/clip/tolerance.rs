//! # Tolerance
//!
//! Scale-relative epsilon derived once from the input mesh.

use config::constants::ClipConfig;
use glam::DVec3;

use crate::mesh::bounds_of;

/// Numeric tolerance for one clipping run.
///
/// Governs cap point matching, output point merging, and (scaled by the
/// dead-zone factor) snapping of near-zero signed distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    value: f64,
    dead_zone: f64,
}

impl Tolerance {
    /// Tolerance for a point cloud: bounding-box diagonal times the scale.
    pub fn from_points(points: &[DVec3], config: &ClipConfig) -> Self {
        let (min, max) = bounds_of(points);
        Self::new(config.tolerance_for_diagonal((max - min).length()), config)
    }

    /// Tolerance with an explicit value.
    pub fn new(value: f64, config: &ClipConfig) -> Self {
        Self {
            value,
            dead_zone: value * config.dead_zone_factor,
        }
    }

    /// The tolerance itself.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Half-width of the band around the plane snapped to zero.
    #[inline]
    pub fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    /// Snaps a signed distance inside the dead zone to exactly zero.
    #[inline]
    pub fn snap(&self, distance: f64) -> f64 {
        if distance.abs() < self.dead_zone {
            0.0
        } else {
            distance
        }
    }

    /// True if two points are closer than the tolerance.
    #[inline]
    pub fn coincident(&self, a: DVec3, b: DVec3) -> bool {
        a.distance(b) < self.value
    }
}
