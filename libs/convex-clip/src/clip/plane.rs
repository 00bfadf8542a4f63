//! # Clipping Plane
//!
//! Oriented plane with signed-distance evaluation.

use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PLANE
// =============================================================================

/// A cutting plane defined by an origin point and a unit normal.
///
/// Points with positive signed distance lie on the kept side.
///
/// # Example
///
/// ```rust
/// use convex_clip::ClipPlane;
/// use glam::DVec3;
///
/// // Keep everything with x < 0.25
/// let plane = ClipPlane::new(DVec3::new(0.25, 0.0, 0.0), DVec3::new(-2.0, 0.0, 0.0));
/// assert_eq!(plane.normal(), DVec3::new(-1.0, 0.0, 0.0));
/// assert!(plane.signed_distance(DVec3::ZERO) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipPlane {
    /// Any point on the plane.
    origin: DVec3,
    /// Normal vector (unit length, or zero if given a zero vector).
    normal: DVec3,
}

impl ClipPlane {
    /// Create plane from a point and a normal.
    ///
    /// The normal is normalized; a zero normal stays zero and is rejected by
    /// the clipper as an invalid plane.
    pub fn new(origin: DVec3, normal: DVec3) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
        }
    }

    /// The six inward-facing planes of an axis-aligned box.
    ///
    /// Clipping with all six keeps the inside of `[min, max]`.
    pub fn box_planes(min: DVec3, max: DVec3) -> [ClipPlane; 6] {
        [
            ClipPlane::new(min, DVec3::X),
            ClipPlane::new(max, DVec3::NEG_X),
            ClipPlane::new(min, DVec3::Y),
            ClipPlane::new(max, DVec3::NEG_Y),
            ClipPlane::new(min, DVec3::Z),
            ClipPlane::new(max, DVec3::NEG_Z),
        ]
    }

    /// Get the plane origin.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the plane normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// True if the plane has an orientation.
    pub fn is_valid(&self) -> bool {
        self.normal != DVec3::ZERO
    }

    /// Flip the plane (keep the other side).
    pub fn flip(&self) -> ClipPlane {
        ClipPlane {
            origin: self.origin,
            normal: -self.normal,
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = kept side, negative = clipped side, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }
}

impl<'de> Deserialize<'de> for ClipPlane {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawPlane {
            origin: DVec3,
            normal: DVec3,
        }

        // Route through `new` so described planes get normalized too.
        let raw = RawPlane::deserialize(deserializer)?;
        Ok(ClipPlane::new(raw.origin, raw.normal))
    }
}

// =============================================================================
// TESTS
// =============================================================================
