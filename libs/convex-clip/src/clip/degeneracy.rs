//! # Degeneracy Check
//!
//! Decides whether a plane can be applied cleanly before any polygon is
//! touched. A clean cut crosses each polygon's boundary exactly twice (or
//! not at all) and crosses at least three polygons.

use std::fmt;

use config::constants::{CROSSINGS_PER_CUT, MIN_CAP_CROSSINGS};

use super::plane::ClipPlane;
use super::polygon::PolygonSet;

/// Why a plane was judged degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// A polygon's boundary meets the plane a number of times other than 0 or 2.
    OddCrossings {
        /// Position of the polygon in the set
        polygon: usize,
        /// Edges of that polygon touching or crossing the plane
        crossings: usize,
    },
    /// Crossings exist but are too few to close a cap.
    TooFewCrossings {
        /// Total crossings over all polygons
        total: usize,
    },
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::OddCrossings { polygon, crossings } => {
                write!(f, "polygon {polygon} has {crossings} crossings")
            }
            Degeneracy::TooFewCrossings { total } => {
                write!(f, "only {total} crossings, need at least {MIN_CAP_CROSSINGS}")
            }
        }
    }
}

/// Checks a plane against the set without modifying it.
///
/// Uses raw signed distances: an edge counts when `d1 * d2 <= 0`, so an
/// edge touching the plane at a vertex counts too.
///
/// # Example
///
/// ```rust
/// use convex_clip::clip::{check_degeneracy, ClipPlane, Polygon, PolygonSet};
/// use glam::DVec3;
///
/// let set = PolygonSet::new(vec![Polygon::new(vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ])]);
/// // Far away: no crossings at all
/// let plane = ClipPlane::new(DVec3::new(-5.0, 0.0, 0.0), DVec3::X);
/// assert!(check_degeneracy(&set, &plane).is_ok());
/// ```
pub fn check_degeneracy(set: &PolygonSet, plane: &ClipPlane) -> Result<(), Degeneracy> {
    let mut total = 0;

    for (index, polygon) in set.polygons().iter().enumerate() {
        let crossings = polygon
            .edges()
            .filter(|&(a, b)| plane.signed_distance(a) * plane.signed_distance(b) <= 0.0)
            .count();

        if crossings != 0 && crossings != CROSSINGS_PER_CUT {
            return Err(Degeneracy::OddCrossings {
                polygon: index,
                crossings,
            });
        }
        total += crossings;
    }

    if total > 0 && total < MIN_CAP_CROSSINGS {
        return Err(Degeneracy::TooFewCrossings { total });
    }

    Ok(())
}

/// Boolean form of [`check_degeneracy`].
pub fn has_degeneracies(set: &PolygonSet, plane: &ClipPlane) -> bool {
    check_degeneracy(set, plane).is_err()
}
