//! # Per-Plane Clip
//!
//! Replaces every polygon with its part on the kept side of one plane and
//! seals the cut with a cap.

use config::constants::{CROSSINGS_PER_CUT, MIN_CAP_CROSSINGS};
use glam::DVec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::cap::{build_cap, CrossingPair};
use super::plane::ClipPlane;
use super::polygon::{Polygon, PolygonSet};
use super::tolerance::Tolerance;
use crate::error::{ClipError, ClipResult};

/// What one plane did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneCut {
    /// No polygon boundary met the plane; polygons were kept or dropped whole.
    Missed,
    /// The plane cut the mesh and a cap was appended.
    Capped {
        /// Vertices of the new cap polygon
        cap_vertices: usize,
        /// Crossing points the cut produced
        crossings: usize,
    },
}

/// Clips one polygon against the plane.
///
/// Returns the kept part (empty if nothing is kept) and the crossing points
/// where the plane meets the boundary.
pub fn clip_polygon(polygon: &Polygon, plane: &ClipPlane, tolerance: &Tolerance) -> (Polygon, Vec<DVec3>) {
    let vertices = polygon.vertices();
    let distances: Vec<f64> = vertices
        .iter()
        .map(|&v| tolerance.snap(plane.signed_distance(v)))
        .collect();

    if !distances.iter().any(|&d| d > 0.0) {
        return (Polygon::default(), Vec::new());
    }

    let n = vertices.len();
    let mut kept = Vec::with_capacity(n + 1);
    let mut crossings = Vec::with_capacity(CROSSINGS_PER_CUT);

    for i in 0..n {
        let j = (i + 1) % n;
        let (p1, p2) = (vertices[i], vertices[j]);
        let (d1, d2) = (distances[i], distances[j]);

        if d1 >= 0.0 {
            kept.push(p1);
        }

        // Plane passes exactly through an existing vertex. An edge lying in
        // the plane records both ends.
        if d1 == 0.0 && d2 <= 0.0 {
            crossings.push(p1);
        }
        if d2 == 0.0 && d1 <= 0.0 {
            crossings.push(p2);
        }

        if d1 * d2 < 0.0 {
            let w = -d1 / (d2 - d1);
            let point = p1 + (p2 - p1) * w;
            kept.push(point);
            crossings.push(point);
        }
    }

    (Polygon::new(kept), crossings)
}

/// Clips the whole set against one plane and appends the cap.
///
/// The set is always left clipped with empty polygons purged. On error the
/// cap is missing but the clip itself has been applied.
///
/// # Errors
///
/// `ClipError::Topology` if the crossings cannot form a cap: fewer than
/// the minimum, a polygon without exactly two, or a broken chain.
pub fn clip_with_plane(set: &mut PolygonSet, plane: &ClipPlane, tolerance: &Tolerance) -> ClipResult<PlaneCut> {
    #[cfg(feature = "parallel")]
    let clipped: Vec<(Polygon, Vec<DVec3>)> = set
        .polygons()
        .par_iter()
        .map(|polygon| clip_polygon(polygon, plane, tolerance))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let clipped: Vec<(Polygon, Vec<DVec3>)> = set
        .polygons()
        .iter()
        .map(|polygon| clip_polygon(polygon, plane, tolerance))
        .collect();

    let mut total = 0;
    let mut pairs: Vec<CrossingPair> = Vec::new();
    let mut odd = None;
    let mut polygons = Vec::with_capacity(clipped.len() + 1);

    for (index, (polygon, crossings)) in clipped.into_iter().enumerate() {
        total += crossings.len();
        match crossings.as_slice() {
            [] => {}
            &[a, b] => pairs.push([a, b]),
            other => {
                odd.get_or_insert((index, other.len()));
            }
        }
        polygons.push(polygon);
    }

    set.replace_with(polygons);

    if total == 0 {
        return Ok(PlaneCut::Missed);
    }

    if total < MIN_CAP_CROSSINGS {
        return Err(ClipError::topology(format!(
            "cut produced {total} crossing points, need at least {MIN_CAP_CROSSINGS}"
        )));
    }

    if let Some((index, count)) = odd {
        return Err(ClipError::topology(format!(
            "polygon {index} has {count} crossing points, expected 0 or {CROSSINGS_PER_CUT}"
        )));
    }

    let cap = build_cap(&pairs, plane.normal(), tolerance)?;
    let cap_vertices = cap.len();
    set.push(cap);

    Ok(PlaneCut::Capped {
        cap_vertices,
        crossings: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::ClipConfig;

    fn tolerance() -> Tolerance {
        Tolerance::new(1e-6, &ClipConfig::default())
    }

    fn square() -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_clip_polygon_interpolates_crossings() {
        // Keep x < 0.25
        let plane = ClipPlane::new(DVec3::new(0.25, 0.0, 0.0), DVec3::NEG_X);
        let (kept, crossings) = clip_polygon(&square(), &plane, &tolerance());

        assert_eq!(
            kept.vertices(),
            &[
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.25, 0.0, 0.0),
                DVec3::new(0.25, 1.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(crossings, vec![DVec3::new(0.25, 0.0, 0.0), DVec3::new(0.25, 1.0, 0.0)]);
    }

    #[test]
    fn test_clip_polygon_fully_kept() {
        let plane = ClipPlane::new(DVec3::new(-1.0, 0.0, 0.0), DVec3::X);
        let (kept, crossings) = clip_polygon(&square(), &plane, &tolerance());
        assert_eq!(kept, square());
        assert!(crossings.is_empty());
    }

    #[test]
    fn test_clip_polygon_fully_removed() {
        let plane = ClipPlane::new(DVec3::new(2.0, 0.0, 0.0), DVec3::X);
        let (kept, crossings) = clip_polygon(&square(), &plane, &tolerance());
        assert!(kept.is_empty());
        assert!(crossings.is_empty());
    }

    #[test]
    fn test_clip_polygon_touching_only_is_removed() {
        // Only the edge x = 1 lies on the plane; nothing is strictly kept
        let plane = ClipPlane::new(DVec3::new(1.0, 0.0, 0.0), DVec3::X);
        let (kept, _) = clip_polygon(&square(), &plane, &tolerance());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_clip_polygon_through_vertices() {
        // Diagonal from (1,0) to (0,1), keeping the corner at the origin
        let plane = ClipPlane::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(-1.0, -1.0, 0.0));
        let (kept, crossings) = clip_polygon(&square(), &plane, &tolerance());

        assert_eq!(kept.len(), 3);
        assert_eq!(crossings, vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_dead_zone_avoids_near_duplicate_crossing() {
        // The vertex at x = 1 sits a hair beyond the plane at x = 1 - 1e-7
        let plane = ClipPlane::new(DVec3::new(1.0 - 1e-7, 0.0, 0.0), DVec3::NEG_X);
        let (kept, crossings) = clip_polygon(&square(), &plane, &tolerance());

        assert_eq!(kept, square());
        assert_eq!(crossings, vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_clip_with_plane_missed_keeps_set() {
        let mut set = PolygonSet::new(vec![square()]);
        let plane = ClipPlane::new(DVec3::new(-1.0, 0.0, 0.0), DVec3::X);
        assert_eq!(clip_with_plane(&mut set, &plane, &tolerance()), Ok(PlaneCut::Missed));
        assert_eq!(set.polygons(), &[square()]);
    }

    #[test]
    fn test_clip_with_plane_too_few_crossings() {
        let mut set = PolygonSet::new(vec![square()]);
        let plane = ClipPlane::new(DVec3::new(0.5, 0.0, 0.0), DVec3::NEG_X);
        let err = clip_with_plane(&mut set, &plane, &tolerance()).unwrap_err();

        assert!(matches!(err, ClipError::Topology { .. }));
        // Clipped but uncapped
        assert_eq!(set.len(), 1);
        assert!(set.polygons()[0].vertices().iter().all(|v| v.x <= 0.5));
    }

    fn rect(min: (f64, f64), max: (f64, f64), z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(min.0, min.1, z),
            DVec3::new(max.0, min.1, z),
            DVec3::new(max.0, max.1, z),
            DVec3::new(min.0, max.1, z),
        ])
    }

    #[test]
    fn test_clip_with_plane_polygon_crossed_four_times() {
        // U shape whose two arms both reach past y = 1.5
        let u_shape = Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(3.0, 2.0, 0.0),
            DVec3::new(2.0, 2.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ]);
        let mut set = PolygonSet::new(vec![
            u_shape,
            rect((5.0, 0.0), (6.0, 3.0), 0.0),
            rect((5.0, 0.0), (6.0, 3.0), 1.0),
            rect((0.0, 2.0), (1.0, 3.0), 2.0),
        ]);
        let plane = ClipPlane::new(DVec3::new(0.0, 1.5, 0.0), DVec3::NEG_Y);

        let err = clip_with_plane(&mut set, &plane, &tolerance()).unwrap_err();

        assert_eq!(
            err,
            ClipError::Topology {
                message: "polygon 0 has 4 crossing points, expected 0 or 2".to_string()
            }
        );
        // Clipped, the polygon beyond the plane purged, no cap added
        assert_eq!(set.len(), 3);
        assert!(set.polygons().iter().all(|p| !p.is_empty()));
        assert!(set
            .polygons()
            .iter()
            .flat_map(|p| p.vertices())
            .all(|v| v.y <= 1.5));
    }
}
