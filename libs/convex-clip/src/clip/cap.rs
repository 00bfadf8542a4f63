//! # Cap Reconstruction
//!
//! Stitches the crossing pairs of one cut into the polygon that seals the
//! cut face.
//!
//! ## Algorithm
//!
//! 1. Emit both points of the first pair
//! 2. From the last emitted point, find the unconsumed pair holding a point
//!    within tolerance and emit that pair's other point
//! 3. Stop once the cap has one vertex per cut polygon
//! 4. Vote over consecutive vertex triples and reverse the loop if most of
//!    them face along the plane normal

use glam::DVec3;

use super::polygon::Polygon;
use super::tolerance::Tolerance;
use crate::error::{ClipError, ClipResult};

/// The two points where a plane crosses one polygon's boundary.
pub type CrossingPair = [DVec3; 2];

/// Builds the cap polygon for one cut.
///
/// `pairs` holds one entry per cut polygon. The returned polygon has
/// `pairs.len()` vertices and is wound so its outward normal points away
/// from the kept half-space.
///
/// The winding vote ignores triples whose cross product is no longer than
/// the tolerance, so a cap too small to cast any vote keeps its chain order
/// and may be wound against the rest of the mesh.
///
/// # Errors
///
/// `ClipError::Topology` if the pairs do not chain into a single loop.
pub fn build_cap(pairs: &[CrossingPair], normal: DVec3, tolerance: &Tolerance) -> ClipResult<Polygon> {
    let Some(first) = pairs.first() else {
        return Err(ClipError::topology("no crossing points to build a cap from"));
    };

    let target = pairs.len();
    let mut consumed = vec![false; pairs.len()];
    consumed[0] = true;

    let mut loop_vertices = Vec::with_capacity(target);
    loop_vertices.extend_from_slice(first);

    while loop_vertices.len() < target {
        let last = loop_vertices[loop_vertices.len() - 1];
        let next = pairs
            .iter()
            .enumerate()
            .filter(|&(index, _)| !consumed[index])
            .find_map(|(index, pair)| {
                if tolerance.coincident(last, pair[0]) {
                    Some((index, pair[1]))
                } else if tolerance.coincident(last, pair[1]) {
                    Some((index, pair[0]))
                } else {
                    None
                }
            });

        let Some((index, point)) = next else {
            return Err(ClipError::topology(format!(
                "no crossing point within {:e} of {last:?} after {} of {target} cap vertices",
                tolerance.value(),
                loop_vertices.len()
            )));
        };

        consumed[index] = true;
        loop_vertices.push(point);
    }

    let mut cap = Polygon::new(loop_vertices);
    if should_flip(&cap, normal, tolerance) {
        cap.reverse();
    }
    Ok(cap)
}

/// Majority vote on the cap's winding.
///
/// Each consecutive triple whose cross product is longer than the tolerance
/// votes; a triple facing against the plane normal votes to flip.
fn should_flip(cap: &Polygon, normal: DVec3, tolerance: &Tolerance) -> bool {
    let mut checks = 0;
    let mut flips = 0;

    for w in cap.vertices().windows(3) {
        let cross = (w[0] - w[1]).cross(w[2] - w[1]);
        if cross.length() <= tolerance.value() {
            continue;
        }
        checks += 1;
        if cross.dot(normal) < 0.0 {
            flips += 1;
        }
    }

    flips > checks / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::ClipConfig;

    fn tolerance() -> Tolerance {
        Tolerance::new(1e-6, &ClipConfig::default())
    }

    /// Crossing pairs of a z = 0 cut through the side faces of a unit box,
    /// one pair per face, in no particular orientation.
    fn square_pairs() -> Vec<CrossingPair> {
        let a = DVec3::new(0.0, 0.0, 0.0);
        let b = DVec3::new(1.0, 0.0, 0.0);
        let c = DVec3::new(1.0, 1.0, 0.0);
        let d = DVec3::new(0.0, 1.0, 0.0);
        vec![[a, b], [c, d], [c, b], [d, a]]
    }

    #[test]
    fn test_cap_chains_every_pair() {
        let cap = build_cap(&square_pairs(), DVec3::Z, &tolerance()).unwrap();
        assert_eq!(cap.len(), 4);

        let mut vertices = cap.vertices().to_vec();
        vertices.sort_by(|p, q| (p.x + 2.0 * p.y).total_cmp(&(q.x + 2.0 * q.y)));
        vertices.dedup();
        assert_eq!(vertices.len(), 4);
    }

    #[test]
    fn test_cap_faces_away_from_kept_side() {
        let cap = build_cap(&square_pairs(), DVec3::Z, &tolerance()).unwrap();
        assert!(cap.normal().dot(DVec3::Z) < 0.0);

        let cap = build_cap(&square_pairs(), DVec3::NEG_Z, &tolerance()).unwrap();
        assert!(cap.normal().dot(DVec3::Z) > 0.0);
    }

    #[test]
    fn test_cap_matches_within_tolerance() {
        let mut pairs = square_pairs();
        pairs[1][1] += DVec3::new(1e-8, 0.0, 0.0);
        let cap = build_cap(&pairs, DVec3::Z, &tolerance()).unwrap();
        assert_eq!(cap.len(), 4);
    }

    #[test]
    fn test_cap_fails_on_broken_chain() {
        let mut pairs = square_pairs();
        pairs[2] = [DVec3::new(5.0, 5.0, 0.0), DVec3::new(6.0, 5.0, 0.0)];
        let err = build_cap(&pairs, DVec3::Z, &tolerance()).unwrap_err();
        assert!(matches!(err, ClipError::Topology { .. }));
    }

    #[test]
    fn test_cap_without_pairs_is_an_error() {
        assert!(build_cap(&[], DVec3::Z, &tolerance()).is_err());
    }

    #[test]
    fn test_collinear_triples_do_not_vote() {
        // One collinear triple, one that faces along +Z after reversal
        let cap = Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
        ]);
        // Triple (1,2,3): (p1 - p2) x (p3 - p2) = (-1,0,0) x (0,1,0) = (0,0,-1)
        assert!(should_flip(&cap, DVec3::Z, &tolerance()));
        assert!(!should_flip(&cap, DVec3::NEG_Z, &tolerance()));
    }

    #[test]
    fn test_tiny_cap_keeps_chain_order() {
        let a = DVec3::new(0.0, 0.0, 0.0);
        let b = DVec3::new(1e-4, 0.0, 0.0);
        let c = DVec3::new(0.0, 1e-4, 0.0);
        let pairs = vec![[a, b], [b, c], [c, a]];
        let tolerance = Tolerance::new(1e-6, &ClipConfig::default());

        // Cross products are ~1e-8, below the tolerance: no votes, no flip
        let cap = build_cap(&pairs, DVec3::Z, &tolerance).unwrap();
        assert_eq!(cap.vertices(), &[a, b, c]);
        assert!(cap.normal().dot(DVec3::Z) > 0.0);
    }
}
