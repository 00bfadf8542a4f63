//! # Cuboid Primitive
//!
//! Generates an axis-aligned box as six quads.

use crate::error::{ClipError, ClipResult};
use crate::mesh::PolyMesh;
use glam::DVec3;

/// Creates an axis-aligned box spanning `min` to `max`.
///
/// # Returns
///
/// A mesh with 8 points and 6 quads, each wound counter-clockwise seen
/// from outside (outward normals).
///
/// # Example
///
/// ```rust
/// use convex_clip::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.point_count(), 8);
/// assert_eq!(mesh.polygon_count(), 6);
/// ```
pub fn create_cuboid(min: DVec3, max: DVec3) -> ClipResult<PolyMesh> {
    let size = max - min;
    if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
        return Err(ClipError::degenerate(format!(
            "Cuboid extent must be positive: {:?}",
            size
        )));
    }

    let mut mesh = PolyMesh::with_capacity(8, 6);

    // Bottom corners (z = min.z)
    let v0 = mesh.add_point(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_point(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_point(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_point(DVec3::new(min.x, max.y, min.z));

    // Top corners (z = max.z)
    let v4 = mesh.add_point(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_point(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_point(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_point(DVec3::new(min.x, max.y, max.z));

    mesh.add_polygon(vec![v0, v3, v2, v1]); // bottom
    mesh.add_polygon(vec![v4, v5, v6, v7]); // top
    mesh.add_polygon(vec![v0, v1, v5, v4]); // front (y = min.y)
    mesh.add_polygon(vec![v2, v3, v7, v6]); // back (y = max.y)
    mesh.add_polygon(vec![v0, v4, v7, v3]); // left (x = min.x)
    mesh.add_polygon(vec![v1, v2, v6, v5]); // right (x = max.x)

    Ok(mesh)
}
