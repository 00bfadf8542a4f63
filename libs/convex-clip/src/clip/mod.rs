//! # Convex Clipping
//!
//! Clips a closed convex polygon mesh against an ordered list of planes,
//! sealing each cut with a cap polygon.
//!
//! ## Algorithm Overview
//!
//! 1. Copy the input polygons out as vertex loops and derive the tolerance
//!    from the bounding-box diagonal
//! 2. For each plane, skip it if the cut would be degenerate
//! 3. Otherwise clip every polygon and stitch the crossing points into a cap
//! 4. Merge coincident points and emit an indexed mesh
//!
//! Non-convex input is a precondition violation; it is not detected.

mod cap;
mod degeneracy;
mod merge;
mod plane;
mod plane_clip;
mod polygon;
mod tolerance;


pub use cap::{build_cap, CrossingPair};
pub use degeneracy::{check_degeneracy, has_degeneracies, Degeneracy};
pub use merge::PointMerger;
pub use plane::ClipPlane;
pub use plane_clip::{clip_polygon, clip_with_plane, PlaneCut};
pub use polygon::{Polygon, PolygonSet};
pub use tolerance::Tolerance;

use config::constants::ClipConfig;

use crate::error::{ClipError, ClipResult};
use crate::mesh::PolyMesh;

// =============================================================================
// OUTCOMES
// =============================================================================

/// What happened to the mesh for one plane.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneOutcome {
    /// The cut would be degenerate; the plane was not applied.
    Skipped(Degeneracy),
    /// The plane did not cross any polygon.
    NoCut,
    /// The plane cut the mesh and a cap was added.
    Capped {
        /// Vertices of the cap polygon
        cap_vertices: usize,
    },
    /// The plane cut the mesh but the cap could not be built.
    Uncapped(ClipError),
}

impl PlaneOutcome {
    /// True if the plane changed nothing because it was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, PlaneOutcome::Skipped(_))
    }
}

/// Result of a clipping run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutput {
    /// The clipped mesh.
    pub mesh: PolyMesh,
    /// Tolerance used for this run.
    pub tolerance: f64,
    /// One outcome per plane, in plane order.
    pub outcomes: Vec<PlaneOutcome>,
}

// =============================================================================
// CLIPPER
// =============================================================================

/// Ordered planes plus the settings used to clip with them.
///
/// # Example
///
/// ```rust
/// use convex_clip::{create_cuboid, ClipPlane, ConvexClipper};
/// use glam::DVec3;
///
/// let cube = create_cuboid(DVec3::splat(-0.5), DVec3::splat(0.5)).unwrap();
/// let clipper = ConvexClipper::new(vec![ClipPlane::new(
///     DVec3::new(0.25, 0.0, 0.0),
///     DVec3::NEG_X,
/// )]);
///
/// let output = clipper.clip(&cube).unwrap();
/// let (_, max) = output.mesh.bounding_box();
/// assert!((max.x - 0.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvexClipper {
    planes: Vec<ClipPlane>,
    config: ClipConfig,
}

impl ConvexClipper {
    /// Creates a clipper with the default configuration.
    pub fn new(planes: Vec<ClipPlane>) -> Self {
        Self {
            planes,
            config: ClipConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ClipConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a plane.
    pub fn add_plane(&mut self, plane: ClipPlane) {
        self.planes.push(plane);
    }

    /// The planes, in application order.
    pub fn planes(&self) -> &[ClipPlane] {
        &self.planes
    }

    /// The configuration.
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Clips a mesh with every plane in order.
    ///
    /// Degenerate planes are skipped and a failed cap leaves that cut open;
    /// both are reported in [`ClipOutput::outcomes`] and processing goes on.
    ///
    /// # Errors
    ///
    /// - `ClipError::NoPlanes` if there are no planes
    /// - `ClipError::InvalidPlane` if a plane has a zero normal
    /// - `ClipError::PointOutOfRange` if the mesh has a bad index
    pub fn clip(&self, mesh: &PolyMesh) -> ClipResult<ClipOutput> {
        if self.planes.is_empty() {
            return Err(ClipError::NoPlanes);
        }
        if let Some(index) = self.planes.iter().position(|p| !p.is_valid()) {
            return Err(ClipError::InvalidPlane { index });
        }

        let mut set = PolygonSet::from_mesh(mesh)?;
        let tolerance = Tolerance::from_points(mesh.points(), &self.config);
        log::debug!(
            "clipping {} polygons with {} planes, tolerance {:e}",
            set.len(),
            self.planes.len(),
            tolerance.value()
        );

        let mut outcomes = Vec::with_capacity(self.planes.len());
        for (index, plane) in self.planes.iter().enumerate() {
            let outcome = apply_plane(&mut set, plane, &tolerance);
            match &outcome {
                PlaneOutcome::Skipped(reason) => {
                    log::warn!("skipping degenerate plane {index}: {reason}");
                }
                PlaneOutcome::Uncapped(err) => {
                    log::error!("plane {index} left uncapped: {err}");
                }
                PlaneOutcome::NoCut | PlaneOutcome::Capped { .. } => {
                    log::debug!("plane {index}: {outcome:?}, {} polygons", set.len());
                }
            }
            outcomes.push(outcome);
        }

        Ok(ClipOutput {
            mesh: set.to_mesh(&tolerance),
            tolerance: tolerance.value(),
            outcomes,
        })
    }
}

fn apply_plane(set: &mut PolygonSet, plane: &ClipPlane, tolerance: &Tolerance) -> PlaneOutcome {
    if let Err(reason) = check_degeneracy(set, plane) {
        return PlaneOutcome::Skipped(reason);
    }

    match clip_with_plane(set, plane, tolerance) {
        Ok(PlaneCut::Missed) => PlaneOutcome::NoCut,
        Ok(PlaneCut::Capped { cap_vertices, .. }) => PlaneOutcome::Capped { cap_vertices },
        Err(err) => PlaneOutcome::Uncapped(err),
    }
}

/// Clips a mesh with the given planes using the default configuration.
///
/// # Example
///
/// ```rust
/// use convex_clip::{clip_polyhedron, create_cuboid, ClipPlane};
/// use glam::DVec3;
///
/// let cube = create_cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
/// let output = clip_polyhedron(&cube, &[ClipPlane::new(DVec3::splat(0.5), DVec3::NEG_Z)]).unwrap();
/// assert_eq!(output.mesh.polygon_count(), 6);
/// ```
pub fn clip_polyhedron(mesh: &PolyMesh, planes: &[ClipPlane]) -> ClipResult<ClipOutput> {
    ConvexClipper::new(planes.to_vec()).clip(mesh)
}
