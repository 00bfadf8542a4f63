//! # Convex Clip
//!
//! Half-space clipping of closed convex polyhedra.
//!
//! ## Architecture
//!
//! ```text
//! PolyMesh + [ClipPlane] → ConvexClipper → ClipOutput { PolyMesh, outcomes }
//! ```
//!
//! Each plane keeps the side its normal points into. After a cut the open
//! face is sealed with a cap polygon wound like the rest of the mesh, so a
//! closed, consistently wound input stays closed and consistently wound.
//!
//! ## Usage
//!
//! ```rust
//! use convex_clip::{analyze_edges, create_cuboid, ClipPlane, ConvexClipper, PlaneOutcome};
//! use glam::DVec3;
//!
//! let cube = create_cuboid(DVec3::splat(-0.5), DVec3::splat(0.5)).unwrap();
//! let clipper = ConvexClipper::new(vec![ClipPlane::new(
//!     DVec3::new(0.25, 0.0, 0.0),
//!     DVec3::NEG_X,
//! )]);
//!
//! let output = clipper.clip(&cube).unwrap();
//! assert_eq!(output.outcomes, vec![PlaneOutcome::Capped { cap_vertices: 4 }]);
//! assert!(analyze_edges(&output.mesh).is_consistently_wound());
//! ```

pub mod clip;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod validate;

pub use clip::{clip_polyhedron, ClipOutput, ClipPlane, ConvexClipper, Degeneracy, PlaneOutcome};
pub use config::constants::ClipConfig;
pub use error::{ClipError, ClipResult};
pub use mesh::PolyMesh;
pub use primitives::create_cuboid;
pub use validate::{analyze_edges, EdgeReport};
