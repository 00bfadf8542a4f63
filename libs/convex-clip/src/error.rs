//! # Clip Errors
//!
//! Error types for convex clipping operations.
//!
//! ## Error Policy
//!
//! - Configuration and input errors abort the whole run
//! - Cap topology errors abort only that plane's cap (see `PlaneOutcome`)
//! - Degenerate planes are not errors; they are skipped and reported

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while clipping a convex mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// The plane collection was empty.
    #[error("No clipping planes configured")]
    NoPlanes,

    /// A plane's normal has zero length, so it has no orientation.
    #[error("Clipping plane {index} has a zero-length normal")]
    InvalidPlane {
        /// Position of the plane in the plane collection
        index: usize,
    },

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A polygon refers to a point the mesh does not have.
    #[error("Polygon {polygon} references point {index} but the mesh has {count} points")]
    PointOutOfRange {
        /// Polygon position in the input mesh
        polygon: usize,
        /// Offending point index
        index: u32,
        /// Number of points in the mesh
        count: usize,
    },

    /// Degenerate input geometry.
    #[error("Degenerate geometry: {message}")]
    Degenerate {
        /// What was degenerate
        message: String,
    },

    /// The crossing points of a cut cannot be closed into a cap.
    #[error("Invalid cap topology: {message}")]
    Topology {
        /// What went wrong while building the cap
        message: String,
    },
}

impl ClipError {
    /// Creates a cap topology error.
    pub fn topology(message: impl Into<String>) -> Self {
        Self::Topology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for clipping operations.
pub type ClipResult<T> = Result<T, ClipError>;

// =============================================================================
// TESTS
// =============================================================================
