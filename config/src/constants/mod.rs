//! Centralized configuration values shared by the clipping kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Fraction of the input bounding-box diagonal used as the clipping tolerance.
///
/// # Examples
/// ```
/// use config::constants::TOLERANCE_SCALE;
/// let diagonal = 10.0;
/// assert!((diagonal * TOLERANCE_SCALE - 1.0e-4).abs() < 1.0e-12);
/// ```
pub const TOLERANCE_SCALE: f64 = 1.0e-5;

/// Multiple of the tolerance inside which a signed distance snaps to zero.
///
/// # Examples
/// ```
/// use config::constants::DEAD_ZONE_FACTOR;
/// let tolerance = 1.0e-5;
/// let distance: f64 = 1.5e-5;
/// assert!(distance.abs() < DEAD_ZONE_FACTOR * tolerance);
/// ```
pub const DEAD_ZONE_FACTOR: f64 = 2.0;

/// Lower bound for a derived tolerance.
///
/// A mesh whose points all coincide has a zero diagonal; the floor keeps the
/// merge radius positive.
///
/// # Examples
/// ```
/// use config::constants::MIN_TOLERANCE;
/// let tolerance = (0.0_f64 * 1.0e-5).max(MIN_TOLERANCE);
/// assert!(tolerance > 0.0);
/// ```
pub const MIN_TOLERANCE: f64 = 1.0e-12;

// =============================================================================
// CAP TOPOLOGY CONSTANTS
// =============================================================================

/// Crossing points a cut polygon contributes to the cap.
///
/// # Examples
/// ```
/// use config::constants::CROSSINGS_PER_CUT;
/// assert_eq!(CROSSINGS_PER_CUT, 2);
/// ```
pub const CROSSINGS_PER_CUT: usize = 2;

/// Minimum total crossings for a cut to close with a cap.
///
/// Three cut polygons with two crossings each is the smallest (triangular) cap.
///
/// # Examples
/// ```
/// use config::constants::{CROSSINGS_PER_CUT, MIN_CAP_CROSSINGS};
/// assert_eq!(MIN_CAP_CROSSINGS / CROSSINGS_PER_CUT, 3);
/// ```
pub const MIN_CAP_CROSSINGS: usize = 6;

// =============================================================================
// CLIP CONFIG
// =============================================================================

/// Tunable parameters for one clipping run.
///
/// # Examples
/// ```
/// use config::constants::ClipConfig;
/// let config = ClipConfig::default();
/// assert!(config.tolerance_scale > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    /// Fraction of the bounding-box diagonal used as the tolerance.
    pub tolerance_scale: f64,
    /// Dead zone around the plane, in multiples of the tolerance.
    pub dead_zone_factor: f64,
}

impl ClipConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ClipConfig;
    /// let cfg = ClipConfig::new(1.0e-6, 2.0).expect("valid config");
    /// assert_eq!(cfg.dead_zone_factor, 2.0);
    /// ```
    pub fn new(tolerance_scale: f64, dead_zone_factor: f64) -> Result<Self, ConfigError> {
        if !(tolerance_scale.is_finite() && tolerance_scale > 0.0) {
            return Err(ConfigError::InvalidToleranceScale(tolerance_scale));
        }
        if !(dead_zone_factor.is_finite() && dead_zone_factor >= 0.0) {
            return Err(ConfigError::InvalidDeadZone(dead_zone_factor));
        }
        Ok(Self {
            tolerance_scale,
            dead_zone_factor,
        })
    }

    /// Tolerance for a mesh whose bounding box has the given diagonal length.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ClipConfig, MIN_TOLERANCE};
    /// let cfg = ClipConfig::default();
    /// assert_eq!(cfg.tolerance_for_diagonal(0.0), MIN_TOLERANCE);
    /// ```
    pub fn tolerance_for_diagonal(&self, diagonal: f64) -> f64 {
        (diagonal * self.tolerance_scale).max(MIN_TOLERANCE)
    }
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            tolerance_scale: TOLERANCE_SCALE,
            dead_zone_factor: DEAD_ZONE_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance scale is zero, negative or not finite.
    InvalidToleranceScale(f64),
    /// Raised when the dead-zone factor is negative or not finite.
    InvalidDeadZone(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidToleranceScale(value) => {
                write!(f, "tolerance_scale must be positive and finite: {value}")
            }
            ConfigError::InvalidDeadZone(value) => {
                write!(f, "dead_zone_factor must be non-negative and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
