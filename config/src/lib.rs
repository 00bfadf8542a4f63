//! # Config Crate
//!
//! Centralized configuration constants for the convex clipping kernel.
//! All magic numbers and tunable parameters are defined here so the
//! tolerance and cap rules stay consistent across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ClipConfig, TOLERANCE_SCALE};
//!
//! // Tolerance is derived from the mesh extent
//! let diagonal = 2.0_f64.sqrt();
//! let tolerance = diagonal * TOLERANCE_SCALE;
//! assert!(tolerance < 1e-4);
//!
//! let cfg = ClipConfig::default();
//! assert_eq!(cfg.tolerance_scale, TOLERANCE_SCALE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Scale Relative**: Tolerances are fractions of the mesh size, not absolutes
//! - **Validated**: Runtime overrides go through `ClipConfig::new`

pub mod constants;
