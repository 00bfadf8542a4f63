//! # Primitives
//!
//! Closed convex meshes to clip.

pub mod cuboid;

pub use cuboid::create_cuboid;
