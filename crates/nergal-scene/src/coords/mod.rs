//! Coordinate types for the stage.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are in degrees, clockwise (+Y Down makes clockwise positive).

mod vec2;

pub use vec2::Vec2;
