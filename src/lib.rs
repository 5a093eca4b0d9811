//! Camera sensor comparison utilities.
//!
//! Derives pixel dimensions and pixel density from a camera's stated
//! resolution and sensor format, ranks and normalizes a set of cameras
//! against a reference body, and scales their frames into concentric
//! footprint rectangles for visual overlay comparison.

#[allow(missing_docs)]
pub mod error;

pub mod camera;
pub mod compare;
pub mod footprint;
pub mod render;
pub mod sensor;
