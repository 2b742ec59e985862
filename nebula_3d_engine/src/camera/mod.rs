//! Camera module
//!
//! Provides the passive camera container the frame loop drives.

mod camera;

pub use camera::Camera;
