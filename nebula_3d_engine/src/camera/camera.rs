/// Camera — low-level passive data container.
///
/// The Camera computes nothing. The caller (frame loop) is responsible
/// for computing and setting all fields: position, view matrix and
/// projection matrix.
///
/// The engine does NOT store or manage cameras. They are tools provided
/// by the engine, owned and driven by the caller. The scene layer only
/// ever consumes the camera's position, as the viewer point that
/// distance culling measures against.

use glam::{Vec3, Mat4};

/// Low-level camera. A passive data container — computes nothing.
///
/// The caller is responsible for computing and setting all fields.
/// Typically, the frame loop computes view/projection from high-level
/// parameters (position, orientation, FOV, etc.) and stores the results
/// here.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a new camera with the given parameters.
    pub fn new(position: Vec3, view: Mat4, projection: Mat4) -> Self {
        Self {
            position,
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    // ===== GETTERS =====

    /// World-space camera position (the viewer point for culling).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS — store, compute nothing =====

    /// Set the camera position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
