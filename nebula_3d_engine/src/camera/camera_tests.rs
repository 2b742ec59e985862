//! Tests for Camera
//!
//! The camera is a passive container: these tests only verify that it
//! stores what the caller sets and composes view-projection correctly.

use glam::{Vec3, Mat4};
use super::*;

// ============================================================================
// Tests: Construction and Getters
// ============================================================================

#[test]
fn test_camera_stores_fields() {
    let position = Vec3::new(1.0, 2.0, 3.0);
    let view = Mat4::from_translation(Vec3::new(-1.0, -2.0, -3.0));
    let projection = Mat4::IDENTITY;

    let camera = Camera::new(position, view, projection);

    assert_eq!(camera.position(), position);
    assert_eq!(*camera.view_matrix(), view);
    assert_eq!(*camera.projection_matrix(), projection);
}

#[test]
fn test_view_projection_order() {
    // projection * view, not view * projection
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    let projection = Mat4::from_scale(Vec3::new(2.0, 2.0, 1.0));
    let camera = Camera::new(Vec3::ZERO, view, projection);

    let expected = projection * view;
    assert_eq!(camera.view_projection_matrix(), expected);
}

// ============================================================================
// Tests: Setters
// ============================================================================

#[test]
fn test_setters_overwrite() {
    let mut camera = Camera::new(Vec3::ZERO, Mat4::IDENTITY, Mat4::IDENTITY);

    let position = Vec3::new(10.0, 0.0, 0.0);
    let view = Mat4::from_translation(-position);
    let projection = Mat4::from_scale(Vec3::splat(0.5));

    camera.set_position(position);
    camera.set_view(view);
    camera.set_projection(projection);

    assert_eq!(camera.position(), position);
    assert_eq!(*camera.view_matrix(), view);
    assert_eq!(*camera.projection_matrix(), projection);
}
