//! Tests for the drawable boundary types
//!
//! Covers Transform composition (degrees in, matrix out) and AABB
//! transform/union math.

use glam::{Vec3, Vec4, Mat4};
use super::*;

const EPS: f32 = 1e-5;

fn assert_vec3_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPS, "expected {:?}, got {:?}", b, a);
}

// ============================================================================
// Tests: Transform
// ============================================================================

#[test]
fn test_transform_identity() {
    let t = Transform::IDENTITY;
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Vec3::ZERO);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.matrix(), Mat4::IDENTITY);
}

#[test]
fn test_transform_default_is_identity() {
    assert_eq!(Transform::default(), Transform::IDENTITY);
}

#[test]
fn test_transform_from_position() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.rotation, Vec3::ZERO);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn test_matrix_translates() {
    let t = Transform::from_position(Vec3::new(5.0, -2.0, 1.0));
    let origin = t.matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_vec3_near(origin.truncate(), Vec3::new(5.0, -2.0, 1.0));
}

#[test]
fn test_matrix_scales() {
    let t = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::new(2.0, 3.0, 4.0),
    };
    let p = t.matrix() * Vec4::new(1.0, 1.0, 1.0, 1.0);
    assert_vec3_near(p.truncate(), Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn test_matrix_rotation_is_degrees() {
    // 90 degrees about Y maps +X to -Z
    let t = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::new(0.0, 90.0, 0.0),
        scale: Vec3::ONE,
    };
    let p = t.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert_vec3_near(p.truncate(), Vec3::new(0.0, 0.0, -1.0));
}

// ============================================================================
// Tests: AABB
// ============================================================================

#[test]
fn test_aabb_transformed_translation() {
    let aabb = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));

    assert_vec3_near(moved.min, Vec3::new(9.0, -1.0, -1.0));
    assert_vec3_near(moved.max, Vec3::new(11.0, 1.0, 1.0));
}

#[test]
fn test_aabb_transformed_scale() {
    let aabb = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    let scaled = aabb.transformed(&Mat4::from_scale(Vec3::splat(2.0)));

    assert_vec3_near(scaled.min, Vec3::splat(-2.0));
    assert_vec3_near(scaled.max, Vec3::splat(2.0));
}

#[test]
fn test_aabb_transformed_rotation_stays_tight() {
    // 90 degrees about Z swaps the X/Y extents
    let aabb = AABB {
        min: Vec3::new(-2.0, -1.0, 0.0),
        max: Vec3::new(2.0, 1.0, 0.0),
    };
    let rotated = aabb.transformed(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));

    assert_vec3_near(rotated.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_vec3_near(rotated.max, Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_aabb_union() {
    let a = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    let b = AABB { min: Vec3::new(0.0, 0.0, 0.0), max: Vec3::new(5.0, 0.5, 0.5) };
    let u = a.union(&b);

    assert_vec3_near(u.min, Vec3::splat(-1.0));
    assert_vec3_near(u.max, Vec3::new(5.0, 1.0, 1.0));
}

#[test]
fn test_aabb_center() {
    let aabb = AABB { min: Vec3::new(0.0, 0.0, 0.0), max: Vec3::new(4.0, 2.0, 6.0) };
    assert_vec3_near(aabb.center(), Vec3::new(2.0, 1.0, 3.0));
}
