//! Tests for ContentRegistry
//!
//! These tests validate arena ownership (stable keys, name index),
//! mesh/model creation, the loader seam, and removal semantics for
//! drawables that outside handles still reference.

use std::path::Path;
use std::sync::{Arc, Mutex};
use glam::Vec3;
use super::*;
use crate::error::Result;
use crate::renderer::{Renderer, ShaderHandle, GeometryDesc};
use crate::renderer::mock_renderer::MockRenderer;
use crate::content::{Mesh, MeshDesc, Model, ModelLoader};
use crate::scene::mock_drawable::MockDrawable;
use crate::scene::{Transform, AABB};

// ============================================================================
// TEST HELPERS
// ============================================================================

fn mock_renderer() -> (Arc<Mutex<MockRenderer>>, Arc<Mutex<dyn Renderer>>) {
    let mock = Arc::new(Mutex::new(MockRenderer::new()));
    let renderer: Arc<Mutex<dyn Renderer>> = mock.clone();
    (mock, renderer)
}

fn triangle() -> GeometryDesc {
    GeometryDesc {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: Vec::new(),
        tex_coords: Vec::new(),
        indices: Some(vec![0, 1, 2]),
    }
}

fn mesh_desc(name: &str) -> MeshDesc {
    MeshDesc {
        name: name.to_string(),
        geometry: triangle(),
        bounding_box: AABB { min: Vec3::splat(-0.5), max: Vec3::splat(0.5) },
        transform: Transform::IDENTITY,
    }
}

/// Loader stub producing a one-part model, standing in for a real
/// format-specific loader
struct StubLoader;

impl ModelLoader for StubLoader {
    fn load(&mut self, renderer: &Arc<Mutex<dyn Renderer>>, _path: &Path) -> Result<Model> {
        let mesh = Mesh::new(Arc::clone(renderer), mesh_desc("stub_part"))?;
        Ok(Model::new("stub_model", vec![mesh], Transform::IDENTITY))
    }
}

// ============================================================================
// Tests: Register and Lookup
// ============================================================================

#[test]
fn test_registry_starts_empty() {
    let registry = ContentRegistry::new();
    assert_eq!(registry.len(), 0);
    assert!(registry.is_empty());
}

#[test]
fn test_register_and_get_by_key() {
    let mut registry = ContentRegistry::new();
    let key = registry.register(MockDrawable::new("teapot"));

    assert_eq!(registry.len(), 1);
    assert!(registry.drawable(key).is_some());
}

#[test]
fn test_find_by_name() {
    let mut registry = ContentRegistry::new();
    let key = registry.register(MockDrawable::new("teapot"));

    let by_name = registry.find("teapot").unwrap();
    let by_key = registry.drawable(key).unwrap();
    assert!(Arc::ptr_eq(&by_name, &by_key));
}

#[test]
fn test_find_unknown_name() {
    let registry = ContentRegistry::new();
    assert!(registry.find("nonexistent").is_none());
}

#[test]
fn test_duplicate_name_first_registration_wins() {
    let mut registry = ContentRegistry::new();
    let first = registry.register(MockDrawable::new("twin"));
    registry.register(MockDrawable::new("twin"));

    assert_eq!(registry.len(), 2);
    let found = registry.find("twin").unwrap();
    assert!(Arc::ptr_eq(&found, &registry.drawable(first).unwrap()));
}

#[test]
fn test_unnamed_drawable_not_indexed() {
    let mut registry = ContentRegistry::new();
    registry.register(MockDrawable::new(""));

    assert_eq!(registry.len(), 1);
    assert!(registry.find("").is_none());
}

// ============================================================================
// Tests: Create Mesh and Model
// ============================================================================

#[test]
fn test_create_mesh() {
    let (mock, renderer) = mock_renderer();
    let mut registry = ContentRegistry::new();

    let key = registry.create_mesh(&renderer, mesh_desc("tri")).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.drawable(key).is_some());
    assert!(registry.find("tri").is_some());
    assert_eq!(mock.lock().unwrap().geometry_count(), 1);
}

#[test]
fn test_create_mesh_propagates_upload_failure() {
    let (_, renderer) = mock_renderer();
    let mut registry = ContentRegistry::new();

    let bad = MeshDesc { geometry: GeometryDesc::default(), ..mesh_desc("empty") };
    assert!(registry.create_mesh(&renderer, bad).is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_create_model_uploads_all_parts() {
    let (mock, renderer) = mock_renderer();
    let mut registry = ContentRegistry::new();

    let key = registry.create_model(&renderer, "station",
        vec![mesh_desc("core"), mesh_desc("mast")],
        Transform::IDENTITY).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(mock.lock().unwrap().geometry_count(), 2);

    // The registered model renders through its handle
    let drawable = registry.drawable(key).unwrap();
    drawable.lock().unwrap().render(ShaderHandle::from_raw(1)).unwrap();
    assert_eq!(mock.lock().unwrap().draw_count(), 2);
}

// ============================================================================
// Tests: Model Loader Seam
// ============================================================================

#[test]
fn test_load_model_registers_result() {
    let (mock, renderer) = mock_renderer();
    let mut registry = ContentRegistry::new();
    let mut loader = StubLoader;

    let key = registry.load_model(&mut loader, &renderer, Path::new("assets/stub.obj")).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.drawable(key).is_some());
    assert!(registry.find("stub_model").is_some());
    assert_eq!(mock.lock().unwrap().geometry_count(), 1);
}

// ============================================================================
// Tests: Remove and Clear
// ============================================================================

#[test]
fn test_remove() {
    let mut registry = ContentRegistry::new();
    let key = registry.register(MockDrawable::new("teapot"));

    assert!(registry.remove(key));
    assert!(registry.is_empty());
    assert!(registry.drawable(key).is_none());
    assert!(registry.find("teapot").is_none());
}

#[test]
fn test_remove_unknown_key_returns_false() {
    let mut registry = ContentRegistry::new();
    let key = registry.register(MockDrawable::new("teapot"));
    registry.remove(key);

    // Key died with its drawable
    assert!(!registry.remove(key));
}

#[test]
fn test_removed_drawable_survives_through_held_handle() {
    // The registry stops handing it out, but an outside holder keeps
    // the content alive until it drops the handle
    let (mock, renderer) = mock_renderer();
    let mut registry = ContentRegistry::new();
    let key = registry.create_mesh(&renderer, mesh_desc("tri")).unwrap();

    let handle = registry.drawable(key).unwrap();
    registry.remove(key);

    handle.lock().unwrap().render(ShaderHandle::from_raw(1)).unwrap();
    assert_eq!(mock.lock().unwrap().geometry_count(), 1);

    drop(handle);
    // Last handle gone; the mesh released its geometry
    assert_eq!(mock.lock().unwrap().geometry_count(), 0);
}

#[test]
fn test_clear() {
    let mut registry = ContentRegistry::new();
    registry.register(MockDrawable::new("a"));
    registry.register(MockDrawable::new("b"));

    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.find("a").is_none());
}

#[test]
fn test_keys_remain_valid_after_other_removals() {
    let mut registry = ContentRegistry::new();
    let a = registry.register(MockDrawable::new("a"));
    let b = registry.register(MockDrawable::new("b"));

    registry.remove(a);

    assert!(registry.drawable(b).is_some());
}
