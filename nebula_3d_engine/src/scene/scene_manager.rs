/// SceneManager — ordered collection of SceneObjects with per-frame
/// update/render passes and distance-based visibility culling.
///
/// Objects are held behind shared handles (SceneObjectRef) so callers
/// keep identity-stable references for mutation between frames; the
/// manager itself runs a single-threaded, frame-stepped model. The
/// collection cannot be mutated during a pass (`&mut self` excludes it).

use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::error::{Error, Result};
use crate::renderer::ShaderHandle;
use crate::engine_debug;
use super::scene_object::SceneObject;
use super::drawable::SharedDrawable;
use super::lighting::SceneLighting;

/// Shared handle to a SceneObject.
///
/// Pointer identity (Arc::ptr_eq) is what add/remove deduplicate on;
/// names are a lookup convenience, not an identity.
pub type SceneObjectRef = Arc<Mutex<SceneObject>>;

/// Owner of an ordered scene-object collection.
///
/// Insertion order is preserved and is the iteration order of both
/// passes. Render accounting classifies every object exactly once:
/// after a completed pass, rendered + culled == total.
pub struct SceneManager {
    /// Objects in insertion order
    objects: Vec<SceneObjectRef>,
    /// Whether render passes cull by distance
    enable_distance_culling: bool,
    /// Cull radius around the viewer
    max_render_distance: f32,
    /// Objects drawn (or attempted) in the most recent render pass
    rendered_objects: usize,
    /// Objects skipped by distance culling in the most recent render pass
    culled_objects: usize,
    /// Optional lighting collaborator, applied before each pass
    lighting: Option<Box<dyn SceneLighting>>,
    /// Set once by dispose()
    disposed: bool,
}

impl SceneManager {
    /// Default cull radius
    pub const DEFAULT_RENDER_DISTANCE: f32 = 50.0;
    /// Floor for the cull radius; adjustments never go below this
    pub const MIN_RENDER_DISTANCE: f32 = 5.0;

    /// Create a new empty scene manager with culling enabled.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            enable_distance_culling: true,
            max_render_distance: Self::DEFAULT_RENDER_DISTANCE,
            rendered_objects: 0,
            culled_objects: 0,
            lighting: None,
            disposed: false,
        }
    }

    // ===== COLLECTION =====

    /// Create a scene object around a drawable, add it, and return its handle.
    ///
    /// # Arguments
    ///
    /// * `drawable` - Content handle (usually a ContentRegistry handout)
    /// * `name` - Scene-level name override (defaults to the drawable's name)
    pub fn create_object(&mut self, drawable: SharedDrawable, name: Option<&str>) -> SceneObjectRef {
        let object = Arc::new(Mutex::new(SceneObject::new(drawable, name)));
        self.objects.push(Arc::clone(&object));
        object
    }

    /// Add an externally constructed object to the end of the collection.
    ///
    /// No-op when the same object (by pointer identity, not name) is
    /// already present.
    pub fn add_object(&mut self, object: SceneObjectRef) {
        if self.objects.iter().any(|o| Arc::ptr_eq(o, &object)) {
            return;
        }
        self.objects.push(object);
    }

    /// Remove an object by pointer identity.
    ///
    /// Returns whether removal occurred. The removed object is NOT
    /// disposed — the caller owns disposal on this path (unlike
    /// clear/dispose, which dispose everything they drop).
    pub fn remove_object(&mut self, object: &SceneObjectRef) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| !Arc::ptr_eq(o, object));
        self.objects.len() != before
    }

    /// Find the first object whose name matches, case-insensitively.
    ///
    /// When several objects share a name, only the first (by insertion
    /// order) is ever reachable through lookup.
    pub fn find_object(&self, name: &str) -> Option<SceneObjectRef> {
        self.objects.iter()
            .find(|o| match o.lock() {
                Ok(object) => object.name().eq_ignore_ascii_case(name),
                Err(_) => false,
            })
            .map(Arc::clone)
    }

    /// Read-only view of the collection, in insertion order.
    pub fn objects(&self) -> &[SceneObjectRef] {
        &self.objects
    }

    // ===== FRAME PASSES =====

    /// Advance animation state on every object, in insertion order.
    ///
    /// No filtering: invisible objects still animate.
    ///
    /// # Arguments
    ///
    /// * `delta_time` - Frame time in seconds (trusted non-negative)
    pub fn update(&mut self, delta_time: f32) {
        for object_ref in &self.objects {
            if let Ok(mut object) = object_ref.lock() {
                object.update(delta_time);
            }
        }
    }

    /// Render the scene, classifying every object as rendered or culled.
    ///
    /// Applies the lighting collaborator (if any), then walks the
    /// collection in insertion order. With culling enabled, objects
    /// failing their distance test are counted culled and skipped;
    /// everything else is rendered and counted — including invisible
    /// objects, whose own render no-ops (the counter reflects attempted
    /// renders, not pixels drawn). Drawable faults propagate to the
    /// caller and abort the pass.
    ///
    /// # Arguments
    ///
    /// * `shader` - Opaque shader program token, passed through untouched
    /// * `viewer_position` - The point distance culling measures from
    pub fn render(&mut self, shader: ShaderHandle, viewer_position: Vec3) -> Result<()> {
        self.rendered_objects = 0;
        self.culled_objects = 0;

        if let Some(lighting) = self.lighting.as_mut() {
            lighting.apply(shader, viewer_position)?;
        }

        for object_ref in &self.objects {
            let mut object = object_ref.lock()
                .map_err(|_| Error::BackendError("SceneObject lock poisoned".to_string()))?;

            if self.enable_distance_culling
                && !object.should_render(viewer_position, self.max_render_distance)
            {
                self.culled_objects += 1;
                continue;
            }

            object.render(shader)?;
            self.rendered_objects += 1;
        }

        Ok(())
    }

    // ===== VISIBILITY POLICY =====

    /// Flip distance culling on or off.
    pub fn toggle_distance_culling(&mut self) {
        self.enable_distance_culling = !self.enable_distance_culling;
        engine_debug!("nebula3d::SceneManager", "Distance culling {}",
            if self.enable_distance_culling { "enabled" } else { "disabled" });
    }

    /// Whether render passes cull by distance
    pub fn distance_culling_enabled(&self) -> bool {
        self.enable_distance_culling
    }

    /// Adjust the cull radius by a delta, clamped to the 5.0 floor.
    ///
    /// # Arguments
    ///
    /// * `delta` - Amount to add (may be negative)
    pub fn adjust_render_distance(&mut self, delta: f32) {
        self.max_render_distance =
            (self.max_render_distance + delta).max(Self::MIN_RENDER_DISTANCE);
    }

    /// Current cull radius
    pub fn max_render_distance(&self) -> f32 {
        self.max_render_distance
    }

    // ===== LIGHTING =====

    /// Install or remove the lighting collaborator applied before each pass.
    pub fn set_lighting(&mut self, lighting: Option<Box<dyn SceneLighting>>) {
        self.lighting = lighting;
    }

    // ===== STATISTICS =====

    /// Number of objects in the collection
    pub fn total_objects(&self) -> usize {
        self.objects.len()
    }

    /// Objects drawn (or attempted) in the most recent render pass
    pub fn rendered_objects(&self) -> usize {
        self.rendered_objects
    }

    /// Objects skipped by distance culling in the most recent render pass
    pub fn culled_objects(&self) -> usize {
        self.culled_objects
    }

    /// Human-readable snapshot of the most recent pass.
    pub fn performance_info(&self) -> String {
        format!(
            "Scene objects: {} total, {} rendered, {} culled | distance culling {} (max {:.1})",
            self.total_objects(),
            self.rendered_objects,
            self.culled_objects,
            if self.enable_distance_culling { "enabled" } else { "disabled" },
            self.max_render_distance,
        )
    }

    // ===== LIFECYCLE =====

    /// Dispose every contained object and empty the collection.
    ///
    /// Pass counters reset to zero. Drawable resources are untouched
    /// (the ContentRegistry owns those).
    pub fn clear(&mut self) {
        for object_ref in &self.objects {
            if let Ok(mut object) = object_ref.lock() {
                object.dispose();
            }
        }
        engine_debug!("nebula3d::SceneManager", "Cleared {} scene objects", self.objects.len());
        self.objects.clear();
        self.rendered_objects = 0;
        self.culled_objects = 0;
    }

    /// Clear the collection and mark this manager disposed. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.clear();
        self.disposed = true;
    }

    /// Whether dispose() has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
