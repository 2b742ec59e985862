/// SceneObject — a named, transformable wrapper around one Drawable.
///
/// The SceneObject owns the authoritative transform. Whatever the
/// wrapped drawable holds is treated as a write-through cache and is
/// overwritten immediately before every draw, never read back (except
/// once, at construction). Optional auto-rotation advances the Euler
/// angles each update and wraps them into [0, 360).

use std::sync::Arc;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::renderer::ShaderHandle;
use super::drawable::{SharedDrawable, Transform};

/// Fallback name for objects wrapping an unnamed drawable
const DEFAULT_NAME: &str = "SceneObject";

/// A named scene entry wrapping one drawable.
///
/// Scene-level identity (name, visibility) and animation state live
/// here; the drawable only carries content. Disposal marks the object
/// only — drawable resources belong to the ContentRegistry and are
/// never freed from the scene layer, so sharing a drawable between
/// objects cannot double-free.
pub struct SceneObject {
    /// Scene-level name (uniqueness is not enforced)
    name: String,
    /// Whether render passes draw this object
    visible: bool,
    /// The wrapped content (non-owning handle)
    drawable: SharedDrawable,
    /// Authoritative transform, pushed into the drawable before each draw
    transform: Transform,
    /// Whether update() advances the rotation
    auto_rotate: bool,
    /// Angular velocity per axis, in degrees per second
    rotation_speed: Vec3,
    /// Set once by dispose()
    disposed: bool,
}

impl SceneObject {
    /// Create a scene object wrapping the given drawable.
    ///
    /// The name defaults to the drawable's own name, or "SceneObject"
    /// when the drawable is unnamed. The initial transform is copied
    /// from the drawable.
    ///
    /// # Arguments
    ///
    /// * `drawable` - Content handle (usually a ContentRegistry handout)
    /// * `name` - Scene-level name override
    pub fn new(drawable: SharedDrawable, name: Option<&str>) -> Self {
        let (drawable_name, transform) = match drawable.lock() {
            Ok(d) => (d.name().to_string(), d.transform()),
            Err(_) => (String::new(), Transform::IDENTITY),
        };

        let name = match name {
            Some(n) => n.to_string(),
            None if !drawable_name.is_empty() => drawable_name,
            None => DEFAULT_NAME.to_string(),
        };

        Self {
            name,
            visible: true,
            drawable,
            transform,
            auto_rotate: false,
            rotation_speed: Vec3::ZERO,
            disposed: false,
        }
    }

    /// Advance animation state.
    ///
    /// With auto-rotation enabled, integrates `rotation_speed * delta_time`
    /// into the Euler angles and wraps each axis into [0, 360) with
    /// `rem_euclid`, which keeps negative angular velocities in range
    /// too. No-op otherwise.
    ///
    /// # Arguments
    ///
    /// * `delta_time` - Frame time in seconds (trusted non-negative)
    pub fn update(&mut self, delta_time: f32) {
        if !self.auto_rotate {
            return;
        }

        self.transform.rotation += self.rotation_speed * delta_time;
        self.transform.rotation.x = self.transform.rotation.x.rem_euclid(360.0);
        self.transform.rotation.y = self.transform.rotation.y.rem_euclid(360.0);
        self.transform.rotation.z = self.transform.rotation.z.rem_euclid(360.0);
    }

    /// Draw this object.
    ///
    /// No-op for invisible or disposed objects. Otherwise writes the
    /// authoritative transform into the drawable (overwriting whatever
    /// it held — a drawable shared between objects is drawn with the
    /// last writer's transform) and delegates to the drawable's own
    /// render. Backend faults propagate untouched.
    pub fn render(&mut self, shader: ShaderHandle) -> Result<()> {
        if !self.visible || self.disposed {
            return Ok(());
        }

        let mut drawable = self.drawable.lock()
            .map_err(|_| Error::BackendError("Drawable lock poisoned".to_string()))?;
        drawable.set_transform(self.transform);
        drawable.render(shader)
    }

    /// Visibility decision for distance culling. Pure.
    ///
    /// Invisible objects never render, regardless of distance.
    /// Otherwise the object renders when the Euclidean distance from
    /// its position to the viewer does not exceed `max_distance`.
    ///
    /// # Arguments
    ///
    /// * `viewer_position` - The point distance is measured from
    /// * `max_distance` - Cull radius around the viewer
    pub fn should_render(&self, viewer_position: Vec3, max_distance: f32) -> bool {
        if !self.visible {
            return false;
        }
        self.transform.position.distance(viewer_position) <= max_distance
    }

    /// Create a clone sharing the SAME drawable.
    ///
    /// Name gets a "_Clone" suffix; transform, visibility and animation
    /// state are copied; the clone starts undisposed. Because both
    /// objects write through to one transform cache, rendering them in
    /// the same pass draws the shared content twice, each time with the
    /// most recently written transform.
    pub fn clone_object(&self) -> SceneObject {
        SceneObject {
            name: format!("{}_Clone", self.name),
            visible: self.visible,
            drawable: Arc::clone(&self.drawable),
            transform: self.transform,
            auto_rotate: self.auto_rotate,
            rotation_speed: self.rotation_speed,
            disposed: false,
        }
    }

    /// Mark this object disposed. Idempotent.
    ///
    /// Does NOT free the wrapped drawable's resources — the
    /// ContentRegistry owns those. A disposed object renders nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    // ===== ACCESSORS =====

    /// Scene-level name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename this object
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Whether render passes draw this object
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide this object
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The authoritative transform
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replace the whole transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Set the world-space position
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Euler angles in degrees
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    /// Set the Euler angles (degrees)
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    /// Per-axis scale factors
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// Set the per-axis scale factors
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Whether update() advances the rotation
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Enable or disable auto-rotation
    pub fn set_auto_rotate(&mut self, auto_rotate: bool) {
        self.auto_rotate = auto_rotate;
    }

    /// Angular velocity per axis, degrees per second
    pub fn rotation_speed(&self) -> Vec3 {
        self.rotation_speed
    }

    /// Set the angular velocity (degrees per second, may be negative)
    pub fn set_rotation_speed(&mut self, speed: Vec3) {
        self.rotation_speed = speed;
    }

    /// The wrapped drawable handle
    pub fn drawable(&self) -> &SharedDrawable {
        &self.drawable
    }

    /// Whether dispose() has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;
