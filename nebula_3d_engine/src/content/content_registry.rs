/// ContentRegistry — arena owner of drawable resources.
///
/// Scenes hold non-owning SharedDrawable references; the registry is
/// the authority for resource lifetime. Keys are stable slot-map keys:
/// they remain valid while other drawables come and go, and a key dies
/// only when its own drawable is removed.
///
/// Handing the same SharedDrawable to two scene objects is how sharing
/// happens — an explicit act at this boundary, not an accident inside
/// the scene layer.

use std::path::Path;
use std::sync::{Arc, Mutex};
use slotmap::{SlotMap, new_key_type};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::scene::{Drawable, SharedDrawable, Transform};
use crate::{engine_debug, engine_info};
use super::mesh::{Mesh, MeshDesc};
use super::model::Model;
use super::model_loader::ModelLoader;

new_key_type! {
    /// Stable key for a drawable within a ContentRegistry.
    pub struct DrawableKey;
}

/// Central owner of drawable content.
pub struct ContentRegistry {
    /// Drawables stored in a slot map for O(1) insert/remove with stable keys
    drawables: SlotMap<DrawableKey, SharedDrawable>,
    /// Name index; the first registration of a name wins
    names: FxHashMap<String, DrawableKey>,
}

impl ContentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            drawables: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    /// Take ownership of a drawable and return its key.
    ///
    /// The drawable's name enters the name index unless an earlier
    /// registration already claimed it.
    pub fn register<D: Drawable + 'static>(&mut self, drawable: D) -> DrawableKey {
        let name = drawable.name().to_string();
        let shared: SharedDrawable = Arc::new(Mutex::new(drawable));
        let key = self.drawables.insert(shared);
        if !name.is_empty() {
            self.names.entry(name).or_insert(key);
        }
        key
    }

    /// Create and register a mesh from a descriptor.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Backend the mesh uploads through
    /// * `desc` - Mesh descriptor
    pub fn create_mesh(
        &mut self,
        renderer: &Arc<Mutex<dyn Renderer>>,
        desc: MeshDesc,
    ) -> Result<DrawableKey> {
        let mesh = Mesh::new(Arc::clone(renderer), desc)?;
        engine_debug!("nebula3d::ContentRegistry", "Registered mesh '{}'", mesh.name());
        Ok(self.register(mesh))
    }

    /// Create and register a model assembled from mesh part descriptors.
    ///
    /// Part transforms are model-local.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Backend the parts upload through
    /// * `name` - Model name
    /// * `part_descs` - One descriptor per mesh part
    /// * `transform` - Initial model transform
    pub fn create_model(
        &mut self,
        renderer: &Arc<Mutex<dyn Renderer>>,
        name: &str,
        part_descs: Vec<MeshDesc>,
        transform: Transform,
    ) -> Result<DrawableKey> {
        let mut parts = Vec::with_capacity(part_descs.len());
        for desc in part_descs {
            parts.push(Mesh::new(Arc::clone(renderer), desc)?);
        }

        let model = Model::new(name, parts, transform);
        engine_debug!("nebula3d::ContentRegistry",
            "Registered model '{}' ({} parts)", name, model.part_count());
        Ok(self.register(model))
    }

    /// Load a model through a loader and register it.
    ///
    /// # Arguments
    ///
    /// * `loader` - Format-specific loader implementation
    /// * `renderer` - Backend the model uploads through
    /// * `path` - Asset file path
    pub fn load_model(
        &mut self,
        loader: &mut dyn ModelLoader,
        renderer: &Arc<Mutex<dyn Renderer>>,
        path: &Path,
    ) -> Result<DrawableKey> {
        let model = loader.load(renderer, path)?;
        engine_info!("nebula3d::ContentRegistry",
            "Loaded model '{}' from {}", model.name(), path.display());
        Ok(self.register(model))
    }

    /// Get a drawable handle by key
    pub fn drawable(&self, key: DrawableKey) -> Option<SharedDrawable> {
        self.drawables.get(key).map(Arc::clone)
    }

    /// Get a drawable handle by name (first registration of that name)
    pub fn find(&self, name: &str) -> Option<SharedDrawable> {
        self.names.get(name).and_then(|key| self.drawable(*key))
    }

    /// Remove a drawable. Returns false for unknown keys.
    ///
    /// Scene objects still holding the handle keep the data alive until
    /// they drop it; the registry no longer hands it out.
    pub fn remove(&mut self, key: DrawableKey) -> bool {
        if self.drawables.remove(key).is_none() {
            return false;
        }
        self.names.retain(|_, k| *k != key);
        true
    }

    /// Drop every drawable and empty the name index.
    pub fn clear(&mut self) {
        engine_debug!("nebula3d::ContentRegistry", "Clearing {} drawables", self.drawables.len());
        self.drawables.clear();
        self.names.clear();
    }

    /// Number of registered drawables
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "content_registry_tests.rs"]
mod tests;
