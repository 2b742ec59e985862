/// Model loading seam.
///
/// Asset formats (OBJ and friends), material resolution and texture
/// auto-detection live behind this trait, outside the engine crate. A
/// loader hands back a ready-to-render Model — geometry uploaded,
/// parts assembled, bounding boxes computed — and the registry takes
/// ownership from there.

use std::path::Path;
use std::sync::{Arc, Mutex};
use crate::error::Result;
use crate::renderer::Renderer;
use super::model::Model;

/// Strategy for turning an asset file into a renderable Model.
///
/// `&mut self` allows stateful implementations (caches, import
/// settings) to persist across loads.
pub trait ModelLoader: Send {
    /// Load a model file.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Backend the model's meshes upload through
    /// * `path` - Asset file path
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, parsed, or
    /// uploaded; the registry logs and propagates it.
    fn load(&mut self, renderer: &Arc<Mutex<dyn Renderer>>, path: &Path) -> Result<Model>;
}
