//! Content module
//!
//! Concrete drawable content (meshes, composite models), the loader
//! seam that produces it, and the registry that owns it.

mod mesh;
mod model;
mod model_loader;
mod content_registry;

pub use mesh::{Mesh, MeshDesc};
pub use model::Model;
pub use model_loader::ModelLoader;
pub use content_registry::{ContentRegistry, DrawableKey};
