/// Content-level mesh: a single named piece of renderable geometry.
///
/// A Mesh uploads its geometry to the renderer backend once, at
/// construction, and afterwards draws by handle. Its transform fields
/// are a write-through cache for the owning scene object (see the
/// Drawable docs); standalone meshes can also be drawn with them
/// directly.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, ShaderHandle, GeometryHandle, GeometryDesc};
use crate::scene::{Drawable, Transform, AABB};

/// Descriptor for creating a Mesh
pub struct MeshDesc {
    /// Content name
    pub name: String,
    /// CPU-side geometry to upload
    pub geometry: GeometryDesc,
    /// Local-space bounding box (loaders compute this from the geometry)
    pub bounding_box: AABB,
    /// Initial transform
    pub transform: Transform,
}

/// A single renderable mesh.
///
/// Holds its renderer reference so it can draw itself; the geometry is
/// released back to the backend when the last handle to this mesh drops.
pub struct Mesh {
    name: String,
    renderer: Arc<Mutex<dyn Renderer>>,
    geometry: GeometryHandle,
    bounding_box: AABB,
    transform: Transform,
}

impl Mesh {
    /// Create a mesh, uploading its geometry to the backend.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Backend the mesh draws through
    /// * `desc` - Mesh descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails or the renderer lock is poisoned.
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>, desc: MeshDesc) -> Result<Self> {
        let geometry = {
            let mut renderer_lock = renderer.lock()
                .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))?;
            renderer_lock.upload_geometry(&desc.geometry)?
        };

        Ok(Self {
            name: desc.name,
            renderer,
            geometry,
            bounding_box: desc.bounding_box,
            transform: desc.transform,
        })
    }

    /// Backend handle of the uploaded geometry
    pub fn geometry(&self) -> GeometryHandle {
        self.geometry
    }

    /// Issue one draw with an explicit world matrix.
    ///
    /// Used by Model to draw parts with composed transforms; the mesh's
    /// own cached transform is ignored.
    pub(crate) fn draw_with(&self, world: &Mat4, shader: ShaderHandle) -> Result<()> {
        let mut renderer = self.renderer.lock()
            .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))?;
        renderer.draw(shader, self.geometry, world)
    }
}

impl Drawable for Mesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn bounding_box(&self) -> AABB {
        self.bounding_box
    }

    fn render(&mut self, shader: ShaderHandle) -> Result<()> {
        self.draw_with(&self.transform.matrix(), shader)
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        // Release backend geometry; a shut-down backend is not an error here
        if let Ok(mut renderer) = self.renderer.lock() {
            let _ = renderer.destroy_geometry(self.geometry);
        }
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
