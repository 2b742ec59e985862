/// Renderer trait - backend-facing rendering interface
///
/// The scene and content layers never talk to a graphics API directly.
/// They upload geometry once, then issue draws against opaque handles.
/// Backend implementations (OpenGL, Vulkan, software, ...) live outside
/// this crate; the engine ships a headless NullRenderer for tools and
/// tests that need no GPU.

use glam::Mat4;
use crate::error::Result;

// ============================================================================
// Opaque handles
// ============================================================================

/// Opaque shader program token.
///
/// Created and understood only by the renderer backend; the scene layer
/// passes it through untouched and never inspects or sets uniforms itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(u64);

impl ShaderHandle {
    /// Wrap a raw backend identifier
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw backend identifier
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Opaque token for geometry uploaded to a renderer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(u64);

impl GeometryHandle {
    /// Wrap a raw backend identifier
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw backend identifier
    pub fn raw(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// Geometry description
// ============================================================================

/// CPU-side geometry data handed to a renderer backend for upload.
///
/// Plain arrays only; buffer formats, interleaving and residency are
/// backend decisions.
#[derive(Debug, Clone, Default)]
pub struct GeometryDesc {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals, parallel to `positions` (may be empty)
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex texture coordinates, parallel to `positions` (may be empty)
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices (None for non-indexed geometry)
    pub indices: Option<Vec<u32>>,
}

impl GeometryDesc {
    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Number of triangles this geometry draws
    pub fn triangle_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => (indices.len() / 3) as u32,
            None => (self.positions.len() / 3) as u32,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Renderer statistics for the current frame
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Backend-facing renderer interface.
///
/// Implemented by backend-specific renderers. The engine treats the
/// backend as a sink: geometry goes up once, draws reference it by
/// handle with a world matrix, and a frame is bracketed by
/// `begin_frame`/`end_frame`.
pub trait Renderer: Send + Sync {
    /// Upload geometry to the backend
    ///
    /// # Arguments
    ///
    /// * `desc` - CPU-side geometry data
    ///
    /// # Returns
    ///
    /// An opaque handle the backend resolves on draw
    fn upload_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryHandle>;

    /// Release geometry previously uploaded with `upload_geometry`
    ///
    /// # Arguments
    ///
    /// * `geometry` - Handle to release; unknown handles are an error
    fn destroy_geometry(&mut self, geometry: GeometryHandle) -> Result<()>;

    /// Begin a new frame, resetting per-frame statistics
    fn begin_frame(&mut self) -> Result<()>;

    /// Draw uploaded geometry with the given shader and world transform
    ///
    /// # Arguments
    ///
    /// * `shader` - Opaque shader program token
    /// * `geometry` - Geometry to draw
    /// * `world` - World transform matrix
    fn draw(&mut self, shader: ShaderHandle, geometry: GeometryHandle, world: &Mat4) -> Result<()>;

    /// End the current frame and present
    fn end_frame(&mut self) -> Result<()>;

    /// Get statistics about the current frame
    fn stats(&self) -> RendererStats;
}
