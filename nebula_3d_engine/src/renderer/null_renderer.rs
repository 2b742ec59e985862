/// Null renderer — headless backend that draws nothing.
///
/// Validates handles and keeps statistics honest, but touches no GPU.
/// Suitable for tools, demos and benchmarks that need the full engine
/// flow without a graphics context.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_bail;
use super::renderer::{Renderer, RendererStats, ShaderHandle, GeometryHandle, GeometryDesc};

/// Headless renderer backend.
///
/// Uploaded geometry is tracked only by handle and triangle count, so
/// draw-call and triangle statistics behave exactly as they would on a
/// real backend.
pub struct NullRenderer {
    /// Triangle count per live geometry handle
    geometries: FxHashMap<u64, u32>,
    /// Next geometry id to hand out
    next_geometry_id: u64,
    /// Per-frame statistics (reset by begin_frame)
    stats: RendererStats,
}

impl NullRenderer {
    /// Create a new empty null renderer
    pub fn new() -> Self {
        Self {
            geometries: FxHashMap::default(),
            next_geometry_id: 0,
            stats: RendererStats::default(),
        }
    }

    /// Number of live geometry uploads
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NullRenderer {
    fn upload_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryHandle> {
        if desc.positions.is_empty() {
            engine_bail!("nebula3d::NullRenderer", "Geometry has no vertices");
        }

        let id = self.next_geometry_id;
        self.next_geometry_id += 1;
        self.geometries.insert(id, desc.triangle_count());
        Ok(GeometryHandle::from_raw(id))
    }

    fn destroy_geometry(&mut self, geometry: GeometryHandle) -> Result<()> {
        if self.geometries.remove(&geometry.raw()).is_none() {
            engine_bail!("nebula3d::NullRenderer",
                "Destroying unknown geometry handle {}", geometry.raw());
        }
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.stats = RendererStats::default();
        Ok(())
    }

    fn draw(&mut self, _shader: ShaderHandle, geometry: GeometryHandle, _world: &Mat4) -> Result<()> {
        let triangles = match self.geometries.get(&geometry.raw()) {
            Some(count) => *count,
            None => engine_bail!("nebula3d::NullRenderer",
                "Drawing unknown geometry handle {}", geometry.raw()),
        };

        self.stats.draw_calls += 1;
        self.stats.triangles += triangles;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "null_renderer_tests.rs"]
mod tests;
