/// Mock renderer for unit tests (no GPU required)
///
/// Records every call as plain data so content and scene tests can
/// assert on exactly what was drawn, with which shader and transform.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_bail;
use super::renderer::{Renderer, RendererStats, ShaderHandle, GeometryHandle, GeometryDesc};

/// A single recorded draw call
#[derive(Debug, Clone)]
pub struct RecordedDraw {
    pub shader: ShaderHandle,
    pub geometry: GeometryHandle,
    pub world: Mat4,
}

/// Recording renderer backend for tests
pub struct MockRenderer {
    /// Triangle count per live geometry handle
    geometries: FxHashMap<u64, u32>,
    next_geometry_id: u64,
    stats: RendererStats,
    /// Every draw call since construction, in order
    pub draws: Vec<RecordedDraw>,
    /// When set, every draw fails with a backend error
    pub fail_draws: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            geometries: FxHashMap::default(),
            next_geometry_id: 0,
            stats: RendererStats::default(),
            draws: Vec::new(),
            fail_draws: false,
        }
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }
}

impl Renderer for MockRenderer {
    fn upload_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryHandle> {
        if desc.positions.is_empty() {
            engine_bail!("nebula3d::MockRenderer", "Geometry has no vertices");
        }

        let id = self.next_geometry_id;
        self.next_geometry_id += 1;
        self.geometries.insert(id, desc.triangle_count());
        Ok(GeometryHandle::from_raw(id))
    }

    fn destroy_geometry(&mut self, geometry: GeometryHandle) -> Result<()> {
        if self.geometries.remove(&geometry.raw()).is_none() {
            engine_bail!("nebula3d::MockRenderer",
                "Destroying unknown geometry handle {}", geometry.raw());
        }
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.stats = RendererStats::default();
        Ok(())
    }

    fn draw(&mut self, shader: ShaderHandle, geometry: GeometryHandle, world: &Mat4) -> Result<()> {
        if self.fail_draws {
            engine_bail!("nebula3d::MockRenderer", "Injected draw failure");
        }

        let triangles = match self.geometries.get(&geometry.raw()) {
            Some(count) => *count,
            None => engine_bail!("nebula3d::MockRenderer",
                "Drawing unknown geometry handle {}", geometry.raw()),
        };

        self.stats.draw_calls += 1;
        self.stats.triangles += triangles;
        self.draws.push(RecordedDraw { shader, geometry, world: *world });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}
