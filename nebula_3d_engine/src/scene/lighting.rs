/// Lighting strategies.
///
/// A SceneLighting collaborator pushes lighting state for the frame
/// before scene objects are drawn. The scene layer computes no lighting
/// math itself: it forwards the shader handle and the viewer position
/// and lets the collaborator set whatever uniforms it owns.

use glam::Vec3;
use crate::error::Result;
use crate::renderer::ShaderHandle;

/// Strategy for applying per-frame lighting state.
///
/// Called once at the start of every SceneManager render pass.
/// `&mut self` allows stateful implementations (e.g. animated lights)
/// to evolve across frames.
pub trait SceneLighting: Send {
    /// Apply lighting for this frame's render pass.
    fn apply(&mut self, shader: ShaderHandle, viewer_position: Vec3) -> Result<()>;
}

/// No-op lighting — applies nothing.
///
/// Placeholder for scenes rendered with unlit shaders.
pub struct NullLighting;

impl NullLighting {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullLighting {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLighting for NullLighting {
    fn apply(&mut self, _shader: ShaderHandle, _viewer_position: Vec3) -> Result<()> {
        Ok(())
    }
}
