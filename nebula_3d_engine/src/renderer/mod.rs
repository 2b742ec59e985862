//! Renderer boundary module
//!
//! Defines the backend-facing trait the content layer draws through,
//! plus the opaque handle types that cross it.

mod renderer;
mod null_renderer;
#[cfg(test)]
pub(crate) mod mock_renderer;

pub use renderer::{
    Renderer, RendererStats,
    ShaderHandle, GeometryHandle, GeometryDesc,
};
pub use null_renderer::NullRenderer;
