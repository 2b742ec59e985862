/*!
# Nebula 3D Engine

Core types for the Nebula3D educational rendering engine.

This crate provides the platform-agnostic scene layer of the engine:
named, transformable scene objects wrapping opaque drawable content, a
scene manager performing per-frame update and render passes with
distance-based visibility culling, and the collaborator seams the scene
layer consumes (renderer backend, content registry, lighting, camera).

## Architecture

- **SceneManager**: ordered collection of SceneObjects; per-frame
  update/render with distance culling and performance accounting
- **SceneObject**: named wrapper around one Drawable with an
  authoritative transform and optional auto-rotation
- **Drawable**: capability trait for anything renderable (meshes,
  composite models)
- **ContentRegistry**: arena owner of drawable resources
- **Renderer**: backend-facing trait; concrete GPU backends implement it

Backend implementations (OpenGL, Vulkan, etc.) live outside this crate
and plug in through the `Renderer` trait.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod renderer;
pub mod camera;
pub mod content;
pub mod scene;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are exported at the crate root
    }

    // Render sub-module with the backend-facing types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Content sub-module
    pub mod content {
        pub use crate::content::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
