/// Mock drawable for scene tests (no content layer required)
///
/// Records transform writes and render calls as plain data so tests
/// can assert on exactly what the scene layer pushed down.

use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use crate::renderer::ShaderHandle;
use super::drawable::{Drawable, SharedDrawable, Transform, AABB};

pub(crate) struct MockDrawable {
    pub name: String,
    pub transform: Transform,
    pub bounding_box: AABB,
    /// Shader handle of every render call, in order
    pub render_log: Vec<ShaderHandle>,
    /// Every transform written via set_transform, in order
    pub transform_log: Vec<Transform>,
    /// When set, every render fails with a backend error
    pub fail_render: bool,
}

impl MockDrawable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::IDENTITY,
            bounding_box: AABB { min: Vec3::splat(-0.5), max: Vec3::splat(0.5) },
            render_log: Vec::new(),
            transform_log: Vec::new(),
            fail_render: false,
        }
    }

    pub fn with_transform(name: &str, transform: Transform) -> Self {
        Self {
            transform,
            ..Self::new(name)
        }
    }

    /// Wrap into the handle type scene objects hold
    pub fn into_shared(self) -> SharedDrawable {
        Arc::new(Mutex::new(self))
    }
}

impl Drawable for MockDrawable {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.transform_log.push(transform);
    }

    fn bounding_box(&self) -> AABB {
        self.bounding_box
    }

    fn render(&mut self, shader: ShaderHandle) -> Result<()> {
        if self.fail_render {
            engine_bail!("nebula3d::MockDrawable", "Injected render failure");
        }
        self.render_log.push(shader);
        Ok(())
    }
}
