/// Content-level model: a named composite of meshes.
///
/// A Model is the "many meshes, one object" case an asset loader
/// produces: each part keeps a local transform relative to the model,
/// and the model draws every part with `model_matrix * part_matrix`.
/// Together with Mesh this makes renderable content an explicit
/// two-variant family — scene objects wrap either, through the same
/// Drawable capability, with no null-field dispatch.

use glam::Vec3;
use crate::error::Result;
use crate::renderer::ShaderHandle;
use crate::scene::{Drawable, Transform, AABB};
use super::mesh::Mesh;

/// A composite drawable made of mesh parts.
pub struct Model {
    name: String,
    /// Mesh parts; each part's transform is local to the model
    parts: Vec<Mesh>,
    /// Model transform (the write-through cache scene objects drive)
    transform: Transform,
    /// Union of the parts' boxes, in model-local space
    bounding_box: AABB,
}

impl Model {
    /// Create a model from mesh parts.
    ///
    /// The bounding box is computed once, as the union of each part's
    /// box transformed by that part's local transform.
    ///
    /// # Arguments
    ///
    /// * `name` - Content name
    /// * `parts` - Mesh parts with model-local transforms
    /// * `transform` - Initial model transform
    pub fn new(name: impl Into<String>, parts: Vec<Mesh>, transform: Transform) -> Self {
        let bounding_box = Self::merged_bounds(&parts);
        Self {
            name: name.into(),
            parts,
            transform,
            bounding_box,
        }
    }

    /// Union of part boxes in model-local space.
    ///
    /// An empty model gets a degenerate box at the origin.
    fn merged_bounds(parts: &[Mesh]) -> AABB {
        parts.iter()
            .map(|part| part.bounding_box().transformed(&part.transform().matrix()))
            .reduce(|a, b| a.union(&b))
            .unwrap_or(AABB { min: Vec3::ZERO, max: Vec3::ZERO })
    }

    /// The mesh parts, in draw order
    pub fn parts(&self) -> &[Mesh] {
        &self.parts
    }

    /// Number of mesh parts
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Drawable for Model {
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
        let model_matrix = self.transform.matrix();
        for part in &self.parts {
            part.draw_with(&(model_matrix * part.transform().matrix()), shader)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
