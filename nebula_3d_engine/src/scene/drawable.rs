/// Drawable capability boundary for the scene system.
///
/// Anything renderable — a single mesh or a composite model — enters
/// the scene through this trait. The scene layer never knows what is
/// behind it: it reads and writes a transform, asks for a bounding box,
/// and delegates drawing with an opaque shader token.

use std::sync::{Arc, Mutex};
use glam::{Vec3, Quat, Mat4, EulerRot};
use crate::error::Result;
use crate::renderer::ShaderHandle;

// ===== TRANSFORM =====

/// Decomposed object transform.
///
/// Rotation is stored as Euler angles in degrees (XYZ application
/// order), matching how the scene layer animates and wraps angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub position: Vec3,
    /// Euler angles in degrees, applied in XYZ order
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Compose into a world matrix (scale, then rotation, then translation).
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x.to_radians(),
            self.rotation.y.to_radians(),
            self.rotation.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ===== AABB =====

/// Axis-Aligned Bounding Box in local space
///
/// Loaders report one per drawable; the scene layer carries it through
/// untouched (visibility is a distance test on positions, not boxes).
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Smallest AABB enclosing both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

// ===== DRAWABLE =====

/// Capability trait for renderable content.
///
/// Implementations own (or reference) the actual geometry and issue
/// their draws through the renderer boundary. The transform fields are
/// a write-through cache: the owning SceneObject overwrites them right
/// before every render, so a drawable shared between two scene objects
/// is drawn with whichever transform was written last.
pub trait Drawable: Send {
    /// Content name (used as the default SceneObject name)
    fn name(&self) -> &str;

    /// Current cached transform
    fn transform(&self) -> Transform;

    /// Overwrite the cached transform
    fn set_transform(&mut self, transform: Transform);

    /// Local-space bounding box
    fn bounding_box(&self) -> AABB;

    /// Draw with the given shader program and the cached transform.
    ///
    /// Faults from the backend propagate untouched; the scene layer
    /// never swallows them.
    fn render(&mut self, shader: ShaderHandle) -> Result<()>;
}

/// Non-owning handle to a drawable resource.
///
/// The ContentRegistry is the resource owner; scene objects hold these
/// references. Two scene objects holding the same handle (an explicit
/// registry handout, or `SceneObject::clone_object`) share one
/// transform cache — see the sharing note on [`Drawable`].
pub type SharedDrawable = Arc<Mutex<dyn Drawable>>;

#[cfg(test)]
#[path = "drawable_tests.rs"]
mod tests;
