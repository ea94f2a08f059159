use glam::{Mat4, Vec3};

/// What the renderer reads from a camera each frame
pub trait CameraController {
    /// World-to-view transform, recomputed on every call
    fn view_matrix(&self) -> Mat4;

    /// Perspective projection for the given width/height ratio
    fn projection_matrix(&self, aspect: f32) -> Mat4;

    /// Eye position in world space
    fn position(&self) -> Vec3;
}
