use glam::{Mat4, Vec3};
use crate::config::CameraSettings;
use crate::traits::CameraController;

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Discrete movement requested by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// FPS keeps the camera on the horizontal plane, FLY moves along the true view basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    #[default]
    Fps,
    Fly,
}

impl CameraMode {
    pub const fn toggled(self) -> Self {
        match self {
            CameraMode::Fps => CameraMode::Fly,
            CameraMode::Fly => CameraMode::Fps,
        }
    }
}

impl std::fmt::Display for CameraMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraMode::Fps => write!(f, "FPS"),
            CameraMode::Fly => write!(f, "FLY"),
        }
    }
}

/// Euler-angle camera. Angles are kept in degrees.
///
/// `front`, `right` and `up` are derived from `yaw`, `pitch` and `world_up`
/// and are only ever written by `update_vectors`.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    mode: CameraMode,
}

impl Camera {
    /// `world_up` must be non-zero; it is normalized on the way in.
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: world_up.normalize(),
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            mode: CameraMode::default(),
        };
        camera.update_vectors();
        camera
    }

    pub fn with_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(settings.position),
            Vec3::from_array(settings.world_up),
        );
        camera.yaw = settings.yaw;
        camera.pitch = settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        camera.movement_speed = settings.movement_speed;
        camera.mouse_sensitivity = settings.mouse_sensitivity;
        camera.zoom = settings.zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        camera.mode = settings.mode;
        camera.update_vectors();
        camera
    }

    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let mut displacement = match direction {
            CameraMovement::Forward => self.front * velocity,
            CameraMovement::Backward => -self.front * velocity,
            CameraMovement::Left => -self.right * velocity,
            CameraMovement::Right => self.right * velocity,
        };

        // Project after scaling, no renormalize: pitched FPS walking slows by cos(pitch)
        if self.mode == CameraMode::Fps {
            displacement -= self.world_up * displacement.dot(self.world_up);
        }

        self.position += displacement;
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrows or widens the field of view; this is not a dolly.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective with 0..1 depth, field of view taken from `zoom`
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> CameraMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y)
    }
}

impl CameraController for Camera {
    fn view_matrix(&self) -> Mat4 {
        Camera::view_matrix(self)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Camera::projection_matrix(self, aspect, NEAR_PLANE, FAR_PLANE)
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "expected {:?}, got {:?}", b, a);
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::default();
        assert_vec_near(camera.front(), Vec3::NEG_Z);
        assert_vec_near(camera.right(), Vec3::X);
        assert_vec_near(camera.up(), Vec3::Y);
        assert_eq!(camera.mode(), CameraMode::Fps);
    }

    #[test]
    fn world_up_is_normalized() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0));
        assert!((camera.world_up().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn pitch_clamps_at_limit() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_mouse_movement(0.0, -50_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_passes_limit() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut camera = Camera::default();
        for _ in 0..10 {
            camera.process_mouse_movement(1000.0, 0.0, true);
        }
        assert!((camera.yaw() - (YAW + 1000.0)).abs() < 1e-3);
    }

    #[test]
    fn scroll_saturates() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(-20.0);
        assert_eq!(camera.zoom(), ZOOM_MAX);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), ZOOM_MIN);
    }

    #[test]
    fn toggle_mode_flips_both_ways() {
        let mut camera = Camera::default();
        assert_eq!(camera.toggle_mode(), CameraMode::Fly);
        assert_eq!(camera.toggle_mode(), CameraMode::Fps);
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut camera = Camera::default();
        camera.process_movement(CameraMovement::Right, 1.0);
        assert_vec_near(camera.position(), Vec3::new(SPEED, 0.0, 3.0));
        camera.process_movement(CameraMovement::Left, 2.0);
        assert_vec_near(camera.position(), Vec3::new(-SPEED, 0.0, 3.0));
    }

    #[test]
    fn fps_forward_speed_scales_with_cos_pitch() {
        let mut camera = Camera::default();
        // 45 degrees of pitch with the default sensitivity
        camera.process_mouse_movement(0.0, 450.0, true);
        let start = camera.position();
        camera.process_movement(CameraMovement::Forward, 1.0);
        let travelled = (camera.position() - start).length();
        let expected = SPEED * 45.0_f32.to_radians().cos();
        assert!((travelled - expected).abs() < 1e-4);
    }

    #[test]
    fn settings_values_are_clamped() {
        let settings = CameraSettings {
            zoom: 300.0,
            pitch: -120.0,
            ..CameraSettings::default()
        };
        let camera = Camera::with_settings(&settings);
        assert_eq!(camera.zoom(), ZOOM_MAX);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn mode_display() {
        assert_eq!(CameraMode::Fps.to_string(), "FPS");
        assert_eq!(CameraMode::Fly.to_string(), "FLY");
    }

    #[test]
    fn controller_trait_uses_default_planes() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(5.0);
        let controller: &dyn CameraController = &camera;

        let expected = Mat4::perspective_rh(40.0_f32.to_radians(), 1.5, NEAR_PLANE, FAR_PLANE);
        assert!(controller.projection_matrix(1.5).abs_diff_eq(expected, EPSILON));
        assert_eq!(controller.view_matrix(), camera.view_matrix());
        assert_vec_near(controller.position(), Vec3::new(0.0, 0.0, 3.0));
    }
}
