//! Per-run application state and the input dispatch that drives it.
//!
//! A `Session` owns the camera plus the small amount of viewer state around
//! it. Decoded input arrives through a `Controller` once per frame, before
//! the frame queries the view matrix.

use crate::camera::{Camera, CameraMode, CameraMovement};
use crate::config::CameraSettings;
use crate::core::{Button, Controller};

/// Mix change per frame while an arrow key is held
pub const MIX_STEP: f32 = 0.01;

const MOVEMENT_BINDINGS: [(Button, CameraMovement); 4] = [
    (Button::Forward, CameraMovement::Forward),
    (Button::Backward, CameraMovement::Backward),
    (Button::StrafeLeft, CameraMovement::Left),
    (Button::StrafeRight, CameraMovement::Right),
];

#[derive(Debug, Clone)]
pub struct Session {
    camera: Camera,
    mix_value: f32,
    exit_requested: bool,
}

impl Session {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            mix_value: 0.0,
            exit_requested: false,
        }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(Camera::with_settings(settings))
    }

    /// Apply one frame of input. Order: mode toggle, movement, look, zoom, mix, exit.
    pub fn update(&mut self, controller: &dyn Controller, delta_time: f32) {
        if controller.just_pressed(Button::ToggleMode) {
            let mode = self.camera.toggle_mode();
            log::info!("Camera mode: {}", mode);
        }

        for (button, movement) in MOVEMENT_BINDINGS {
            if controller.is_down(button) {
                self.camera.process_movement(movement, delta_time);
            }
        }

        let (dx, dy) = controller.mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_mouse_movement(dx, dy, true);
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        if controller.is_down(Button::MixUp) {
            self.mix_value = (self.mix_value + MIX_STEP).min(1.0);
        }
        if controller.is_down(Button::MixDown) {
            self.mix_value = (self.mix_value - MIX_STEP).max(0.0);
        }

        if controller.is_down(Button::Exit) {
            self.exit_requested = true;
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn mix_value(&self) -> f32 {
        self.mix_value
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScriptedController {
        held: Vec<Button>,
        fresh: Vec<Button>,
        mouse: (f32, f32),
        scroll: f32,
    }

    impl Controller for ScriptedController {
        fn is_down(&self, button: Button) -> bool {
            self.held.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.held
        }

        fn just_pressed(&self, button: Button) -> bool {
            self.fresh.contains(&button)
        }

        fn mouse_delta(&self) -> (f32, f32) {
            self.mouse
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    #[test]
    fn idle_frame_changes_nothing() {
        let mut session = Session::default();
        let before = session.camera().view_matrix();
        session.update(&ScriptedController::default(), 0.016);
        assert_eq!(session.camera().view_matrix(), before);
        assert_eq!(session.mix_value(), 0.0);
        assert!(!session.exit_requested());
    }

    #[test]
    fn toggle_fires_once_per_edge() {
        let mut session = Session::default();
        let controller = ScriptedController {
            held: vec![Button::ToggleMode],
            fresh: vec![Button::ToggleMode],
            ..Default::default()
        };
        session.update(&controller, 0.016);
        assert_eq!(session.mode(), CameraMode::Fly);

        // Held but no new edge
        let controller = ScriptedController {
            held: vec![Button::ToggleMode],
            ..Default::default()
        };
        session.update(&controller, 0.016);
        assert_eq!(session.mode(), CameraMode::Fly);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut session = Session::default();
        let start = session.camera().position();
        let controller = ScriptedController {
            held: vec![Button::Forward, Button::Backward],
            ..Default::default()
        };
        session.update(&controller, 0.5);
        assert!((session.camera().position() - start).length() < 1e-5);
    }

    #[test]
    fn forward_key_moves_by_speed_times_delta() {
        let mut session = Session::default();
        let controller = ScriptedController {
            held: vec![Button::Forward],
            ..Default::default()
        };
        session.update(&controller, 0.4);
        // Default camera looks down -Z from z = 3
        assert!((session.camera().position().z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn mouse_and_scroll_reach_camera() {
        let mut session = Session::default();
        let controller = ScriptedController {
            mouse: (100.0, 50.0),
            scroll: 5.0,
            ..Default::default()
        };
        session.update(&controller, 0.016);
        let camera = session.camera();
        assert!((camera.yaw() - (-80.0)).abs() < 1e-4);
        assert!((camera.pitch() - 5.0).abs() < 1e-4);
        assert_eq!(camera.zoom(), 40.0);
    }

    #[test]
    fn mix_value_saturates() {
        let mut session = Session::default();
        let up = ScriptedController {
            held: vec![Button::MixUp],
            ..Default::default()
        };
        for _ in 0..150 {
            session.update(&up, 0.016);
        }
        assert_eq!(session.mix_value(), 1.0);

        let down = ScriptedController {
            held: vec![Button::MixDown],
            ..Default::default()
        };
        for _ in 0..150 {
            session.update(&down, 0.016);
        }
        assert_eq!(session.mix_value(), 0.0);
    }

    #[test]
    fn exit_key_sets_flag() {
        let mut session = Session::default();
        let controller = ScriptedController {
            held: vec![Button::Exit],
            ..Default::default()
        };
        session.update(&controller, 0.016);
        assert!(session.exit_requested());
    }
}
