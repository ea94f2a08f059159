use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently held buttons
    pressed_keys: HashSet<Button>,
    /// Held buttons in press order (for get_down_keys)
    pressed_vec: Vec<Button>,
    /// Buttons that went down since the last reset
    just_pressed: HashSet<Button>,
    /// Last cursor position; None until the first sample arrives
    last_cursor: Option<(f32, f32)>,
    /// Look delta since last reset, y already inverted
    mouse_delta: (f32, f32),
    scroll_delta: f32,
    /// Prefer raw device motion over cursor positions once it has been seen
    raw_motion: bool,
    /// Pointer motion only turns the camera while this is set
    mouse_look: bool,
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            just_pressed: HashSet::new(),
            last_cursor: None,
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            raw_motion: false,
            mouse_look: true,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if !event.repeat {
                    self.process_key(event.physical_key, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.process_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => self.process_scroll(*delta),
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Raw mouse motion, delivered even while the cursor is captured
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.process_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn process_key(&mut self, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(keycode) = key else {
            return;
        };
        let Some(button) = Self::keycode_to_button(keycode) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                    self.just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Absolute cursor position in window pixels. The first sample only seeds
    /// the last position so the view does not jump when the cursor enters.
    pub fn process_cursor(&mut self, x: f32, y: f32) {
        if !self.mouse_look {
            return;
        }
        if let Some((last_x, last_y)) = self.last_cursor {
            if !self.raw_motion {
                self.mouse_delta.0 += x - last_x;
                // Window y grows downward, pitch grows upward
                self.mouse_delta.1 += last_y - y;
            }
        }
        self.last_cursor = Some((x, y));
    }

    /// Relative device motion; takes over from cursor deltas once seen
    pub fn process_motion(&mut self, dx: f32, dy: f32) {
        if !self.mouse_look {
            return;
        }
        self.raw_motion = true;
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 -= dy;
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
    }

    /// Reset per-frame state (deltas, edge presses).
    /// Call this at the end of each frame after the session consumed input.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
        self.just_pressed.clear();
    }

    /// Drop held keys, e.g. when the window loses focus and releases go elsewhere
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
        self.last_cursor = None;
    }

    /// Turn pointer-driven look on or off. A free cursor (overlay, failed
    /// grab) must not steer the camera; re-enabling starts from a fresh
    /// cursor sample so the view does not jump.
    pub fn set_mouse_look(&mut self, enabled: bool) {
        self.mouse_look = enabled;
        self.last_cursor = None;
        self.mouse_delta = (0.0, 0.0);
    }

    pub fn last_cursor(&self) -> Option<(f32, f32)> {
        self.last_cursor
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::Forward),
            KeyCode::KeyS => Some(Button::Backward),
            KeyCode::KeyA => Some(Button::StrafeLeft),
            KeyCode::KeyD => Some(Button::StrafeRight),
            KeyCode::KeyQ => Some(Button::ToggleMode),
            KeyCode::ArrowUp => Some(Button::MixUp),
            KeyCode::ArrowDown => Some(Button::MixDown),
            KeyCode::Escape => Some(Button::Exit),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
