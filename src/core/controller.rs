/// Logical input identifier, decoupled from the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    ToggleMode,
    MixUp,
    MixDown,
    Exit,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Forward,
        Button::Backward,
        Button::StrafeLeft,
        Button::StrafeRight,
        Button::ToggleMode,
        Button::MixUp,
        Button::MixDown,
        Button::Exit,
    ];
}

/// Controller - per-frame view of decoded input
pub trait Controller {
    /// Check if button is currently held
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently held buttons, in press order
    fn get_down_keys(&self) -> &[Button];

    /// Button went down since the last delta reset
    fn just_pressed(&self, button: Button) -> bool;

    /// Accumulated look delta (x right, y up) since the last reset
    fn mouse_delta(&self) -> (f32, f32);

    /// Accumulated vertical scroll since the last reset
    fn scroll_delta(&self) -> f32;
}
