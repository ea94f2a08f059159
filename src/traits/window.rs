/// What the app loop needs from the window hosting the camera view
pub trait WindowContext {
    fn request_redraw(&self);

    /// Drawable size in physical pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Width over height; 1.0 while minimized
    fn aspect_ratio(&self) -> f32 {
        match self.framebuffer_size() {
            (width, height) if width > 0 && height > 0 => width as f32 / height as f32,
            _ => 1.0,
        }
    }

    /// Grab or release the cursor. Returns false when the platform refuses
    /// every grab mode.
    fn grab_cursor(&self, grab: bool) -> bool;

    fn set_cursor_visible(&self, visible: bool);

    /// Enter or leave mouse-look and return whether it is now active.
    /// A refused grab leaves the cursor visible and free.
    fn set_mouse_look(&self, enabled: bool) -> bool {
        let active = self.grab_cursor(enabled) && enabled;
        self.set_cursor_visible(!active);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeWindow {
        size: (u32, u32),
        grab_supported: bool,
        grabbed: Cell<bool>,
        cursor_visible: Cell<bool>,
    }

    impl FakeWindow {
        fn new(size: (u32, u32), grab_supported: bool) -> Self {
            Self {
                size,
                grab_supported,
                grabbed: Cell::new(false),
                cursor_visible: Cell::new(true),
            }
        }
    }

    impl WindowContext for FakeWindow {
        fn request_redraw(&self) {}

        fn framebuffer_size(&self) -> (u32, u32) {
            self.size
        }

        fn grab_cursor(&self, grab: bool) -> bool {
            if grab && !self.grab_supported {
                return false;
            }
            self.grabbed.set(grab);
            true
        }

        fn set_cursor_visible(&self, visible: bool) {
            self.cursor_visible.set(visible);
        }
    }

    #[test]
    fn aspect_follows_size() {
        assert_eq!(FakeWindow::new((800, 600), true).aspect_ratio(), 800.0 / 600.0);
    }

    #[test]
    fn minimized_window_has_unit_aspect() {
        assert_eq!(FakeWindow::new((0, 0), true).aspect_ratio(), 1.0);
        assert_eq!(FakeWindow::new((640, 0), true).aspect_ratio(), 1.0);
    }

    #[test]
    fn mouse_look_grabs_and_hides_cursor() {
        let window = FakeWindow::new((800, 600), true);
        assert!(window.set_mouse_look(true));
        assert!(window.grabbed.get());
        assert!(!window.cursor_visible.get());

        assert!(!window.set_mouse_look(false));
        assert!(!window.grabbed.get());
        assert!(window.cursor_visible.get());
    }

    #[test]
    fn refused_grab_leaves_mouse_look_off() {
        let window = FakeWindow::new((800, 600), false);
        assert!(!window.set_mouse_look(true));
        assert!(!window.grabbed.get());
        assert!(window.cursor_visible.get());
    }
}
