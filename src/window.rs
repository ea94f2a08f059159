use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::frame::FrameInfo;
use crate::renderer::Renderer;
use crate::session::Session;
use crate::traits::WindowContext;

/// Wrapper around winit Window with imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame of the session's scene
    pub fn draw(
        &self,
        renderer: &mut Renderer,
        session: &Session,
        fps: f32,
        frame: &FrameInfo,
    ) -> Result<(), wgpu::SurfaceError> {
        renderer.render(&self.inner, session, frame, fps, self.aspect_ratio())
    }
}

impl WindowContext for Window {
    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn grab_cursor(&self, grab: bool) -> bool {
        if !grab {
            return self.inner.set_cursor_grab(CursorGrabMode::None).is_ok();
        }

        // Locked is unsupported on some platforms (X11, Windows); Confined is not on macOS
        self.inner
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined))
            .is_ok()
    }

    fn set_cursor_visible(&self, visible: bool) {
        self.inner.set_cursor_visible(visible);
    }
}
