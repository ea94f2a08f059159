use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use fly_camera::cli::Cli;
use fly_camera::config::CameraSettings;
use fly_camera::core::{FpsCounter, WinitController};
use fly_camera::frame::FrameIterator;
use fly_camera::renderer::Renderer;
use fly_camera::session::Session;
use fly_camera::traits::{FrameSource, WindowContext};
use fly_camera::window::Window;

const WINDOW_TITLE: &str = "LearnOpenGL";

// === Application ===

struct App {
    cli: Cli,
    window: Option<Window>,
    renderer: Option<Renderer>,
    session: Session,
    controller: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
    cursor_captured: bool,
}

impl App {
    fn new(cli: Cli, settings: &CameraSettings) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            session: Session::from_settings(settings),
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(),
            cursor_captured: false,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<WinitWindow>> {
        let attributes = WinitWindow::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height));

        let window = event_loop
            .create_window(attributes)
            .context("Failed to create window")?;
        Ok(Arc::new(window))
    }

    fn capture_cursor(&mut self, captured: bool) {
        if let Some(window) = &self.window {
            let active = window.set_mouse_look(captured);
            if captured && !active {
                log::warn!("Cursor grab refused, click the window to retry mouse-look");
            }
            self.controller.set_mouse_look(active);
            self.cursor_captured = active;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };

        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        // All of this frame's input lands before the view matrix is read
        self.session.update(&self.controller, frame.delta);
        self.controller.reset_deltas();

        if self.session.exit_requested() {
            event_loop.exit();
            return;
        }

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match window.draw(renderer, &self.session, self.fps.fps(), &frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.recover_surface();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("{:#}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), !self.cli.no_ui)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(Window::new(window));
        self.renderer = Some(renderer);
        self.capture_cursor(true);
        self.frames.resync();

        log::info!("Camera mode: {}", self.session.mode());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // The overlay only sees input while the cursor is free
        if !self.cursor_captured {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window.inner(), &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(focused) => {
                self.controller.process_event(&event);
                self.capture_cursor(focused);
                if focused {
                    self.frames.resync();
                }
            }
            WindowEvent::MouseInput { .. } if !self.cursor_captured => self.capture_cursor(true),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => self.controller.process_event(&event),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.cursor_captured {
            self.controller.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = CameraSettings::resolve(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, &settings);

    log::info!("Controls: WASD move, mouse look, wheel zoom, Q FPS/FLY, Up/Down texture mix, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
