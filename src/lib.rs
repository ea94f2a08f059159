pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod texture;
pub mod traits;
pub mod types;
pub mod window;

pub use camera::{Camera, CameraMode, CameraMovement};
pub use config::CameraSettings;
pub use session::Session;
