pub mod camera;
pub mod frame;
pub mod window;

pub use camera::*;
pub use frame::*;
pub use window::*;
