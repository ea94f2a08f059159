pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;

pub use clock::*;
pub use controller::*;
pub use gpu_context::*;
pub use input_adapter::*;
