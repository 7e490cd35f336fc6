pub mod classify;
pub mod render;
pub mod settings;
pub mod transform;
pub mod visualization;
