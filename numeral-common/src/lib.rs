pub mod error;
pub mod settings;
pub mod types;
pub mod value;
