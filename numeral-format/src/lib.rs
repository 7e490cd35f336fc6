pub mod config;
pub mod currency;
pub mod display;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod number;
