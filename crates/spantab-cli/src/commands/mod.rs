pub mod config;
pub mod extract;
pub mod presets;
pub mod tables;
