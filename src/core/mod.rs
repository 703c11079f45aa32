pub mod app;
pub mod config;
pub mod input;
pub mod item;
pub mod preview;
pub mod transform;
