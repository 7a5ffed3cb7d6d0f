pub mod api;
pub mod loader;

pub use loader::StatsLoader;
