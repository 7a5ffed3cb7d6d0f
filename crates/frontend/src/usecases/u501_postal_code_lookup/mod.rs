pub mod api;

pub use api::lookup;
