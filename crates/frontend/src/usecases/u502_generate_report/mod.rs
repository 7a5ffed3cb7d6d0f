pub mod api;
pub mod builder;

pub use api::{fetch_available, generate, GeneratedReport};
pub use builder::ReportFilterBuilder;
