pub mod request;

pub use request::{AvailableReport, ReportKind};
