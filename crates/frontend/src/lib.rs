//! Storefront console: list controllers, reports and store settings over the
//! store's REST API.

pub mod app;
pub mod cli;
pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;

pub use app::Console;
pub use shared::error::{ConsoleError, ConsoleResult};
