pub mod api;
pub mod list;

pub use list::{SaleListController, SalesScreen};
