pub mod aggregate;
pub mod stock_status;

pub use aggregate::{Product, ProductDto, ProductId};
pub use stock_status::{classify, StockStatus, LOW_STOCK_THRESHOLD};
