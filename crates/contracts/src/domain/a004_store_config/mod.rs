pub mod aggregate;
pub mod postal_code;

pub use aggregate::{StoreConfig, BRAZILIAN_STATES};
pub use postal_code::{Address, PostalCode};
