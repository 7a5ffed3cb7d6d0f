//! Common types and traits for all store records

pub mod aggregate_id;
pub mod aggregate_root;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
