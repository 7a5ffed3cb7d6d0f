//! Shared DTOs and pure domain rules of the storefront console.
//!
//! Everything here mirrors the JSON the store's REST API exchanges; nothing in
//! this crate performs I/O.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
