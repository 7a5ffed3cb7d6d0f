pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod list;
pub mod number_format;

#[cfg(test)]
pub mod testing;
