pub mod u501_postal_code_lookup;
pub mod u502_generate_report;
