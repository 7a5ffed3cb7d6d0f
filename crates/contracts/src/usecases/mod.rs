pub mod u502_generate_report;
