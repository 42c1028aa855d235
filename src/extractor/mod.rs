// file: src/extractor/mod.rs
// description: vehicle name extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod vehicle;

pub use vehicle::{
    VehicleNameParser, all_brands, extract_brand, extract_lineup, extract_model_name,
    extract_trim, normalize_brand, parse_vehicle_name,
};
