// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod listing;
pub mod vehicle;

pub use listing::{BrandFilter, NormalizedListing, RawListing, VehicleGroup};
pub use vehicle::ParsedVehicle;
