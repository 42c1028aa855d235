// file: src/models/vehicle.rs
// description: structured fields derived from a raw vehicle name
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVehicle {
    pub brand: String,
    pub model_name: String,
    pub trim: Option<String>,
    pub lineup: Option<String>,
    pub original_name: String,
}

impl ParsedVehicle {
    pub fn is_unknown_brand(&self) -> bool {
        self.brand == crate::reference::UNKNOWN_BRAND
    }
}
