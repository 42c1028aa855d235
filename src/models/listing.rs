// file: src/models/listing.rs
// description: raw and normalized inventory listings, groups and brand filters
// reference: internal data structures

use crate::models::ParsedVehicle;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One inventory row as exported by a dealer feed or finance-company catalog.
/// Both snake_case and camelCase field names are accepted; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "vehicleName")]
    pub vehicle_name: String,
    #[serde(default)]
    pub lineup: Option<String>,
    #[serde(default, alias = "rawVehicleName")]
    pub raw_vehicle_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub trim: Option<String>,
    #[serde(default, alias = "productType")]
    pub product_type: Option<String>,
    /// Monthly payment in won.
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default, alias = "exteriorColor")]
    pub exterior_color: Option<String>,
    #[serde(default, alias = "interiorColor")]
    pub interior_color: Option<String>,
}

impl RawListing {
    pub fn new(vehicle_name: impl Into<String>) -> Self {
        Self {
            vehicle_name: vehicle_name.into(),
            ..Self::default()
        }
    }

    pub fn with_lineup(mut self, lineup: impl Into<String>) -> Self {
        self.lineup = Some(lineup.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub id: Option<String>,
    pub source: Option<String>,
    pub source_logo: Option<String>,
    pub brand: String,
    pub model_name: String,
    pub trim: Option<String>,
    pub lineup: String,
    pub raw_lineup: Option<String>,
    pub parsed: ParsedVehicle,
    pub product_type: Option<String>,
    pub price: Option<u64>,
    pub exterior_color: Option<String>,
    pub interior_color: Option<String>,
    pub fingerprint: String,
}

impl NormalizedListing {
    pub fn new(
        raw: RawListing,
        brand: String,
        model_name: String,
        trim: Option<String>,
        lineup: String,
        parsed: ParsedVehicle,
    ) -> Self {
        let fingerprint = Self::compute_fingerprint(&brand, &model_name, &lineup, trim.as_deref());

        Self {
            id: raw.id,
            source: raw.source,
            source_logo: None,
            brand,
            model_name,
            trim,
            lineup,
            raw_lineup: raw.lineup,
            parsed,
            product_type: raw.product_type,
            price: raw.price,
            exterior_color: raw.exterior_color,
            interior_color: raw.interior_color,
            fingerprint,
        }
    }

    /// Deduplication key shared by identical vehicles offered by different sources.
    pub fn compute_fingerprint(
        brand: &str,
        model_name: &str,
        lineup: &str,
        trim: Option<&str>,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(
            format!("{}|{}|{}|{}", brand, model_name, lineup, trim.unwrap_or("")).as_bytes(),
        );
        format!("{:x}", hasher.finalize())
    }
}

/// One card in the inventory grid: every listing sharing brand and model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleGroup {
    pub brand: String,
    pub model_name: String,
    pub image: Option<String>,
    pub brand_logo: String,
    pub total_count: usize,
    pub lineups: Vec<String>,
    pub listings: Vec<NormalizedListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandFilter {
    pub brand: String,
    pub logo: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_listing_accepts_camel_case() {
        let raw: RawListing = serde_json::from_str(
            r#"{"vehicleName": "더 뉴 카니발 HEV", "lineup": "2025년형 하이브리드",
                "productType": "장기렌트", "price": 890000, "dealer": "ignored"}"#,
        )
        .unwrap();

        assert_eq!(raw.vehicle_name, "더 뉴 카니발 HEV");
        assert_eq!(raw.product_type.as_deref(), Some("장기렌트"));
        assert_eq!(raw.price, Some(890000));
        assert!(raw.raw_vehicle_name.is_none());
    }

    #[test]
    fn test_missing_vehicle_name_defaults_to_empty() {
        let raw: RawListing = serde_json::from_str(r#"{"lineup": "가솔린"}"#).unwrap();
        assert_eq!(raw.vehicle_name, "");
    }

    #[test]
    fn test_fingerprint_consistency() {
        let a = NormalizedListing::compute_fingerprint("기아", "더 뉴 카니발", "가솔린 3.5", None);
        let b = NormalizedListing::compute_fingerprint("기아", "더 뉴 카니발", "가솔린 3.5", None);
        let c = NormalizedListing::compute_fingerprint("기아", "더 뉴 카니발", "가솔린 3.5", Some("시그니처"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
