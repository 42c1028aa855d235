// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod grouping;
pub mod input;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod reference;
pub mod utils;

pub use catalog::{CatalogVehicle, ImageCatalog};
pub use config::{Config, InputConfig, OutputConfig, PipelineConfig, ReferenceConfig};
pub use error::{NormalizerError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use extractor::{
    VehicleNameParser, all_brands, extract_brand, extract_lineup, extract_model_name,
    extract_trim, normalize_brand, parse_vehicle_name,
};
pub use grouping::{brand_filters, group_listings};
pub use input::{FileScanner, ListingFormat, ListingReader, ScannedFile};
pub use models::{BrandFilter, NormalizedListing, ParsedVehicle, RawListing, VehicleGroup};
pub use normalizer::{LineupNormalizer, ParsedLineup, is_same_lineup, normalize_lineup};
pub use pipeline::{
    ListingProcessor, NormalizationOutput, NormalizationPipeline, PipelineStats, ProgressTracker,
};
pub use reference::{EngineSpec, ReferenceData};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _reference = ReferenceData::builtin();
        let _processor = ListingProcessor::default();
    }

    #[test]
    fn test_end_to_end_examples() {
        assert_eq!(extract_brand("더 뉴 아반떼 1.6 터보"), "현대");
        assert_eq!(extract_model_name("더 뉴 아반떼 1.6 터보", "현대"), "아반떼");
        assert_eq!(
            normalize_lineup("2025년형 하이브리드 2WD 5인승", "카니발 HEV", None),
            "2025년형 하이브리드 1.6T 2WD 5인승"
        );
        assert_eq!(normalize_lineup("", "디 올 뉴 코나 EV", None), "전기");
        assert_eq!(extract_brand("Model Y Long Range"), "테슬라");
    }
}
