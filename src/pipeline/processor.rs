// file: src/pipeline/processor.rs
// description: turns raw inventory rows into normalized listings
// reference: runs the name parser, image catalog and lineup normalizer per row

use crate::catalog::ImageCatalog;
use crate::error::Result;
use crate::extractor::VehicleNameParser;
use crate::input::{ListingReader, ScannedFile};
use crate::models::{NormalizedListing, RawListing};
use crate::normalizer::LineupNormalizer;
use crate::reference::ReferenceData;
use std::sync::Arc;
use tracing::debug;

pub struct ProcessingResult {
    pub relative_path: String,
    pub listings: Vec<NormalizedListing>,
    pub skipped_rows: usize,
    pub bytes: u64,
}

pub struct ListingProcessor {
    parser: VehicleNameParser,
    normalizer: LineupNormalizer,
    catalog: ImageCatalog,
    reader: ListingReader,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ListingProcessor {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            parser: VehicleNameParser::with_reference(Arc::clone(&reference)),
            normalizer: LineupNormalizer::with_reference(Arc::clone(&reference)),
            catalog: ImageCatalog::with_reference(reference),
            reader: ListingReader::new(),
        }
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    /// Never fails: every field has a fallback.
    pub fn process(&self, raw: RawListing) -> NormalizedListing {
        let parsed = self.parser.parse(&raw.vehicle_name);

        let brand = non_empty(raw.brand.as_deref())
            .map(|brand| self.parser.normalize_brand(brand))
            .unwrap_or_else(|| parsed.brand.clone());

        let model_name = self
            .catalog
            .official_model_name(&brand, &raw.vehicle_name)
            .or_else(|| non_empty(Some(raw.vehicle_name.as_str())).map(str::to_string))
            .unwrap_or_else(|| parsed.model_name.clone());

        let lineup = self.normalizer.normalize(
            raw.lineup.as_deref().unwrap_or(""),
            &model_name,
            raw.raw_vehicle_name.as_deref(),
        );

        let trim = non_empty(raw.trim.as_deref())
            .map(str::to_string)
            .or_else(|| parsed.trim.clone());

        let source_logo = non_empty(raw.source.as_deref())
            .map(|source| self.catalog.source_logo_path(source));

        let mut listing = NormalizedListing::new(raw, brand, model_name, trim, lineup, parsed);
        listing.source_logo = source_logo;
        listing
    }

    pub fn process_file(&self, file: &ScannedFile) -> Result<ProcessingResult> {
        let batch = self.reader.read(file)?;

        let listings: Vec<NormalizedListing> = batch
            .listings
            .into_iter()
            .map(|raw| self.process(raw))
            .collect();

        debug!(
            "Normalized {} listings from {}",
            listings.len(),
            file.relative_path
        );

        Ok(ProcessingResult {
            relative_path: file.relative_path.clone(),
            listings,
            skipped_rows: batch.skipped_rows,
            bytes: file.size,
        })
    }
}

impl Default for ListingProcessor {
    fn default() -> Self {
        Self::new(ReferenceData::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ListingFormat;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_process_uses_official_model_name() {
        let processor = ListingProcessor::default();
        let raw = RawListing::new("카니발 하이브리드 9인승 시그니처")
            .with_lineup("2025년형 하이브리드 2WD 9인승");

        let listing = processor.process(raw);

        assert_eq!(listing.brand, "기아");
        assert_eq!(listing.model_name, "더 뉴 카니발 HEV");
        assert_eq!(listing.lineup, "2025년형 하이브리드 1.6T 2WD 9인승");
        assert_eq!(listing.raw_lineup.as_deref(), Some("2025년형 하이브리드 2WD 9인승"));
    }

    #[test]
    fn test_explicit_brand_is_normalized() {
        let processor = ListingProcessor::default();
        let raw = RawListing::new("Model Y Long Range")
            .with_brand("TESLA")
            .with_lineup("2025년형 AWD");

        let listing = processor.process(raw);

        assert_eq!(listing.brand, "테슬라");
        assert_eq!(listing.model_name, "New Model Y");
        assert_eq!(listing.lineup, "2025년형 전기");
        assert_eq!(listing.trim.as_deref(), Some("Long Range"));
    }

    #[test]
    fn test_uncatalogued_name_kept_verbatim() {
        let processor = ListingProcessor::default();
        let listing = processor.process(RawListing::new("  아우디 A6 45 TFSI "));

        assert_eq!(listing.brand, "아우디");
        assert_eq!(listing.model_name, "아우디 A6 45 TFSI");
        assert_eq!(listing.lineup, "가솔린");
    }

    #[test]
    fn test_import_brand_resolves_catalog_name() {
        let processor = ListingProcessor::default();
        let listing = processor.process(RawListing::new("BMW 520i M 스포츠"));

        assert_eq!(listing.brand, "BMW");
        assert_eq!(listing.model_name, "The New 5 Series");
        assert_eq!(listing.lineup, "가솔린");
    }

    #[test]
    fn test_empty_name_falls_back_to_parsed_model() {
        let processor = ListingProcessor::default();
        let listing = processor.process(RawListing::default());

        assert_eq!(listing.brand, "기타");
        assert_eq!(listing.model_name, "알수없음");
        assert_eq!(listing.fingerprint.len(), 64);
        assert_eq!(listing.source_logo, None);
    }

    #[test]
    fn test_same_vehicle_from_two_sources_shares_fingerprint() {
        let processor = ListingProcessor::default();
        let a = processor.process(
            RawListing::new("더 뉴 카니발 하이브리드")
                .with_lineup("25MY 하이브리드")
                .with_source("KB캐피탈"),
        );
        let b = processor.process(
            RawListing::new("카니발 HEV")
                .with_lineup("2025년형 하이브리드 1.6T")
                .with_source("롯데렌터카"),
        );

        assert_eq!(a.model_name, b.model_name);
        assert_eq!(a.lineup, b.lineup);
        assert_eq!(a.trim, b.trim);
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.source_logo.as_deref(), Some("/company-logos/kb.png"));
        assert_eq!(b.source_logo.as_deref(), Some("/company-logos/lotte-rent.png"));
    }

    #[test]
    fn test_process_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feed.jsonl");
        let content = "{\"vehicle_name\": \"디 올 뉴 코나 EV\"}\n{broken\n";
        fs::write(&path, content).unwrap();

        let file = ScannedFile {
            path,
            relative_path: "feed.jsonl".to_string(),
            format: ListingFormat::JsonLines,
            size: content.len() as u64,
        };

        let result = ListingProcessor::default().process_file(&file).unwrap();
        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].lineup, "전기");
        assert_eq!(result.skipped_rows, 1);
        assert_eq!(result.bytes, content.len() as u64);
    }
}
