// file: src/catalog/mod.rs
// description: vehicle image, brand logo and source logo lookups
// reference: per-brand image folders keyed by model code

use crate::extractor::patterns::contains_ascii_word;
use crate::reference::{
    BrandImages, DEFAULT_BRAND_LOGO, DEFAULT_SOURCE_LOGO, ImageModel, ReferenceData,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogVehicle {
    pub code: String,
    pub name: String,
    pub image: String,
}

/// Resolves free-text vehicle names to catalog entries.
///
/// Names are compared with whitespace removed and lowercased. Matching runs in four
/// passes, first hit wins:
///
/// 1. keyword aliases, longest first
/// 2. powertrain models (HEV, EV, N, E-TECH) contained in the name, catalog order
/// 3. search keywords in list order, each resolved to the first catalog model that
///    contains it or is contained by it, treating hybrid spellings as HEV
/// 4. any catalog model contained in the name, catalog order
pub struct ImageCatalog {
    reference: Arc<ReferenceData>,
}

// Checked against compacted text; the N line is checked as a separate word.
const POWERTRAIN_MARKERS: [&str; 10] = [
    "hev", "hybrid", "하이브리드", "ev", "phev", "e-tech", "etech", "evx", "electric", "일렉트릭",
];

fn compact(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn has_powertrain(text: &str) -> bool {
    let compacted = compact(text);
    POWERTRAIN_MARKERS
        .iter()
        .any(|marker| compacted.contains(marker))
        || contains_ascii_word(&text.to_lowercase(), "n")
}

fn unify_powertrain(text: &str) -> String {
    text.replace("e-tech", "hev")
        .replace("etech", "hev")
        .replace("hybrid", "hev")
        .replace("하이브리드", "hev")
}

fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::builtin())
    }

    pub fn with_reference(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    fn find_code<'a>(&self, images: &'a BrandImages, vehicle_name: &str) -> Option<&'a str> {
        let name = compact(vehicle_name);
        if name.is_empty() {
            return None;
        }

        // stable sort keeps table order among equal lengths
        let mut keywords: Vec<_> = images.keywords.iter().collect();
        keywords.sort_by(|a, b| b.keyword.chars().count().cmp(&a.keyword.chars().count()));

        if let Some(found) = keywords
            .into_iter()
            .find(|k| name.contains(&k.keyword.to_lowercase()))
        {
            return Some(found.code.as_str());
        }

        if has_powertrain(vehicle_name)
            && let Some(model) = images
                .models
                .iter()
                .find(|model| has_powertrain(&model.name) && name.contains(&compact(&model.name)))
        {
            return Some(model.code.as_str());
        }

        if let Some(model) = self.search_keyword_match(images, &name) {
            return Some(model.code.as_str());
        }

        images
            .models
            .iter()
            .find(|model| name.contains(&compact(&model.name)))
            .map(|model| model.code.as_str())
    }

    fn search_keyword_match<'a>(&self, images: &'a BrandImages, name: &str) -> Option<&'a ImageModel> {
        images
            .search_keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .filter(|keyword| name.contains(keyword.as_str()))
            .find_map(|keyword| {
                let unified_keyword = unify_powertrain(&keyword);
                images.models.iter().find(|model| {
                    let model_name = compact(&model.name);
                    overlaps(&model_name, &keyword)
                        || overlaps(&unify_powertrain(&model_name), &unified_keyword)
                })
            })
    }

    pub fn vehicle_image_path(&self, brand: &str, vehicle_name: &str) -> Option<String> {
        let images = self.reference.images_for(brand)?;
        let code = self.find_code(images, vehicle_name)?;
        Some(format!("{}/{}.png", images.folder, code))
    }

    pub fn official_model_name(&self, brand: &str, vehicle_name: &str) -> Option<String> {
        let images = self.reference.images_for(brand)?;
        let code = self.find_code(images, vehicle_name)?;
        self.model_name_by_code(brand, code)
    }

    pub fn model_name_by_code(&self, brand: &str, code: &str) -> Option<String> {
        self.reference
            .images_for(brand)?
            .models
            .iter()
            .find(|model| model.code == code)
            .map(|model| model.name.clone())
    }

    pub fn vehicles_by_brand(&self, brand: &str) -> Vec<CatalogVehicle> {
        let Some(images) = self.reference.images_for(brand) else {
            return Vec::new();
        };

        images
            .models
            .iter()
            .map(|model| CatalogVehicle {
                code: model.code.clone(),
                name: model.name.clone(),
                image: format!("{}/{}.png", images.folder, model.code),
            })
            .collect()
    }

    pub fn brand_logo_path(&self, brand: &str) -> String {
        self.reference
            .brand_logos
            .iter()
            .find(|logo| logo.name == brand)
            .map(|logo| logo.path.clone())
            .unwrap_or_else(|| DEFAULT_BRAND_LOGO.to_string())
    }

    /// Finance-company logo. Source names often carry suffixes (`현대캐피탈_소호_전략_G`),
    /// so a substring match in either direction is accepted after the exact match.
    pub fn source_logo_path(&self, source: &str) -> String {
        let logos = &self.reference.source_logos;

        if let Some(logo) = logos.iter().find(|logo| logo.name == source) {
            return logo.path.clone();
        }

        if !source.is_empty()
            && let Some(logo) = logos
                .iter()
                .find(|logo| source.contains(logo.name.as_str()) || logo.name.contains(source))
        {
            return logo.path.clone();
        }

        DEFAULT_SOURCE_LOGO.to_string()
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
