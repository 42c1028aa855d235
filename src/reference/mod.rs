// file: src/reference/mod.rs
// description: static lookup tables shared by the parser, normalizer and image catalog
// reference: loaded once, read-only for the process lifetime

mod builtin;

use crate::error::{NormalizerError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

/// Brand recognized by the parser when nothing else matches.
pub const UNKNOWN_BRAND: &str = "기타";

/// Model name produced for empty input.
pub const UNKNOWN_MODEL: &str = "알수없음";

pub const DEFAULT_BRAND_LOGO: &str = "/brand-logos/default.png";
pub const DEFAULT_SOURCE_LOGO: &str = "/company-logos/default.png";

lazy_static! {
    static ref BUILTIN: Arc<ReferenceData> = Arc::new(builtin::reference_data());
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSpec {
    /// Empty for electric models.
    pub displacement: String,
    pub turbo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAlias {
    pub alias: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandKeywords {
    pub brand: String,
    pub keywords: Vec<String>,
}

/// Displacements of a model that are only sold naturally aspirated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalAspiration {
    pub keyword: String,
    pub displacements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageModel {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageKeyword {
    /// Lowercase, whitespace-free.
    pub keyword: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandImages {
    pub brand: String,
    pub folder: String,
    pub models: Vec<ImageModel>,
    pub keywords: Vec<ImageKeyword>,
    /// Keywords for the model-name pass, tried in list order.
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoEntry {
    pub name: String,
    pub path: String,
}

/// Every table the core consults. Tables whose order decides a match are vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub brand_aliases: Vec<BrandAlias>,
    pub brand_keywords: Vec<BrandKeywords>,
    pub engine_specs: BTreeMap<String, EngineSpec>,
    pub never_turbo_models: BTreeSet<String>,
    pub no_drive_models: BTreeSet<String>,
    pub natural_aspiration: Vec<NaturalAspiration>,
    pub multi_seat_keywords: Vec<String>,
    pub brand_order: Vec<String>,
    #[serde(default)]
    pub brand_images: Vec<BrandImages>,
    #[serde(default)]
    pub brand_logos: Vec<LogoEntry>,
    #[serde(default)]
    pub source_logos: Vec<LogoEntry>,
}

impl ReferenceData {
    /// Shared handle to the compiled-in tables.
    pub fn builtin() -> Arc<ReferenceData> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NormalizerError::FileOperation {
                path: path.to_path_buf(),
                source: e,
            })?;

        let data: ReferenceData = serde_json::from_str(&content).map_err(|e| {
            NormalizerError::ReferenceData(format!("{}: {}", path.display(), e))
        })?;

        data.validate()?;
        Ok(data)
    }

    /// Load from `path` when given, otherwise hand out the built-in tables.
    pub fn load(path: Option<&Path>) -> Result<Arc<ReferenceData>> {
        match path {
            Some(path) => Ok(Arc::new(Self::from_file(path)?)),
            None => Ok(Self::builtin()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand_keywords.is_empty() {
            return Err(NormalizerError::ReferenceData(
                "brand_keywords must not be empty".to_string(),
            ));
        }

        if let Some(entry) = self
            .brand_keywords
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(NormalizerError::ReferenceData(format!(
                "empty keyword for brand {}",
                entry.brand
            )));
        }

        if self.brand_aliases.iter().any(|a| a.alias.trim().is_empty()) {
            return Err(NormalizerError::ReferenceData(
                "brand alias must not be empty".to_string(),
            ));
        }

        for images in &self.brand_images {
            if let Some(keyword) = images
                .keywords
                .iter()
                .find(|k| !images.models.iter().any(|m| m.code == k.code))
            {
                return Err(NormalizerError::ReferenceData(format!(
                    "keyword {} of {} points at unknown image code {}",
                    keyword.keyword, images.brand, keyword.code
                )));
            }
        }

        Ok(())
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn engine_spec(&self, model: &str) -> Option<&EngineSpec> {
        self.engine_specs.get(model)
    }

    pub fn is_never_turbo(&self, model: &str) -> bool {
        self.never_turbo_models.contains(model)
    }

    pub fn has_no_drive(&self, model: &str) -> bool {
        self.no_drive_models.contains(model)
    }

    /// True when `model` contains any natural-aspiration keyword whose set holds `displacement`.
    pub fn is_natural_aspiration(&self, model: &str, displacement: &str) -> bool {
        self.natural_aspiration.iter().any(|entry| {
            model.contains(entry.keyword.as_str())
                && entry.displacements.iter().any(|d| d == displacement)
        })
    }

    pub fn is_multi_seat(&self, model: &str) -> bool {
        self.multi_seat_keywords
            .iter()
            .any(|keyword| model.contains(keyword.as_str()))
    }

    /// Canonical brand for an alias, if the alias is known.
    pub fn alias_brand(&self, alias: &str) -> Option<&str> {
        self.brand_aliases
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.brand.as_str())
    }

    pub fn keywords_for(&self, brand: &str) -> &[String] {
        self.brand_keywords
            .iter()
            .find(|entry| entry.brand == brand)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Display position of a brand; unknown brands sort after every known one.
    pub fn brand_rank(&self, brand: &str) -> usize {
        self.brand_order
            .iter()
            .position(|b| b == brand)
            .unwrap_or(self.brand_order.len())
    }

    pub fn images_for(&self, brand: &str) -> Option<&BrandImages> {
        self.brand_images.iter().find(|images| images.brand == brand)
    }
}
