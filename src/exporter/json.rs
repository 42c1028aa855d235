// file: src/exporter/json.rs
// description: json export of normalized listings, vehicle groups and brand filters
// reference: https://docs.rs/serde_json

use crate::error::{NormalizerError, Result};
use crate::models::{BrandFilter, NormalizedListing, VehicleGroup};
use crate::pipeline::PipelineStats;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LISTINGS_FILE: &str = "listings.json";
pub const GROUPS_FILE: &str = "groups.json";
pub const BRANDS_FILE: &str = "brands.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_listings: usize,
    pub unique_listings: usize,
    pub total_groups: usize,
    pub total_brands: usize,
    pub source_files: Vec<String>,
    pub files: Vec<String>,
    pub stats: PipelineStats,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| NormalizerError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir, pretty })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_all(
        &self,
        listings: &[NormalizedListing],
        groups: &[VehicleGroup],
        brands: &[BrandFilter],
        source_files: Vec<String>,
        stats: &PipelineStats,
    ) -> Result<ExportManifest> {
        info!("Starting JSON export to {}", self.output_dir.display());

        self.write_json(LISTINGS_FILE, &listings)?;
        self.write_json(GROUPS_FILE, &groups)?;
        self.write_json(BRANDS_FILE, &brands)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_listings: listings.len(),
            unique_listings: stats.unique_listings(),
            total_groups: groups.len(),
            total_brands: brands.len(),
            source_files,
            files: vec![
                LISTINGS_FILE.to_string(),
                GROUPS_FILE.to_string(),
                BRANDS_FILE.to_string(),
            ],
            stats: stats.clone(),
        };
        self.write_json(MANIFEST_FILE, &manifest)?;

        info!(
            "Export complete: {} listings in {} groups",
            manifest.total_listings, manifest.total_groups
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.output_dir.join(name);
        fs::write(&path, json).map_err(|source| NormalizerError::FileOperation {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
