// file: src/input/reader.rs
// description: reads raw listings from json array and json lines exports
// reference: https://docs.rs/serde_json

use crate::error::{NormalizerError, Result};
use crate::input::scanner::{ListingFormat, ScannedFile};
use crate::models::RawListing;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ListingBatch {
    pub listings: Vec<RawListing>,
    pub skipped_rows: usize,
}

pub struct ListingReader;

impl ListingReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, file: &ScannedFile) -> Result<ListingBatch> {
        let content = read_file_content(&file.path)?;
        let batch = self.parse(&content, file.format, &file.relative_path)?;

        debug!(
            "Read {} listings ({} skipped) from {} file {}",
            batch.listings.len(),
            batch.skipped_rows,
            file.format.as_str(),
            file.relative_path
        );
        Ok(batch)
    }

    pub fn parse(&self, content: &str, format: ListingFormat, name: &str) -> Result<ListingBatch> {
        match format {
            ListingFormat::Json => self.parse_array(content, name),
            ListingFormat::JsonLines => Ok(self.parse_lines(content, name)),
        }
    }

    fn parse_array(&self, content: &str, name: &str) -> Result<ListingBatch> {
        let listings: Vec<RawListing> =
            serde_json::from_str(content).map_err(|e| NormalizerError::ListingParse {
                file: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(ListingBatch {
            listings,
            skipped_rows: 0,
        })
    }

    // A bad line costs that row only.
    fn parse_lines(&self, content: &str, name: &str) -> ListingBatch {
        let mut batch = ListingBatch::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<RawListing>(line) {
                Ok(listing) => batch.listings.push(listing),
                Err(e) => {
                    warn!("Skipping malformed row {}:{}: {}", name, index + 1, e);
                    batch.skipped_rows += 1;
                }
            }
        }

        batch
    }
}

impl Default for ListingReader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NormalizerError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
