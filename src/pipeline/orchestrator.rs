// file: src/pipeline/orchestrator.rs
// description: coordinates listing file scanning, normalization, grouping and export
// reference: orchestrates the asynchronous batch workflow

use crate::config::Config;
use crate::error::{NormalizerError, Result};
use crate::exporter::{ExportManifest, JsonExporter};
use crate::grouping::{brand_filters, group_listings};
use crate::input::{FileScanner, ScannedFile};
use crate::models::{BrandFilter, NormalizedListing, VehicleGroup};
use crate::pipeline::processor::{ListingProcessor, ProcessingResult};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::reference::ReferenceData;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Everything a run produced, in deterministic order.
pub struct NormalizationOutput {
    pub listings: Vec<NormalizedListing>,
    pub groups: Vec<VehicleGroup>,
    pub brands: Vec<BrandFilter>,
    pub source_files: Vec<String>,
    pub stats: PipelineStats,
}

pub struct NormalizationPipeline {
    config: Config,
    reference: Arc<ReferenceData>,
    processor: Arc<ListingProcessor>,
    max_concurrent_tasks: usize,
    show_progress: bool,
    colored: bool,
}

impl NormalizationPipeline {
    pub fn new(config: Config, reference: Arc<ReferenceData>) -> Self {
        let processor = Arc::new(ListingProcessor::new(Arc::clone(&reference)));
        let max_concurrent_tasks = config.pipeline.parallel_workers.max(1);

        Self {
            config,
            reference,
            processor,
            max_concurrent_tasks,
            show_progress: true,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    /// Scan, normalize and group. `limit` caps the number of listings kept.
    pub async fn run(&self, limit: Option<usize>) -> Result<NormalizationOutput> {
        info!("Starting listing normalization");

        let files = self.scan_files().await?;
        info!("Found {} listing files to process", files.len());

        if files.is_empty() {
            warn!("No listing files found in {}", self.config.input.path.display());
            return Ok(NormalizationOutput {
                listings: Vec::new(),
                groups: Vec::new(),
                brands: Vec::new(),
                source_files: Vec::new(),
                stats: PipelineStats::new(),
            });
        }

        let progress = Arc::new(if self.show_progress {
            ProgressTracker::with_color(files.len(), self.colored)
        } else {
            ProgressTracker::hidden(files.len())
        });

        info!(
            "Processing files with {} concurrent tasks...",
            self.max_concurrent_tasks
        );
        let mut results = self.process_files(files, Arc::clone(&progress)).await;

        // completion order is arbitrary
        results.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let source_files: Vec<String> = results.iter().map(|r| r.relative_path.clone()).collect();
        let mut listings: Vec<NormalizedListing> =
            results.into_iter().flat_map(|r| r.listings).collect();

        if let Some(limit) = limit
            && listings.len() > limit
        {
            info!("Limiting output to {} of {} listings", limit, listings.len());
            listings.truncate(limit);
        }

        progress.set_message("Grouping listings".to_string());
        let groups = group_listings(&listings, self.processor.catalog());
        let brands = brand_filters(&listings, self.processor.catalog(), &self.reference);

        let mut stats = progress.get_stats();
        stats.listings_normalized = listings.len();
        stats.duplicate_listings = count_duplicates(&listings);
        stats.groups_created = groups.len();
        progress.finish();

        self.log_final_stats(&stats);

        Ok(NormalizationOutput {
            listings,
            groups,
            brands,
            source_files,
            stats,
        })
    }

    /// Run and write every output file to `output_dir`.
    pub async fn run_and_export(
        &self,
        output_dir: PathBuf,
        pretty: bool,
        limit: Option<usize>,
    ) -> Result<ExportManifest> {
        let output = self.run(limit).await?;

        let exporter = JsonExporter::new(output_dir, pretty)?;
        exporter.export_all(
            &output.listings,
            &output.groups,
            &output.brands,
            output.source_files,
            &output.stats,
        )
    }

    async fn scan_files(&self) -> Result<Vec<ScannedFile>> {
        let input_path = self.config.input.path.clone();
        let pipeline_config = self.config.pipeline.clone();

        tokio::task::spawn_blocking(move || {
            let scanner = FileScanner::new(pipeline_config);
            scanner.scan_directory(&input_path)
        })
        .await
        .map_err(|e| NormalizerError::Validation(format!("File scanning task failed: {}", e)))?
    }

    async fn process_files(
        &self,
        files: Vec<ScannedFile>,
        progress: Arc<ProgressTracker>,
    ) -> Vec<ProcessingResult> {
        let tasks = files.into_iter().map(|file| {
            let processor = Arc::clone(&self.processor);
            let progress = Arc::clone(&progress);

            async move {
                let file_path = file.relative_path.clone();
                let processed =
                    tokio::task::spawn_blocking(move || processor.process_file(&file)).await;

                match processed {
                    Ok(Ok(result)) => {
                        progress.inc_files_processed();
                        progress.add_listings(result.listings.len());
                        progress.add_skipped_rows(result.skipped_rows);
                        progress.add_bytes_processed(result.bytes);
                        Some(result)
                    }
                    Ok(Err(e)) => {
                        progress.inc_files_failed();
                        warn!("Failed to process file {}: {}", file_path, e);
                        None
                    }
                    Err(e) => {
                        progress.inc_files_failed();
                        error!("Processing task panicked: {}", e);
                        None
                    }
                }
            }
        });

        stream::iter(tasks)
            .buffer_unordered(self.max_concurrent_tasks)
            .filter_map(|result| async move { result })
            .collect()
            .await
    }

    fn log_final_stats(&self, stats: &PipelineStats) {
        info!("=== Normalization Summary ===");
        info!("Duration: {} seconds", stats.duration_secs);
        info!("Files processed: {}", stats.files_processed);
        info!("Files failed: {}", stats.files_failed);
        info!("Success rate: {:.2}%", stats.success_rate());
        info!("Listings normalized: {}", stats.listings_normalized);
        info!("Rows skipped: {}", stats.rows_skipped);
        info!("Duplicate listings: {}", stats.duplicate_listings);
        info!("Vehicle groups: {}", stats.groups_created);
        info!(
            "Processing speed: {:.2} listings/sec",
            stats.listings_per_second()
        );
        info!("=============================");
    }
}

/// Listings whose fingerprint already appeared earlier in the slice.
pub fn count_duplicates(listings: &[NormalizedListing]) -> usize {
    let mut seen = HashSet::new();
    listings
        .iter()
        .filter(|listing| !seen.insert(listing.fingerprint.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, OutputConfig, PipelineConfig, ReferenceConfig};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config(input: &std::path::Path, output: &std::path::Path) -> Config {
        Config {
            input: InputConfig {
                path: input.to_path_buf(),
            },
            output: OutputConfig {
                dir: output.to_path_buf(),
                pretty: false,
            },
            pipeline: PipelineConfig {
                parallel_workers: 2,
                skip_patterns: vec!["*.tmp".to_string()],
                max_file_size_mb: 10,
            },
            reference: ReferenceConfig::default(),
        }
    }

    fn write_fixtures(dir: &TempDir) {
        fs::write(
            dir.path().join("b_lotte.jsonl"),
            concat!(
                "{\"vehicle_name\": \"카니발 HEV\", \"lineup\": \"2025년형 하이브리드 1.6T\", \"source\": \"롯데렌터카\"}\n",
                "not json\n",
                "{\"vehicle_name\": \"Model Y Long Range\", \"lineup\": \"2025년형 AWD\"}\n",
            ),
        )
        .unwrap();
        fs::write(
            dir.path().join("a_kb.json"),
            r#"[{"vehicle_name": "더 뉴 카니발 하이브리드", "lineup": "25MY 하이브리드", "source": "KB캐피탈"},
                {"vehicle_name": "더 뉴 아반떼", "lineup": "2025년형 가솔린"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("c_broken.json"), "{ not an array").unwrap();
        fs::write(dir.path().join("d_skip.tmp"), "[]").unwrap();
    }

    #[tokio::test]
    async fn test_run_groups_in_file_then_row_order() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_fixtures(&input);

        let pipeline = NormalizationPipeline::new(
            create_test_config(input.path(), output.path()),
            ReferenceData::builtin(),
        )
        .with_progress(false, false);

        let result = pipeline.run(None).await.unwrap();

        assert_eq!(result.source_files, vec!["a_kb.json", "b_lotte.jsonl"]);
        assert_eq!(result.listings.len(), 4);
        assert_eq!(result.stats.files_processed, 2);
        assert_eq!(result.stats.files_failed, 1);
        assert_eq!(result.stats.rows_skipped, 1);
        assert_eq!(result.stats.duplicate_listings, 1);

        let models: Vec<&str> = result.groups.iter().map(|g| g.model_name.as_str()).collect();
        assert_eq!(models, vec!["더 뉴 카니발 HEV", "더 뉴 아반떼", "New Model Y"]);
        assert_eq!(result.groups[0].total_count, 2);

        let brands: Vec<&str> = result.brands.iter().map(|b| b.brand.as_str()).collect();
        assert_eq!(brands, vec!["현대", "기아", "테슬라"]);
    }

    #[tokio::test]
    async fn test_run_with_limit() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_fixtures(&input);

        let pipeline = NormalizationPipeline::new(
            create_test_config(input.path(), output.path()),
            ReferenceData::builtin(),
        )
        .with_progress(false, false);

        let result = pipeline.run(Some(1)).await.unwrap();
        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.groups.len(), 1);
    }

    #[tokio::test]
    async fn test_run_and_export() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_fixtures(&input);

        let pipeline = NormalizationPipeline::new(
            create_test_config(input.path(), output.path()),
            ReferenceData::builtin(),
        )
        .with_progress(false, false);

        let manifest = pipeline
            .run_and_export(output.path().join("run"), false, None)
            .await
            .unwrap();

        assert_eq!(manifest.total_listings, 4);
        assert_eq!(manifest.unique_listings, 3);
        assert!(output.path().join("run/groups.json").is_file());
    }

    #[tokio::test]
    async fn test_empty_input_directory() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let pipeline = NormalizationPipeline::new(
            create_test_config(input.path(), output.path()),
            ReferenceData::builtin(),
        )
        .with_progress(false, false);

        let result = pipeline.run(None).await.unwrap();
        assert!(result.listings.is_empty());
        assert!(result.groups.is_empty());
    }
}
