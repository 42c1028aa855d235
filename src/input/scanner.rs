// file: src/input/scanner.rs
// description: directory walking and listing file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::PipelineConfig;
use crate::error::{NormalizerError, Result};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    /// A JSON array of listings.
    Json,
    /// One JSON listing per line.
    JsonLines,
}

impl ListingFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "jsonl" => Some(Self::JsonLines),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JsonLines => "jsonl",
        }
    }
}

pub struct FileScanner {
    config: PipelineConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub format: ListingFormat,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Listing files under `root`, sorted by relative path.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());

        if !root.is_dir() {
            return Err(NormalizerError::Validation(format!(
                "Input directory does not exist: {}",
                root.display()
            )));
        }

        let max_size = (self.config.max_file_size_mb as u64) * 1024 * 1024;
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = Validator::sanitize_file_path(
                &path.strip_prefix(root).unwrap_or(path).to_string_lossy(),
            );

            if self.should_skip(&relative_path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            let Some(format) = ListingFormat::from_path(path) else {
                continue;
            };

            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let size = metadata.len();
            if size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                format,
                size,
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        info!("Found {} listing files", files.len());
        Ok(files)
    }

    // `*.ext` matches a suffix, `dir/*` a directory segment, anything else a substring.
    fn should_skip(&self, relative_path: &str) -> bool {
        self.config.skip_patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                relative_path.ends_with(suffix)
            } else if let Some(dir) = pattern.strip_suffix('*') {
                relative_path.starts_with(dir) || relative_path.contains(&format!("/{}", dir))
            } else {
                relative_path.contains(pattern.as_str())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(skip_patterns: Vec<String>) -> PipelineConfig {
        PipelineConfig {
            parallel_workers: 1,
            skip_patterns,
            max_file_size_mb: 10,
        }
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("kb")).unwrap();
        fs::write(temp.path().join("kb/feed.jsonl"), "{}\n").unwrap();
        fs::write(temp.path().join("dealer.json"), "[]").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let scanner = FileScanner::new(test_config(vec![]));
        let files = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].relative_path, "dealer.json");
        assert_eq!(files[0].format, ListingFormat::Json);
        assert_eq!(files[1].relative_path, "kb/feed.jsonl");
        assert_eq!(files[1].format, ListingFormat::JsonLines);
    }

    #[test]
    fn test_skip_patterns() {
        let scanner = FileScanner::new(test_config(vec![
            "*.tmp.json".to_string(),
            ".git/*".to_string(),
            "archive".to_string(),
        ]));

        assert!(scanner.should_skip("feed.tmp.json"));
        assert!(scanner.should_skip(".git/config.json"));
        assert!(scanner.should_skip("nested/.git/feed.json"));
        assert!(scanner.should_skip("archive/2024.json"));
        assert!(!scanner.should_skip("feed.json"));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let scanner = FileScanner::new(test_config(vec![]));
        let result = scanner.scan_directory(Path::new("/nonexistent/listings"));
        assert!(matches!(result, Err(NormalizerError::Validation(_))));
    }
}
