// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{NormalizerError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(NormalizerError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(NormalizerError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(NormalizerError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(NormalizerError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_json_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(NormalizerError::Validation(format!(
                "File is not a json file: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_vehicle_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(NormalizerError::Validation(
                "Vehicle name is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sanitize_file_path(path: &str) -> String {
        path.replace('\\', "/")
            .replace("//", "/")
            .trim()
            .to_string()
    }

    /// Truncates on character boundaries; vehicle names are mostly Hangul.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            format!("{}...", text.chars().take(max_chars).collect::<String>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("reference.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_json_extension() {
        assert!(Validator::validate_json_extension(Path::new("reference.json")).is_ok());
        assert!(Validator::validate_json_extension(Path::new("reference.toml")).is_err());
        assert!(Validator::validate_json_extension(Path::new("reference")).is_err());
    }

    #[test]
    fn test_validate_vehicle_name() {
        assert!(Validator::validate_vehicle_name("더 뉴 아반떼").is_ok());
        assert!(Validator::validate_vehicle_name("   ").is_err());
    }

    #[test]
    fn test_sanitize_file_path() {
        assert_eq!(Validator::sanitize_file_path("feeds\\kb\\rent.json"), "feeds/kb/rent.json");
        assert_eq!(Validator::sanitize_file_path("feeds//kb.json"), "feeds/kb.json");
        assert_eq!(Validator::sanitize_file_path("  kb.json  "), "kb.json");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("카니발", 10), "카니발");
        assert_eq!(
            Validator::truncate_text("더 뉴 카니발 하이브리드 9인승", 6),
            "더 뉴 카니..."
        );
    }
}
