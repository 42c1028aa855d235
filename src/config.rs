// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{NormalizerError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub parallel_workers: usize,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

/// Where the lookup tables come from. Without a path the built-in tables are used.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReferenceConfig {
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LISTING_NORMALIZER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| NormalizerError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| NormalizerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                path: PathBuf::from("./data/listings"),
            },
            output: OutputConfig {
                dir: PathBuf::from("./exports"),
                pretty: false,
            },
            pipeline: PipelineConfig {
                parallel_workers: 4,
                skip_patterns: vec!["*.tmp".to_string(), ".git/*".to_string()],
                max_file_size_mb: 50,
            },
            reference: ReferenceConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.parallel_workers == 0 {
            return Err(NormalizerError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.max_file_size_mb == 0 {
            return Err(NormalizerError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert!(config.reference.path.is_none());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = Config::default_config();
        config.pipeline.parallel_workers = 0;
        assert!(matches!(config.validate(), Err(NormalizerError::Config(_))));
    }

    #[test]
    fn test_zero_file_size_rejected() {
        let mut config = Config::default_config();
        config.pipeline.max_file_size_mb = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[input]
path = "./feeds"

[output]
dir = "./out"
pretty = true

[pipeline]
parallel_workers = 2
skip_patterns = ["*.bak"]
max_file_size_mb = 5
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.input.path, PathBuf::from("./feeds"));
        assert!(config.output.pretty);
        assert_eq!(config.pipeline.parallel_workers, 2);
        assert_eq!(config.pipeline.skip_patterns, vec!["*.bak".to_string()]);
        assert!(config.reference.path.is_none());
    }
}
