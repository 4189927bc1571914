use std::env;
use std::path::{Path, PathBuf};

use crate::core::paths;

/// Environment variable naming the model document.
pub const FILE_ENV: &str = "LLM_MODELS_FILE";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document holding `{"llmModels": [...]}`.
    pub models_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is a directory, expected a JSON file")]
    NotAFile(PathBuf),
}

/// Resolve configuration: explicit path (from `--file`), then `LLM_MODELS_FILE`,
/// then `models.json` in the working directory.
pub fn load(file_override: Option<&Path>) -> Result<Config, ConfigError> {
    let models_path = match file_override {
        Some(p) => p.to_path_buf(),
        None => env::var(FILE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_DOCUMENT)),
    };

    if models_path.is_dir() {
        return Err(ConfigError::NotAFile(models_path));
    }

    Ok(Config { models_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let config = load(Some(Path::new("custom.json"))).unwrap();
        assert_eq!(config.models_path, PathBuf::from("custom.json"));
    }

    #[test]
    fn directory_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = load(Some(tmp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::NotAFile(_)));
        assert!(err.to_string().contains("is a directory"));
    }
}
