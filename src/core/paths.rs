//! Centralized path helpers for the model document, its lock, and the log file.

use std::path::{Path, PathBuf};

use crate::core::app;

/// File name used when neither `--file` nor `LLM_MODELS_FILE` is given.
pub const DEFAULT_DOCUMENT: &str = "models.json";

/// Project directories (config, cache, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Cache directory (~/.cache/llm-model-manager/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Log file used in TUI mode (~/.cache/llm-model-manager/llm-model-manager.log).
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|d| d.join(format!("{}.log", app::NAME)))
}

/// Advisory lock file next to the document (`models.json` -> `models.json.lock`).
pub fn lock_path(document: &Path) -> PathBuf {
    sibling_with_suffix(document, "lock")
}

/// Scratch file used for atomic replace (`models.json` -> `models.json.tmp`).
pub fn tmp_path(document: &Path) -> PathBuf {
    sibling_with_suffix(document, "tmp")
}

fn sibling_with_suffix(document: &Path, suffix: &str) -> PathBuf {
    let mut name = document
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_DOCUMENT.into());
    name.push(".");
    name.push(suffix);
    document.with_file_name(name)
}
