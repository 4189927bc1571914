//! Persistence of the model list in a single JSON document (`{"llmModels": [...]}`).
//!
//! The document is the only source of truth: every operation reloads it, and writes
//! always replace it whole.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::core::paths;
use crate::core::record::ModelRecord;

/// Error reading or writing the model document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid model document {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode model list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// JSON structure on disk.
#[derive(Debug, Serialize, Deserialize)]
struct ModelsFile {
    #[serde(rename = "llmModels")]
    llm_models: Vec<ModelRecord>,
}

#[derive(Serialize)]
struct ModelsFileRef<'a> {
    #[serde(rename = "llmModels")]
    llm_models: &'a [ModelRecord],
}

/// Handle on the model document. Cheap to clone; holds no cached state.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

/// Held for the duration of a load-modify-save cycle; unlocks on drop.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load the model list. Creates an empty document on first run.
    /// A document that fails to decode yields an empty list; the error is logged.
    pub fn load(&self) -> Vec<ModelRecord> {
        match self.try_load() {
            Ok(models) => models,
            Err(e) => {
                log::warn!("{}", e);
                vec![]
            }
        }
    }

    /// Like [`Store::load`] but surfaces decode and IO errors to the caller.
    pub fn try_load(&self) -> Result<Vec<ModelRecord>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating empty model document at {}", self.path.display());
                self.save(&[])?;
                return Ok(vec![]);
            }
            Err(e) => return Err(self.io_err(e)),
        };
        let file: ModelsFile =
            serde_json::from_str(&data).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.llm_models)
    }

    /// Replace the document with `{"llmModels": models}`, indented by four spaces.
    /// Writes a sibling temp file and renames it into place.
    /// A symlinked document is written through to its target; the link stays a link.
    pub fn save(&self, models: &[ModelRecord]) -> Result<(), StoreError> {
        let json = encode(models)?;
        let target = self.resolved_path();
        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }
        let tmp = paths::tmp_path(&target);
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &target).map_err(|e| self.io_err(e))?;
        log::debug!(
            "Saved {} model(s) to {}",
            models.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Real file behind the document path (symlinks followed). The path as given
    /// while the document does not exist yet.
    fn resolved_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Reload, apply `f`, and save if `f` changed the list, all under the
    /// document's advisory lock.
    ///
    /// A document that fails to decode is treated as empty, so the first change
    /// replaces it. A document that cannot be read is left alone and the error returned.
    pub fn with_list<T>(
        &self,
        f: impl FnOnce(&mut Vec<ModelRecord>) -> T,
    ) -> Result<T, StoreError> {
        let _guard = self.lock()?;
        let mut models = match self.try_load() {
            Ok(models) => models,
            Err(e @ StoreError::Decode { .. }) => {
                log::warn!("{}", e);
                vec![]
            }
            Err(e) => return Err(e),
        };
        let before = models.clone();
        let out = f(&mut models);
        if models != before {
            self.save(&models)?;
        }
        Ok(out)
    }

    fn lock(&self) -> Result<LockGuard, StoreError> {
        let path = paths::lock_path(&self.resolved_path());
        let lock_err = |source| StoreError::Lock {
            path: path.clone(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(lock_err)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;
        Ok(LockGuard { file })
    }
}

fn encode(models: &[ModelRecord]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ModelsFileRef { llm_models: models }.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
