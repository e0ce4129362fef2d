//! In-memory copy of the base project template.
//!
//! [`TemplateTree::read`] walks the template directory once, skipping build
//! output and dependency caches, and keeps every file as bytes keyed by its
//! template-relative path. Generation edits the tree and then writes it out
//! in a single pass with [`TemplateTree::write_to`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

/// Template files keyed by relative path. Iteration order is sorted.
#[derive(Debug, Clone, Default)]
pub struct TemplateTree {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl TemplateTree {
    /// Read `dir` recursively, skipping any directory whose name is in `exclude`.
    pub fn read(dir: &Path, exclude: &[String]) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ScaffoldError::TemplateDirMissing(dir.to_path_buf()));
        }

        let mut files = BTreeMap::new();
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !exclude
                        .iter()
                        .any(|name| entry.file_name().to_str() == Some(name.as_str()))
            });

        for entry in walker {
            let entry = entry.map_err(|e| anyhow::anyhow!("walking {}: {e}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| anyhow::anyhow!("{e}"))?
                .to_path_buf();
            let contents = std::fs::read(entry.path())?;
            files.insert(relative, contents);
        }

        tracing::debug!("read {} template files from {}", files.len(), dir.display());
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.remove(path.as_ref())
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Write every file under `dest`, creating parent directories as needed.
    pub fn write_to(&self, dest: &Path) -> Result<()> {
        for (relative, contents) in &self.files {
            let path = dest.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, contents)?;
            tracing::debug!("wrote {}", path.display());
        }
        Ok(())
    }
}
