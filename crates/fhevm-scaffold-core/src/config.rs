//! Runtime configuration: where the example hub lives on disk.
//!
//! Loaded from `fhevm-scaffold.config.json`. Every field has a default, so a
//! hub laid out the conventional way needs no config file at all.
//!
//! ```json
//! {
//!   "root": ".",
//!   "template_dir": "fhevm-hardhat-template",
//!   "docs_dir": "docs",
//!   "output_dir": "output"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Default file name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fhevm-scaffold.config.json";

/// Paths and template rules used by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Hub root. Example descriptor paths are relative to it.
    pub root: PathBuf,
    /// Base Hardhat project copied into every generated project.
    pub template_dir: PathBuf,
    /// Where documentation pages and `SUMMARY.md` are written.
    pub docs_dir: PathBuf,
    /// Parent of default output destinations.
    pub output_dir: PathBuf,
    /// Directory names skipped at any depth while reading the template.
    pub exclude: Vec<String>,
    /// Template-relative files removed from every generated project.
    pub placeholders: Vec<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            template_dir: PathBuf::from("fhevm-hardhat-template"),
            docs_dir: PathBuf::from("docs"),
            output_dir: PathBuf::from("output"),
            exclude: [
                "node_modules",
                "artifacts",
                "cache",
                "coverage",
                "types",
                "typechain-types",
                "dist",
                "fhevmTemp",
                ".git",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            placeholders: vec![
                PathBuf::from("contracts/FHECounter.sol"),
                PathBuf::from("test/FHECounter.ts"),
            ],
        }
    }
}

impl ScaffoldConfig {
    /// Defaults rooted at `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load a config file. Relative paths inside it are resolved against the
    /// file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(Self {
            root: base.join(&config.root),
            ..config
        })
    }

    /// Load `path` if it exists. A missing file falls back to defaults unless
    /// the caller asked for it explicitly.
    pub fn load_or_default(path: &Path, explicit: bool) -> Result<Self> {
        if !explicit && !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Absolute-or-cwd-relative path of a hub-relative file.
    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template_dir)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.root.join(&self.docs_dir)
    }

    /// Default destination for a single example.
    pub fn default_example_dest(&self, example: &str) -> PathBuf {
        self.root.join(&self.output_dir).join(example)
    }

    /// Default destination for a category project.
    pub fn default_category_dest(&self, category: &str) -> PathBuf {
        self.root
            .join(&self.output_dir)
            .join(format!("{category}-examples"))
    }
}
