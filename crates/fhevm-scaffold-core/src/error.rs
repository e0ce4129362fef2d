//! Unified error types for the fhevm-scaffold toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding projects or generating docs.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Configuration ---

    /// The example name is not present in the catalog.
    #[error("unknown example: {0} (run `fhevm-scaffold list` to see available examples)")]
    UnknownExample(String),

    /// The category name is not present in the catalog.
    #[error("unknown category: {0} (run `fhevm-scaffold list` to see available categories)")]
    UnknownCategory(String),

    /// An explicitly requested config file was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Sources ---

    /// A contract or test file referenced by an example descriptor does not exist.
    #[error("source missing for example '{example}': {path}")]
    SourceMissing { example: String, path: PathBuf },

    /// A source file exists but could not be read.
    #[error("cannot read source for example '{example}': {path}")]
    SourceUnreadable {
        example: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `contract <Name>` declaration was found in a contract source.
    #[error("could not determine type name in {0}")]
    TypeNameNotFound(PathBuf),

    /// A source file does not carry the structure the extractor expects.
    #[error("malformed source {path}: {reason}")]
    MalformedSource { path: PathBuf, reason: String },

    // --- Destination ---

    /// The output directory already exists. Nothing is written.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// Every member of a category was skipped, so there is nothing to generate.
    #[error("no example of category '{0}' could be generated")]
    EmptyCategory(String),

    // --- Templates ---

    /// The base project template directory does not exist.
    #[error("template directory not found: {0}")]
    TemplateDirMissing(PathBuf),

    /// The template's `package.json` is missing or not a JSON object.
    #[error("invalid package manifest at {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// Whether this error concerns a single example's sources rather than the
    /// whole run. Bulk operations skip such examples instead of aborting.
    pub fn is_per_example(&self) -> bool {
        matches!(
            self,
            Self::SourceMissing { .. }
                | Self::SourceUnreadable { .. }
                | Self::TypeNameNotFound(_)
                | Self::MalformedSource { .. }
        )
    }
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
