//! Contract/test resolution for catalog examples.
//!
//! Turns an [`ExampleDescriptor`] into a [`ResolvedExample`]: both source
//! files read from disk plus the contract's declared type name.
//!
//! ## Type name grammar
//!
//! The type name is taken from the first line of the contract source that
//! matches
//!
//! ```text
//! [ws] contract ws <Identifier> ( ws is ... | [ws] { ... | [ws] EOL )
//! ```
//!
//! where `<Identifier>` is `[A-Za-z_$][A-Za-z0-9_$]*`. Matching is anchored at
//! the start of a line, so declarations inside `//` or `*` comment lines are
//! ignored, and so are `abstract contract`, `library` and `interface`
//! declarations, none of which can be deployed. No match is an error, never a
//! guess.
//!
//! Sources are read as UTF-8. A file that is not valid UTF-8 is a
//! [`ScaffoldError::MalformedSource`]; any other read failure is a
//! [`ScaffoldError::SourceUnreadable`]. Both name the offending file.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::ExampleDescriptor;
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};

static CONTRACT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*contract[ \t]+([A-Za-z_$][A-Za-z0-9_$]*)(?:[ \t]+is\b|[ \t]*\{|[ \t]*\r?$)",
    )
    .expect("contract declaration pattern is valid")
});

/// Extract the primary contract name from Solidity source text.
pub fn extract_type_name(source: &str) -> Option<&str> {
    CONTRACT_DECL
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// An example whose sources were found and read.
#[derive(Debug, Clone)]
pub struct ResolvedExample {
    pub descriptor: &'static ExampleDescriptor,
    pub contract_path: PathBuf,
    pub test_path: PathBuf,
    pub contract_source: String,
    pub test_source: String,
    /// Declared contract name, e.g. `FHECounter`.
    pub type_name: String,
}

impl ResolvedExample {
    /// File name of the contract inside a generated project.
    pub fn contract_file_name(&self) -> String {
        format!("{}.sol", self.type_name)
    }

    /// File name of the test inside a generated project: the source's own
    /// base name.
    pub fn test_file_name(&self) -> String {
        self.test_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.ts", self.type_name))
    }
}

/// Resolve an example's sources under `config.root`.
pub fn resolve(config: &ScaffoldConfig, descriptor: &'static ExampleDescriptor) -> Result<ResolvedExample> {
    let contract_path = config.source_path(descriptor.contract);
    let test_path = config.source_path(descriptor.test);

    let contract_source = read_source(descriptor, &contract_path)?;
    let test_source = read_source(descriptor, &test_path)?;

    let type_name = extract_type_name(&contract_source)
        .ok_or_else(|| ScaffoldError::TypeNameNotFound(contract_path.clone()))?
        .to_string();

    tracing::debug!(
        "resolved {} -> {} ({})",
        descriptor.name,
        type_name,
        contract_path.display()
    );

    Ok(ResolvedExample {
        descriptor,
        contract_path,
        test_path,
        contract_source,
        test_source,
        type_name,
    })
}

fn read_source(descriptor: &ExampleDescriptor, path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ScaffoldError::SourceMissing {
            example: descriptor.name.to_string(),
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => ScaffoldError::MalformedSource {
            path: path.to_path_buf(),
            reason: "not valid UTF-8".into(),
        },
        _ => ScaffoldError::SourceUnreadable {
            example: descriptor.name.to_string(),
            path: path.to_path_buf(),
            source: e,
        },
    })
}
