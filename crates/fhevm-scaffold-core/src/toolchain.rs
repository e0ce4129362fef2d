//! Node.js toolchain checks for generated projects.
//!
//! Generated projects are built with Hardhat, so after scaffolding the CLI
//! checks that `node` and `npm` are installed and that Node is recent enough.
//! These checks only ever produce warnings. A tool whose version cannot be
//! detected is skipped silently.

use std::fmt;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid"));

/// Minimum Node.js release supported by the Hardhat template.
pub const MIN_NODE: Version = Version::new(20, 0, 0);

/// A `major.minor.patch` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the first `X.Y.Z` found in `s`, e.g. `v20.11.1` or `npm 10.2.4`.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = VERSION.captures(s)?;
        Some(Self::new(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A required tool that is not on `PATH`.
#[derive(Debug, Clone)]
pub struct MissingTool {
    pub tool_name: String,
    pub install_instructions: String,
}

/// An installed tool older than the supported minimum.
#[derive(Debug, Clone)]
pub struct VersionWarning {
    pub tool_name: String,
    pub found_version: Version,
    pub minimum_version: Version,
}

const REQUIRED: &[(&str, &str)] = &[
    ("node", "https://nodejs.org/en/download"),
    ("npm", "ships with Node.js: https://nodejs.org/en/download"),
];

/// Check that every tool needed to build a generated project is installed.
pub fn check_prerequisites() -> std::result::Result<(), Vec<MissingTool>> {
    let missing: Vec<_> = REQUIRED
        .iter()
        .filter(|(tool, _)| which::which(tool).is_err())
        .map(|(tool, install)| MissingTool {
            tool_name: tool.to_string(),
            install_instructions: install.to_string(),
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

/// Compare installed tool versions against the supported minimums.
pub fn check_versions() -> Vec<VersionWarning> {
    let mut warnings = Vec::new();
    if let Some(found) = detect_version("node") {
        if found < MIN_NODE {
            warnings.push(VersionWarning {
                tool_name: "node".into(),
                found_version: found,
                minimum_version: MIN_NODE,
            });
        }
    }
    warnings
}

/// Run `tool --version` and parse stdout, falling back to stderr.
pub fn detect_version(tool: &str) -> Option<Version> {
    let path = which::which(tool).ok()?;
    let output = Command::new(path).arg("--version").output().ok()?;
    tracing::debug!("{tool} --version exited with {}", output.status);

    Version::parse(&String::from_utf8_lossy(&output.stdout))
        .or_else(|| Version::parse(&String::from_utf8_lossy(&output.stderr)))
}
