//! Single-example project generation.
//!
//! A generated project is the base template with its placeholder contract and
//! test removed, the example's sources copied in, and `package.json`,
//! `deploy/deploy.ts` and `README.md` rewritten for the example.
//!
//! ## Atomicity
//!
//! Nothing is written to the destination directly. The finished tree is
//! written into a staging directory next to the destination and renamed into
//! place as the very last step, so the destination is either absent or
//! complete. The destination must not exist: this is checked before any work
//! and again right before the rename.
//!
//! Concurrent runs against the same destination are not coordinated; callers
//! serialize them.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::catalog::{slugify, ExampleDescriptor};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::manifest::{self, MANIFEST_FILE};
use crate::resolver::{self, ResolvedExample};
use crate::template::TemplateTree;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

pub const CONTRACTS_DIR: &str = "contracts";
pub const TEST_DIR: &str = "test";
pub const DEPLOY_SCRIPT: &str = "deploy/deploy.ts";
pub const README: &str = "README.md";

/// Summary of a project written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub path: PathBuf,
    /// `name` written into `package.json`.
    pub project_name: String,
    /// Contract type names, in deployment order.
    pub contracts: Vec<String>,
    pub file_count: usize,
}

/// Generate a standalone project for one example at `dest`.
pub fn generate_example(
    config: &ScaffoldConfig,
    descriptor: &'static ExampleDescriptor,
    dest: &Path,
) -> Result<GeneratedProject> {
    ensure_absent(dest)?;

    let example = resolver::resolve(config, descriptor)?;
    tracing::info!(
        "generating {} ({}) into {}",
        descriptor.name,
        example.type_name,
        dest.display()
    );

    let mut tree = base_tree(config)?;
    add_example(&mut tree, &example);

    let project_name = descriptor.project_name();
    rewrite_manifest(&mut tree, config, &project_name, descriptor.description)?;

    let renderer = TemplateRenderer::new();
    let contracts = vec![example.type_name.clone()];
    tree.insert(
        DEPLOY_SCRIPT,
        render_deploy(&renderer, &contracts, &example.type_name.to_lowercase())?,
    );
    tree.insert(
        README,
        renderer.render(
            embedded::EXAMPLE_README,
            &json!({
                "example_name": descriptor.name,
                "description": descriptor.description,
                "contract_name": example.type_name,
                "contract_file": example.contract_file_name(),
                "test_file": example.test_file_name(),
            }),
        )?,
    );

    commit(&tree, dest)?;

    Ok(GeneratedProject {
        path: dest.to_path_buf(),
        project_name,
        contracts,
        file_count: tree.len(),
    })
}

/// Fail if anything (file, directory or dangling link) exists at `dest`.
pub(crate) fn ensure_absent(dest: &Path) -> Result<()> {
    if std::fs::symlink_metadata(dest).is_ok() {
        return Err(ScaffoldError::DestinationExists(dest.to_path_buf()));
    }
    Ok(())
}

/// Read the template and drop its placeholder example files.
pub(crate) fn base_tree(config: &ScaffoldConfig) -> Result<TemplateTree> {
    let mut tree = TemplateTree::read(&config.template_path(), &config.exclude)?;
    for placeholder in &config.placeholders {
        if tree.remove(placeholder).is_some() {
            tracing::debug!("removed placeholder {}", placeholder.display());
        }
    }
    Ok(tree)
}

/// Copy an example's contract and test into the tree.
pub(crate) fn add_example(tree: &mut TemplateTree, example: &ResolvedExample) {
    tree.insert(
        Path::new(CONTRACTS_DIR).join(example.contract_file_name()),
        example.contract_source.as_bytes(),
    );
    tree.insert(
        Path::new(TEST_DIR).join(example.test_file_name()),
        example.test_source.as_bytes(),
    );
}

pub(crate) fn rewrite_manifest(
    tree: &mut TemplateTree,
    config: &ScaffoldConfig,
    name: &str,
    description: &str,
) -> Result<()> {
    let origin = config.template_path().join(MANIFEST_FILE);
    let contents = tree
        .get(MANIFEST_FILE)
        .ok_or_else(|| ScaffoldError::ManifestParse {
            path: origin.clone(),
            reason: "file not found in template".into(),
        })?;
    let rewritten = manifest::rewrite(contents, name, description, &origin)?;
    tree.insert(MANIFEST_FILE, rewritten);
    Ok(())
}

pub(crate) fn render_deploy(
    renderer: &TemplateRenderer,
    contracts: &[String],
    id: &str,
) -> Result<String> {
    renderer.render(
        embedded::DEPLOY_SCRIPT,
        &json!({
            "contracts": contracts,
            "deploy_id": slugify(id).replace('-', "_"),
        }),
    )
}

/// Write `tree` into a staging directory beside `dest`, then rename it into place.
pub(crate) fn commit(tree: &TemplateTree, dest: &Path) -> Result<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Removed on drop, whether or not the rename happened.
    let staging = tempfile::Builder::new()
        .prefix(".fhevm-scaffold-")
        .tempdir_in(parent)?;
    let staged = staging.path().join("project");
    std::fs::create_dir(&staged)?;
    tree.write_to(&staged)?;

    ensure_absent(dest)?;
    std::fs::rename(&staged, dest)?;
    tracing::info!("wrote {} files to {}", tree.len(), dest.display());
    Ok(())
}
