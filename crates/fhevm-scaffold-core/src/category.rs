//! Category project generation: every example of a category in one project.
//!
//! Unlike [`generate_example`](crate::materialize::generate_example), a member
//! whose sources are missing, unreadable or malformed is skipped with a warning instead of
//! failing the whole run. Members whose contract or test file name collides
//! with an earlier member are skipped the same way. Only an unknown category,
//! a destination conflict, template problems, or a category with no
//! generatable member abort generation.

use std::collections::HashSet;
use std::path::Path;

use serde_json::json;

use crate::catalog::Catalog;
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::materialize::{self, GeneratedProject, README};
use crate::resolver::{self, ResolvedExample};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// A category member left out of the generated project.
#[derive(Debug, Clone)]
pub struct SkippedExample {
    pub name: &'static str,
    pub reason: String,
}

/// Outcome of a category run.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub project: GeneratedProject,
    /// Example names included, in declared order.
    pub included: Vec<&'static str>,
    pub skipped: Vec<SkippedExample>,
}

/// Generate one project holding every example of `category_name`.
pub fn generate_category(
    config: &ScaffoldConfig,
    catalog: &Catalog,
    category_name: &str,
    dest: &Path,
) -> Result<CategoryReport> {
    let category = catalog.category(category_name)?;
    let members = catalog.members(category)?;
    materialize::ensure_absent(dest)?;

    let mut resolved: Vec<ResolvedExample> = Vec::new();
    let mut skipped = Vec::new();
    let mut file_names = HashSet::new();

    for descriptor in members {
        let example = match resolver::resolve(config, descriptor) {
            Ok(example) => example,
            Err(e) if e.is_per_example() => {
                tracing::warn!("skipping {}: {e}", descriptor.name);
                skipped.push(SkippedExample {
                    name: descriptor.name,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let contract_file = example.contract_file_name();
        let test_file = example.test_file_name();
        if file_names.contains(&contract_file) || file_names.contains(&test_file) {
            let reason = format!(
                "{contract_file} or {test_file} already provided by an earlier example"
            );
            tracing::warn!("skipping {}: {reason}", descriptor.name);
            skipped.push(SkippedExample {
                name: descriptor.name,
                reason,
            });
            continue;
        }
        file_names.insert(contract_file);
        file_names.insert(test_file);
        resolved.push(example);
    }

    if resolved.is_empty() {
        return Err(ScaffoldError::EmptyCategory(category.name.to_string()));
    }

    tracing::info!(
        "generating category {} ({} of {} examples) into {}",
        category.name,
        resolved.len(),
        category.examples.len(),
        dest.display()
    );

    let mut tree = materialize::base_tree(config)?;
    for example in &resolved {
        materialize::add_example(&mut tree, example);
    }

    let project_name = category.project_name();
    materialize::rewrite_manifest(&mut tree, config, &project_name, category.description)?;

    let renderer = TemplateRenderer::new();
    let contracts: Vec<String> = resolved.iter().map(|e| e.type_name.clone()).collect();
    tree.insert(
        materialize::DEPLOY_SCRIPT,
        materialize::render_deploy(&renderer, &contracts, &project_name)?,
    );

    let examples: Vec<_> = resolved
        .iter()
        .map(|e| {
            json!({
                "name": e.descriptor.name,
                "description": e.descriptor.description,
                "contract_file": e.contract_file_name(),
                "test_file": e.test_file_name(),
            })
        })
        .collect();
    tree.insert(
        README,
        renderer.render(
            embedded::CATEGORY_README,
            &json!({
                "category_name": category.name,
                "category_title": category.title,
                "description": category.description,
                "count": resolved.len(),
                "examples": examples,
            }),
        )?,
    );

    materialize::commit(&tree, dest)?;

    Ok(CategoryReport {
        project: GeneratedProject {
            path: dest.to_path_buf(),
            project_name,
            contracts,
            file_count: tree.len(),
        },
        included: resolved.iter().map(|e| e.descriptor.name).collect(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, list_files};

    fn contract_files(dest: &Path) -> Vec<String> {
        list_files(dest)
            .into_iter()
            .filter(|f| f.starts_with("contracts/"))
            .collect()
    }

    #[test]
    fn test_generate_full_category() {
        let hub = testutil::Hub::new();
        let dest = hub.out("cat1");
        let report = generate_category(&hub.config, &hub.catalog, "basic", &dest).unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(report.included, ["fhe-counter", "fhe-add", "encrypt-single-value"]);
        assert_eq!(report.project.project_name, "fhevm-examples-basic");
        assert_eq!(
            contract_files(&dest),
            [
                "contracts/EncryptSingleValue.sol",
                "contracts/FHEAdd.sol",
                "contracts/FHECounter.sol"
            ]
        );

        let deploy = std::fs::read_to_string(dest.join(materialize::DEPLOY_SCRIPT)).unwrap();
        let positions: Vec<_> = ["FHECounter", "FHEAdd", "EncryptSingleValue"]
            .iter()
            .map(|name| deploy.find(&format!("deploy(\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(deploy.contains("func.id = \"deploy_fhevm_examples_basic\";"));

        let readme = std::fs::read_to_string(dest.join(README)).unwrap();
        for name in &report.included {
            assert!(readme.contains(name), "{name} missing from README");
        }

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dest.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "fhevm-examples-basic");
        assert_eq!(manifest["description"], "Fundamentals");
    }

    #[test]
    fn test_missing_member_is_skipped() {
        let hub = testutil::Hub::new();
        hub.remove_source("contracts/operations/FHEAdd.sol");
        let dest = hub.out("cat2");

        let report = generate_category(&hub.config, &hub.catalog, "basic", &dest).unwrap();
        assert_eq!(report.included, ["fhe-counter", "encrypt-single-value"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "fhe-add");

        assert_eq!(
            contract_files(&dest),
            ["contracts/EncryptSingleValue.sol", "contracts/FHECounter.sol"]
        );
        let tests: Vec<_> = list_files(&dest)
            .into_iter()
            .filter(|f| f.starts_with("test/"))
            .collect();
        assert_eq!(tests.len(), 2);

        let deploy = std::fs::read_to_string(dest.join(materialize::DEPLOY_SCRIPT)).unwrap();
        assert!(!deploy.contains("FHEAdd"));
        assert_eq!(report.project.contracts, ["FHECounter", "EncryptSingleValue"]);
    }

    #[test]
    fn test_malformed_member_is_skipped() {
        let hub = testutil::Hub::new();
        hub.write_source("contracts/basic/FHECounter.sol", "library Nope {}\n");
        let dest = hub.out("cat3");

        let report = generate_category(&hub.config, &hub.catalog, "basic", &dest).unwrap();
        assert_eq!(report.skipped[0].name, "fhe-counter");
        assert_eq!(report.included.len(), 2);
    }

    #[test]
    fn test_non_utf8_member_is_skipped() {
        let hub = testutil::Hub::new();
        std::fs::write(
            hub.path().join("contracts/operations/FHEAdd.sol"),
            b"contract FHEAdd {}\n\xff\xfe\n",
        )
        .unwrap();
        let dest = hub.out("cat8");

        let report = generate_category(&hub.config, &hub.catalog, "basic", &dest).unwrap();
        assert_eq!(report.included, ["fhe-counter", "encrypt-single-value"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "fhe-add");
        assert!(report.skipped[0].reason.contains("FHEAdd.sol"));
        assert!(!dest.join("contracts/FHEAdd.sol").exists());
    }

    #[test]
    fn test_unknown_category_creates_nothing() {
        let hub = testutil::Hub::new();
        let dest = hub.out("cat4");
        assert!(matches!(
            generate_category(&hub.config, &hub.catalog, "nope", &dest),
            Err(ScaffoldError::UnknownCategory(_))
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_all_members_missing() {
        let hub = testutil::Hub::new();
        hub.remove_source("contracts/auctions/BlindAuction.sol");
        let dest = hub.out("cat5");
        assert!(matches!(
            generate_category(&hub.config, &hub.catalog, "auctions", &dest),
            Err(ScaffoldError::EmptyCategory(_))
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_existing_destination() {
        let hub = testutil::Hub::new();
        let dest = hub.out("cat6");
        std::fs::create_dir_all(&dest).unwrap();
        assert!(matches!(
            generate_category(&hub.config, &hub.catalog, "basic", &dest),
            Err(ScaffoldError::DestinationExists(_))
        ));
        assert!(list_files(&dest).is_empty());
    }

    #[test]
    fn test_duplicate_type_name_is_skipped() {
        let hub = testutil::Hub::new();
        hub.write_source(
            "contracts/operations/FHEAdd.sol",
            "contract FHECounter {\n}\n",
        );
        let dest = hub.out("cat7");

        let report = generate_category(&hub.config, &hub.catalog, "basic", &dest).unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "fhe-add");
        assert_eq!(
            std::fs::read_to_string(dest.join("contracts/FHECounter.sol")).unwrap(),
            testutil::COUNTER_SOL
        );
    }
}
