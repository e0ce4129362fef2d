use std::path::Path;

use anyhow::Result;

use fhevm_scaffold_core::catalog::Catalog;
use fhevm_scaffold_core::category;
use fhevm_scaffold_core::config::ScaffoldConfig;

use crate::output;

/// Generate one project with every example of a category.
///
/// Examples whose sources are missing are skipped with a warning; only an
/// unknown category, an existing destination, or a category with nothing
/// left to generate fail the command.
pub fn run(
    config: &ScaffoldConfig,
    catalog: &Catalog,
    category_name: &str,
    output_dir: Option<&Path>,
) -> Result<()> {
    let descriptor = catalog.category(category_name)?;
    output::print_header(&format!("fhevm-scaffold generate-category: {}", descriptor.name));

    let dest = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_category_dest(descriptor.name));

    output::print_step(
        1,
        2,
        &format!(
            "Generating {} examples in {}",
            descriptor.examples.len(),
            dest.display()
        ),
    );
    let report = category::generate_category(config, catalog, descriptor.name, &dest)?;

    for skipped in &report.skipped {
        output::print_warning(&format!("Skipped {}: {}", skipped.name, skipped.reason));
    }
    output::print_key_value("Package", &report.project.project_name);
    output::print_key_value("Examples", &report.included.join(", "));
    output::print_key_value("Deploy order", &report.project.contracts.join(" → "));

    output::print_step(2, 2, "Checking prerequisites");
    super::check_toolchain();

    output::print_success(&format!(
        "Category '{}' generated with {} of {} examples",
        descriptor.name,
        report.included.len(),
        descriptor.examples.len()
    ));
    output::print_next_steps(&dest);

    Ok(())
}
