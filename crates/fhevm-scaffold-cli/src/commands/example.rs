use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use fhevm_scaffold_core::catalog::{Catalog, ExampleDescriptor};
use fhevm_scaffold_core::config::ScaffoldConfig;
use fhevm_scaffold_core::materialize;

use crate::output;

/// Generate a standalone project for one example.
///
/// Fails before anything is written if the example is unknown, the
/// destination exists, or a source file is missing. If no name is given and
/// stdin is a terminal, prompts for one.
pub fn run(
    config: &ScaffoldConfig,
    catalog: &Catalog,
    name: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let descriptor = match name {
        Some(name) => catalog.example(name)?,
        None => select_example(catalog)?,
    };

    output::print_header(&format!("fhevm-scaffold generate-example: {}", descriptor.name));

    let dest = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_example_dest(descriptor.name));

    output::print_step(1, 2, &format!("Generating project in {}", dest.display()));
    let project = materialize::generate_example(config, descriptor, &dest)?;

    output::print_key_value("Package", &project.project_name);
    output::print_key_value("Contract", &project.contracts.join(", "));
    output::print_key_value("Files", &project.file_count.to_string());

    output::print_step(2, 2, "Checking prerequisites");
    super::check_toolchain();

    output::print_success(&format!(
        "Example '{}' generated in {}",
        descriptor.name,
        dest.display()
    ));
    output::print_next_steps(&dest);

    Ok(())
}

fn select_example(catalog: &Catalog) -> Result<&'static ExampleDescriptor> {
    if !console::user_attended() {
        anyhow::bail!("no example name given (run `fhevm-scaffold list` to see available examples)");
    }

    let examples = catalog.examples();
    let items: Vec<String> = examples
        .iter()
        .map(|e| format!("{} — {}", e.name, e.description))
        .collect();

    let selection = Select::new()
        .with_prompt("Select an example")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(&examples[selection])
}
