use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use fhevm_scaffold_core::catalog::Catalog;
use fhevm_scaffold_core::config::ScaffoldConfig;
use fhevm_scaffold_core::docs::{self, DocOutcome};

use crate::output;

/// Generate documentation for one example, or for all of them.
///
/// With `--all`, a failing example is reported and the batch continues; the
/// command still exits with an error if any example failed.
pub fn run(config: &ScaffoldConfig, catalog: &Catalog, name: Option<&str>, all: bool) -> Result<()> {
    output::print_header("fhevm-scaffold generate-docs");
    output::print_key_value("Docs", &config.docs_path().display().to_string());

    if !all {
        let Some(name) = name else {
            anyhow::bail!("give an example name or --all");
        };
        let descriptor = catalog.example(name)?;
        let outcome = docs::generate_doc(config, catalog, descriptor)?;
        print_outcome(&outcome);
        return Ok(());
    }

    let bar = ProgressBar::new(catalog.examples().len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let report = docs::generate_all(config, catalog, |descriptor| {
        bar.set_message(descriptor.name);
        bar.inc(1);
    });
    bar.finish_and_clear();

    for outcome in &report.generated {
        print_outcome(outcome);
    }
    for (name, error) in &report.failed {
        output::print_error(&format!("{name}: {error}"));
    }

    if !report.is_success() {
        anyhow::bail!(
            "documentation failed for {} of {} examples",
            report.failed.len(),
            catalog.examples().len()
        );
    }
    output::print_success(&format!("Generated {} pages", report.generated.len()));
    Ok(())
}

fn print_outcome(outcome: &DocOutcome) {
    let index_note = if outcome.indexed {
        "added to index"
    } else {
        "already indexed"
    };
    output::print_success(&format!(
        "{}: {} ({index_note})",
        outcome.example,
        outcome.page.display()
    ));
}
