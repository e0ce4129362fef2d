//! CLI command implementations for fhevm-scaffold.
//!
//! Each module corresponds to a subcommand (`fhevm-scaffold <command>`).

pub mod category;
pub mod docs;
pub mod example;
pub mod list;

use crate::output;

/// Warn about missing or outdated Node.js tooling. Never fails.
pub(crate) fn check_toolchain() {
    use fhevm_scaffold_core::toolchain;

    match toolchain::check_prerequisites() {
        Ok(()) => {
            for w in toolchain::check_versions() {
                output::print_warning(&format!(
                    "{}: found v{}, minimum v{} recommended",
                    w.tool_name, w.found_version, w.minimum_version
                ));
            }
        }
        Err(missing) => {
            for m in &missing {
                output::print_warning(&format!(
                    "Missing: {} — install: {}",
                    m.tool_name, m.install_instructions
                ));
            }
        }
    }
}
