use fhevm_scaffold_core::catalog::Catalog;

use crate::output;

/// Print every category with its examples, in declared order.
pub fn run(catalog: &Catalog) {
    output::print_header("fhevm-scaffold list");

    for category in catalog.categories() {
        println!();
        println!("{} — {}", console::style(category.name).bold(), category.description);
        for name in category.examples {
            let description = catalog
                .example(name)
                .map(|e| e.description)
                .unwrap_or("(not in catalog)");
            output::print_key_value(name, description);
        }
    }
    println!();
}
