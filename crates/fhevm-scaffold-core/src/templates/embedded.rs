//! Compile-time embedded templates.
//!
//! Each constant loads a file from the workspace `templates/` directory via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/fhevm-scaffold-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here,
//! and check that the Handlebars variables still match what the callers pass in.

// -------------------------------------------------------
// Generated project files
// -------------------------------------------------------

pub const DEPLOY_SCRIPT: &str = include_str!("../../../../templates/deploy/deploy.ts.hbs");
pub const EXAMPLE_README: &str = include_str!("../../../../templates/readme/example.md.hbs");
pub const CATEGORY_README: &str = include_str!("../../../../templates/readme/category.md.hbs");

// -------------------------------------------------------
// Documentation
// -------------------------------------------------------

pub const DOC_PAGE: &str = include_str!("../../../../templates/docs/example.md.hbs");
/// Starting content of `SUMMARY.md` when the index does not exist yet.
pub const DOC_SUMMARY: &str = include_str!("../../../../templates/docs/summary.md");
