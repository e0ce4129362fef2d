//! Template system for generated projects and documentation pages.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{contracts}}`: contract type names, in deployment order (deploy script)
//! - `{{example_name}}`, `{{contract_name}}`, `{{description}}`: example README
//! - `{{category_name}}`, `{{examples}}`: category README
//! - `{{title}}`, `{{tags}}`, `{{contract_source}}`, `{{test_source}}`: documentation page
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
