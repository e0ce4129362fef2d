//! Handlebars-based template renderer for generated projects and docs.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so any
//! `{{variable}}` missing from the data context is an error rather than an empty
//! string. HTML escaping is turned off: the outputs are TypeScript and Markdown,
//! and contract sources embedded in docs must come through byte for byte.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "contracts": ["FHECounter"], "deploy_id": "fhecounter" });
//! let output = renderer.render(embedded::DEPLOY_SCRIPT, &data)?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Template renderer using Handlebars in strict mode without HTML escaping.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
