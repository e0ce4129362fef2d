//! Markdown page rendering for one example.

use serde_json::json;

use crate::docs::extract::DocumentationUnit;
use crate::error::Result;
use crate::resolver::ResolvedExample;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Backtick fence one longer than the longest backtick run in `source`, at least three.
pub fn fence_for(source: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in source.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Render the documentation page of `example`. `extra_tags` come from the
/// test file and are listed after the contract's own tags.
pub fn render_page(
    renderer: &TemplateRenderer,
    example: &ResolvedExample,
    unit: &DocumentationUnit,
    extra_tags: &[(String, String)],
) -> Result<String> {
    let tags: Vec<_> = unit
        .tags
        .iter()
        .chain(extra_tags)
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    let contract_source = example.contract_source.trim_end_matches(['\r', '\n']);
    let test_source = example.test_source.trim_end_matches(['\r', '\n']);

    renderer.render(
        embedded::DOC_PAGE,
        &json!({
            "title": unit.title,
            "description": unit.description,
            "tags": tags,
            "example_name": example.descriptor.name,
            "contract_file": example.contract_file_name(),
            "test_file": example.test_file_name(),
            "contract_source": contract_source,
            "contract_fence": fence_for(contract_source),
            "test_source": test_source,
            "test_fence": fence_for(test_source),
        }),
    )
}
