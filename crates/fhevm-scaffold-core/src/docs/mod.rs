//! Documentation generation from contract and test sources.
//!
//! For each example, the structured comment block of the contract (and,
//! optionally, of the test) is turned into a Markdown page at
//! `<docs_dir>/<example>.md` embedding both sources. The page is then linked
//! from `<docs_dir>/SUMMARY.md` under the example's category heading.
//!
//! A batch run over every example keeps going when one example fails and
//! reports all failures at the end.

pub mod extract;
pub mod index;
pub mod render;

use std::path::PathBuf;

use crate::catalog::{Catalog, ExampleDescriptor};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::resolver;
use crate::templates::renderer::TemplateRenderer;

use self::extract::{CommentBlock, DocumentationUnit};

/// A page written for one example.
#[derive(Debug, Clone)]
pub struct DocOutcome {
    pub example: &'static str,
    pub page: PathBuf,
    pub title: String,
    /// Whether a new link was added to the index.
    pub indexed: bool,
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<DocOutcome>,
    pub failed: Vec<(&'static str, ScaffoldError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate the page for one example and link it from the index.
pub fn generate_doc(
    config: &ScaffoldConfig,
    catalog: &Catalog,
    descriptor: &'static ExampleDescriptor,
) -> Result<DocOutcome> {
    generate_with(&TemplateRenderer::new(), config, catalog, descriptor)
}

/// Generate pages for every example in the catalog. `on_start` is called
/// before each example, e.g. to drive a progress bar.
pub fn generate_all(
    config: &ScaffoldConfig,
    catalog: &Catalog,
    mut on_start: impl FnMut(&ExampleDescriptor),
) -> BatchReport {
    let renderer = TemplateRenderer::new();
    let mut report = BatchReport::default();

    for descriptor in catalog.examples() {
        on_start(descriptor);
        match generate_with(&renderer, config, catalog, descriptor) {
            Ok(outcome) => report.generated.push(outcome),
            Err(e) => {
                tracing::warn!("docs for {} failed: {e}", descriptor.name);
                report.failed.push((descriptor.name, e));
            }
        }
    }
    report
}

fn generate_with(
    renderer: &TemplateRenderer,
    config: &ScaffoldConfig,
    catalog: &Catalog,
    descriptor: &'static ExampleDescriptor,
) -> Result<DocOutcome> {
    let example = resolver::resolve(config, descriptor)?;
    let unit = DocumentationUnit::from_contract(&example.contract_path, &example.contract_source)?;
    let test_tags = CommentBlock::parse(&example.test_source)
        .map(|block| block.tags)
        .unwrap_or_default();

    let page = render::render_page(renderer, &example, &unit, &test_tags)?;

    let docs_dir = config.docs_path();
    std::fs::create_dir_all(&docs_dir)?;
    let file_name = format!("{}.md", descriptor.name);
    let page_path = docs_dir.join(&file_name);
    std::fs::write(&page_path, page)?;
    tracing::info!("wrote {}", page_path.display());

    let indexed = index::update_index(
        &docs_dir.join(index::INDEX_FILE),
        catalog.category_title(descriptor.category),
        &unit.title,
        &file_name,
    )?;

    Ok(DocOutcome {
        example: descriptor.name,
        page: page_path,
        title: unit.title,
        indexed,
    })
}
