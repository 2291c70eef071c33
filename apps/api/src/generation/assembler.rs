//! Document Assembler — orchestrates one generation.
//!
//! Flow: resolve template → substitute answers → markdown to HTML →
//!       wrap page chrome → render PDF.
//!
//! No side effects: persistence belongs to the Document Store. A failed
//! render leaves nothing behind.

use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::frameworks::FrameworkRegistry;
use crate::generation::html::{markdown_to_html, wrap_page};
use crate::generation::substitute::{substitute, Submission};
use crate::generation::templates::resolve_template;
use crate::render::PdfRenderer;

/// The two artifacts a generation produces.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub markdown: String,
    pub pdf: Vec<u8>,
}

/// Runs the full assembly pipeline for one submission.
///
/// Steps:
/// 1. resolve_template() — NotFound for unknown frameworks
/// 2. substitute() — bounded-token replacement of submitted answers
/// 3. markdown_to_html() + wrap_page()
/// 4. renderer.render_pdf() under the configured timeout
pub async fn assemble(
    registry: &FrameworkRegistry,
    config: &Config,
    renderer: &dyn PdfRenderer,
    submission: &Submission,
) -> Result<AssembledDocument, AppError> {
    let framework = registry.get(&submission.framework_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "Framework '{}' not found",
            submission.framework_id
        ))
    })?;

    let template = resolve_template(
        registry,
        &config.templates_dir,
        &submission.framework_id,
        &submission.section,
    )
    .await?;

    let markdown = substitute(&template, &submission.answers);
    info!(
        "Assembled markdown for {}/{} ({} answers)",
        submission.framework_id,
        submission.section,
        submission.answers.len()
    );

    let content_html = markdown_to_html(&markdown);
    let page = wrap_page(
        &framework.name,
        &submission.section,
        &content_html,
        config.logo_path.as_deref(),
    );

    let pdf = tokio::time::timeout(
        Duration::from_secs(config.render_timeout_secs),
        renderer.render_pdf(&page),
    )
    .await
    .map_err(|_| {
        AppError::Render(format!(
            "PDF render exceeded {}s timeout",
            config.render_timeout_secs
        ))
    })?
    .map_err(|e| AppError::Render(format!("PDF render failed: {e}")))?;

    info!(
        "Rendered {} PDF bytes for {}/{}",
        pdf.len(),
        submission.framework_id,
        submission.section
    );

    Ok(AssembledDocument { markdown, pdf })
}
