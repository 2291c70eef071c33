//! PDF rendering seam.
//!
//! `AppState` holds an `Arc<dyn PdfRenderer>`, so the HTML-to-PDF backend can
//! be swapped without touching the assembler or handlers. Production uses
//! headless Chrome over CDP; tests substitute a deterministic stub.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use futures_util::StreamExt;
use tracing::debug;

/// Running page header printed by the engine on every page.
const PAGE_HEADER_TEMPLATE: &str = r#"<div style="width: 100%; text-align: center; font-size: 9px; color: #666;">Lear Cyber Tech - Compliance Documentation</div>"#;

/// Running page footer with page numbers.
const PAGE_FOOTER_TEMPLATE: &str = r#"<div style="width: 100%; text-align: center; font-size: 9px; color: #666;">Page <span class="pageNumber"></span> of <span class="totalPages"></span></div>"#;

/// Renders a complete HTML page to PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>>;
}

/// Headless-Chrome renderer. Each render launches a fresh browser; nothing
/// is shared between requests.
pub struct ChromiumRenderer;

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to configure browser: {e}"))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .context("Failed to launch headless Chrome")?;

        // The handler stream must be driven for CDP messages to flow.
        let events = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let result = print_page(&browser, html).await;

        browser.close().await.ok();
        browser.wait().await.ok();
        events.abort();

        result
    }
}

async fn print_page(browser: &Browser, html: &str) -> Result<Vec<u8>> {
    let page = browser
        .new_page("about:blank")
        .await
        .context("Failed to open a page")?;

    page.set_content(html)
        .await
        .context("Failed to set page content")?;

    let params = PrintToPdfParams {
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        display_header_footer: Some(true),
        header_template: Some(PAGE_HEADER_TEMPLATE.to_string()),
        footer_template: Some(PAGE_FOOTER_TEMPLATE.to_string()),
        ..Default::default()
    };

    let pdf = page.pdf(params).await.context("printToPDF failed")?;
    debug!("Chromium produced {} PDF bytes", pdf.len());
    Ok(pdf)
}
