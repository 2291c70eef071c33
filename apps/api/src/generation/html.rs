//! Markdown-to-HTML conversion and the fixed document page chrome.

use std::path::Path;

use chrono::{Datelike, Local};
use pulldown_cmark::{html, Options, Parser};

/// Organization branding carried in every generated document.
pub const ORG_NAME: &str = "Lear Cyber Tech";
const ATTRIBUTION: &str =
    "This document was automatically generated by Lear Cyber Tech's Compliance Documentation Generator.";

/// Print stylesheet applied to every generated document.
const STYLESHEET: &str = r#"
@page {
    margin: 1cm;
}
body {
    font-family: "Helvetica Neue", Arial, sans-serif;
    font-size: 11pt;
    line-height: 1.5;
}
h1 {
    color: #0a0a1a;
    font-size: 18pt;
    margin-top: 2cm;
    margin-bottom: 1cm;
    text-align: center;
    border-bottom: 1px solid #0a0a1a;
    padding-bottom: 0.5cm;
}
h2 {
    color: #0a0a1a;
    font-size: 14pt;
    margin-top: 1cm;
    margin-bottom: 0.5cm;
    border-bottom: 1px solid #ddd;
    padding-bottom: 0.2cm;
}
h3 {
    color: #0a0a1a;
    font-size: 12pt;
    margin-top: 0.8cm;
    margin-bottom: 0.3cm;
}
p {
    margin-bottom: 0.5cm;
}
table {
    width: 100%;
    border-collapse: collapse;
    margin: 1cm 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 0.3cm;
    text-align: left;
}
th {
    background-color: #f2f2f2;
}
.header {
    text-align: center;
    margin-bottom: 1cm;
}
.header img {
    height: 2cm;
    margin-bottom: 0.5cm;
}
.footer {
    margin-top: 2cm;
    padding-top: 0.5cm;
    border-top: 1px solid #ddd;
}
"#;

/// Converts markdown to HTML with CommonMark semantics plus tables.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wraps rendered document HTML in the full printable page: stylesheet,
/// header block (logo, title, generation date), and footer block
/// (attribution, copyright year).
pub fn wrap_page(
    framework_name: &str,
    section: &str,
    content_html: &str,
    logo_path: Option<&Path>,
) -> String {
    let title = escape_html(&format!("{framework_name} - {section}"));
    let date = Local::now().format("%B %d, %Y");
    let year = Local::now().year();

    let logo = logo_path
        .map(|p| {
            format!(
                r#"<img src="file://{}" alt="{ORG_NAME} Logo">"#,
                p.display()
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>{STYLESHEET}</style>
</head>
<body>
<div class="header">
    {logo}
    <h1>{title}</h1>
    <p>Generated on {date}</p>
</div>
{content_html}
<div class="footer">
    <p>{ATTRIBUTION}</p>
    <p>&copy; {year} {ORG_NAME}. All rights reserved.</p>
</div>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_and_lists() {
        let html = markdown_to_html("# Title\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_markdown_tables_are_enabled() {
        let html = markdown_to_html("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_markdown_emphasis() {
        let html = markdown_to_html("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_wrap_page_contains_title_and_footer() {
        let page = wrap_page("GDPR", "Privacy Notice", "<p>body</p>", None);
        assert!(page.contains("<h1>GDPR - Privacy Notice</h1>"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains(ATTRIBUTION));
        assert!(page.contains("All rights reserved"));
        assert!(!page.contains("<img"));
    }

    #[test]
    fn test_wrap_page_embeds_logo_when_configured() {
        let page = wrap_page(
            "GDPR",
            "Privacy Notice",
            "<p>body</p>",
            Some(Path::new("/opt/assets/logo.png")),
        );
        assert!(page.contains(r#"src="file:///opt/assets/logo.png""#));
    }

    #[test]
    fn test_wrap_page_escapes_markup_in_section() {
        let page = wrap_page("GDPR", "<script>alert(1)</script>", "<p>x</p>", None);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
