//! Document Store — owns generated artifacts, keyed by document id.
//!
//! Each generation gets its own UUID directory under the store root holding
//! the submitted form values (audit record), the rendered markdown, and the
//! PDF. Ids are typed UUIDs and requested filenames are sanitized, so a
//! lookup can never resolve outside the document's directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::anyhow;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::Submission;

static FILENAME_SANITIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w.]").unwrap());

/// Strips every character outside word characters, dots, and underscores.
pub fn sanitize_filename(name: &str) -> String {
    FILENAME_SANITIZE_RE.replace_all(name, "").into_owned()
}

/// Filesystem name for a section: lowercased, spaces to underscores, then
/// sanitized with the same character class as download lookups.
pub fn section_slug(section: &str) -> String {
    sanitize_filename(&section.to_lowercase().replace(' ', "_"))
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persists one generation under a fresh document id and returns the id.
    ///
    /// Writes `form_data.json`, `{section_slug}.md`, and `{section_slug}.pdf`
    /// into the document's directory. Callers only reach this after a
    /// successful render, so a stored document is always complete.
    pub async fn create(
        &self,
        submission: &Submission,
        markdown: &str,
        pdf: &[u8],
    ) -> Result<Uuid, AppError> {
        let doc_id = Uuid::new_v4();
        let dir = self.root.join(doc_id.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        let record = serde_json::to_vec_pretty(submission)
            .map_err(|e| AppError::Internal(anyhow!("Failed to serialize submission: {e}")))?;
        tokio::fs::write(dir.join("form_data.json"), record).await?;

        let slug = section_slug(&submission.section);
        tokio::fs::write(dir.join(format!("{slug}.md")), markdown).await?;
        tokio::fs::write(dir.join(format!("{slug}.pdf")), pdf).await?;

        info!(
            "Persisted document {doc_id} ({slug}, {} PDF bytes)",
            pdf.len()
        );
        Ok(doc_id)
    }

    /// Reads back a stored PDF by document id and sanitized filename.
    pub async fn fetch_pdf(&self, doc_id: Uuid, filename: &str) -> Result<Vec<u8>, AppError> {
        let filename = sanitize_filename(filename);
        let path = self
            .root
            .join(doc_id.to_string())
            .join(format!("{filename}.pdf"));

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound(format!(
                "Document file '{filename}' not found"
            ))),
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
