//! Question Loader — resolves the question set for a (framework, section) pair.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::anyhow;
use tracing::debug;

use crate::errors::AppError;
use crate::frameworks::FrameworkRegistry;
use crate::questionnaire::models::{InputKind, Question};
use crate::store::section_slug;

/// Loads the ordered question set for `section` of `framework_id`.
///
/// An unknown framework fails with NotFound. An unknown section never fails:
/// when no `questions/{framework_id}_{slug}.json` file exists the built-in
/// default set is returned. A file that exists but does not parse is a
/// deployment defect and surfaces as an internal error.
pub async fn load_questions(
    registry: &FrameworkRegistry,
    templates_dir: &Path,
    framework_id: &str,
    section: &str,
) -> Result<Vec<Question>, AppError> {
    if registry.get(framework_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Framework '{framework_id}' not found"
        )));
    }

    let path = templates_dir
        .join("questions")
        .join(format!("{framework_id}_{}.json", section_slug(section)));

    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(anyhow!("Malformed question file {}: {e}", path.display()))
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                "No question file at {}, using default set",
                path.display()
            );
            Ok(default_questions())
        }
        Err(e) => Err(AppError::Storage(e)),
    }
}

/// The generic organizational questions used when a section ships without its
/// own question file.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: "org_name".to_string(),
            text: "What is your organization's name?".to_string(),
            kind: InputKind::Text,
            options: vec![],
            required: true,
        },
        Question {
            id: "org_description".to_string(),
            text: "Briefly describe your organization's activities".to_string(),
            kind: InputKind::Textarea,
            options: vec![],
            required: true,
        },
        Question {
            id: "org_size".to_string(),
            text: "What is the size of your organization?".to_string(),
            kind: InputKind::Select,
            options: vec![
                "1-10 employees".to_string(),
                "11-50 employees".to_string(),
                "51-250 employees".to_string(),
                "251-1000 employees".to_string(),
                "1000+ employees".to_string(),
            ],
            required: true,
        },
        Question {
            id: "data_types".to_string(),
            text: "What types of data does your organization process?".to_string(),
            kind: InputKind::Checkbox,
            options: vec![
                "Personal data".to_string(),
                "Sensitive personal data".to_string(),
                "Health data".to_string(),
                "Financial data".to_string(),
                "Employee data".to_string(),
                "Customer data".to_string(),
                "Other".to_string(),
            ],
            required: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::FrameworkRegistry;

    #[tokio::test]
    async fn test_unknown_framework_fails_not_found() {
        let registry = FrameworkRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let result = load_questions(&registry, dir.path(), "unknown", "Privacy Notice").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let registry = FrameworkRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let questions = load_questions(&registry, dir.path(), "gdpr", "Privacy Notice")
            .await
            .unwrap();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].id, "org_name");
        assert!(questions.iter().all(|q| q.required));
    }

    #[tokio::test]
    async fn test_unknown_section_never_fails() {
        let registry = FrameworkRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let questions = load_questions(&registry, dir.path(), "gdpr", "No Such Section")
            .await
            .unwrap();
        assert!(!questions.is_empty());
    }

    #[tokio::test]
    async fn test_section_file_overrides_defaults() {
        let registry = FrameworkRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let questions_dir = dir.path().join("questions");
        std::fs::create_dir_all(&questions_dir).unwrap();
        std::fs::write(
            questions_dir.join("gdpr_privacy_notice.json"),
            r#"[{"id": "dpo_name", "text": "Who is your DPO?", "type": "text", "required": true}]"#,
        )
        .unwrap();

        let questions = load_questions(&registry, dir.path(), "gdpr", "Privacy Notice")
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "dpo_name");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error_not_a_fallback() {
        let registry = FrameworkRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let questions_dir = dir.path().join("questions");
        std::fs::create_dir_all(&questions_dir).unwrap();
        std::fs::write(questions_dir.join("gdpr_privacy_notice.json"), "not json").unwrap();

        let result = load_questions(&registry, dir.path(), "gdpr", "Privacy Notice").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
