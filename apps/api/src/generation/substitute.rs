//! Placeholder substitution.
//!
//! Templates carry `{{field_id}}` tokens. Substitution rewrites complete,
//! bounded tokens only — a bare `field_id` in prose is never touched, and a
//! token whose field was not submitted stays verbatim in the output.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// `{{ field_id }}`, inner whitespace optional, identifier-shaped keys only.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// A submitted answer: free text or a multi-select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Multi(Vec<String>),
}

impl FieldValue {
    /// Display form inserted into documents. Multi-select values are joined
    /// with `", "`.
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Multi(items) => items.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Multi(items) => items.is_empty(),
        }
    }
}

/// One document generation request: routing keys plus the form answers.
///
/// The routing keys are struct fields and the answers are flattened, so
/// `framework_id`/`section` can never collide with a placeholder. The answer
/// map is ordered, which keeps assembly deterministic for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub framework_id: String,
    pub section: String,
    #[serde(flatten)]
    pub answers: BTreeMap<String, FieldValue>,
}

impl Submission {
    /// True when a field has no usable answer: absent, blank text, or an
    /// empty selection.
    pub fn is_unanswered(&self, field_id: &str) -> bool {
        match self.answers.get(field_id) {
            None => true,
            Some(value) => value.is_empty(),
        }
    }
}

/// Replaces every `{{field_id}}` token that has a submitted value with that
/// value's display form. Tokens without a matching answer are left intact.
pub fn substitute(template: &str, answers: &BTreeMap<String, FieldValue>) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| match answers.get(&caps[1]) {
            Some(value) => value.to_display(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_replaces_all_occurrences_of_a_token() {
        let template = "{{ org_name }} is committed. Contact {{ org_name }} for details.";
        let result = substitute(
            template,
            &answers(&[("org_name", FieldValue::Text("Acme".to_string()))]),
        );
        assert_eq!(result, "Acme is committed. Contact Acme for details.");
        assert!(!result.contains("{{"));
    }

    #[test]
    fn test_token_whitespace_is_optional() {
        let template = "{{org_name}} and {{  org_name  }}";
        let result = substitute(
            template,
            &answers(&[("org_name", FieldValue::Text("Acme".to_string()))]),
        );
        assert_eq!(result, "Acme and Acme");
    }

    #[test]
    fn test_bare_field_name_in_prose_is_untouched() {
        let template = "The org_name field feeds {{ org_name }}.";
        let result = substitute(
            template,
            &answers(&[("org_name", FieldValue::Text("Acme".to_string()))]),
        );
        assert_eq!(result, "The org_name field feeds Acme.");
    }

    #[test]
    fn test_unanswered_token_stays_verbatim() {
        let template = "Owner: {{ dpo_name }}";
        let result = substitute(template, &answers(&[]));
        assert_eq!(result, "Owner: {{ dpo_name }}");
    }

    #[test]
    fn test_multi_values_join_comma_separated() {
        let template = "Covers {{ data_types }}.";
        let result = substitute(
            template,
            &answers(&[(
                "data_types",
                FieldValue::Multi(vec![
                    "Personal data".to_string(),
                    "Customer data".to_string(),
                ]),
            )]),
        );
        assert_eq!(result, "Covers Personal data, Customer data.");
    }

    #[test]
    fn test_substitution_is_deterministic() {
        let template = "{{ a }} {{ b }} {{ a }}";
        let map = answers(&[
            ("a", FieldValue::Text("1".to_string())),
            ("b", FieldValue::Text("2".to_string())),
        ]);
        assert_eq!(substitute(template, &map), substitute(template, &map));
    }

    #[test]
    fn test_dollar_signs_in_values_are_literal() {
        let template = "Budget: {{ budget }}";
        let result = substitute(
            template,
            &answers(&[("budget", FieldValue::Text("$100".to_string()))]),
        );
        assert_eq!(result, "Budget: $100");
    }

    #[test]
    fn test_submission_flattens_answers_on_the_wire() {
        let json = r#"{
            "framework_id": "gdpr",
            "section": "Data Protection Policy",
            "org_name": "Acme",
            "data_types": ["Personal data", "Customer data"]
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.framework_id, "gdpr");
        assert_eq!(submission.answers.len(), 2);
        assert_eq!(
            submission.answers.get("org_name"),
            Some(&FieldValue::Text("Acme".to_string()))
        );
        assert_eq!(
            submission.answers.get("data_types"),
            Some(&FieldValue::Multi(vec![
                "Personal data".to_string(),
                "Customer data".to_string()
            ]))
        );
    }

    #[test]
    fn test_is_unanswered() {
        let mut submission: Submission = serde_json::from_str(
            r#"{"framework_id": "gdpr", "section": "s", "org_name": "Acme"}"#,
        )
        .unwrap();
        assert!(!submission.is_unanswered("org_name"));
        assert!(submission.is_unanswered("org_size"));

        submission
            .answers
            .insert("blank".to_string(), FieldValue::Text("   ".to_string()));
        submission
            .answers
            .insert("none_picked".to_string(), FieldValue::Multi(vec![]));
        assert!(submission.is_unanswered("blank"));
        assert!(submission.is_unanswered("none_picked"));
    }
}
