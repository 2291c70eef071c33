//! Key-field extraction from raw data API records.

use serde::Serialize;
use serde_json::Value;

/// The condensed company record written to `company_summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub industries: Vec<String>,
    pub specialities: Vec<String>,
    pub website: Option<String>,
    pub follower_count: Option<u64>,
    pub staff_count: Option<u64>,
    pub staff_range: Option<Value>,
}

/// Pulls the summary fields out of a raw company record. Absent or
/// unexpectedly-typed fields simply come back empty.
pub fn extract_company_summary(data: &Value) -> CompanySummary {
    CompanySummary {
        name: string_field(data, "name"),
        tagline: string_field(data, "tagline"),
        description: string_field(data, "description"),
        industries: string_list(data, "industries"),
        specialities: string_list(data, "specialities"),
        website: string_field(data, "website"),
        follower_count: data.get("followerCount").and_then(Value::as_u64),
        staff_count: data.get("staffCount").and_then(Value::as_u64),
        staff_range: data.get("staffCountRange").cloned(),
    }
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(String::from)
}

fn string_list(data: &Value, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_all_fields_from_full_record() {
        let data = json!({
            "name": "Lear Cyber Tech",
            "tagline": "Security first",
            "description": "Compliance and security services",
            "industries": ["IT Services", "Security"],
            "specialities": ["GDPR", "ISO 27001"],
            "website": "https://example.com",
            "followerCount": 1200,
            "staffCount": 25,
            "staffCountRange": {"start": 11, "end": 50}
        });

        let summary = extract_company_summary(&data);
        assert_eq!(summary.name.as_deref(), Some("Lear Cyber Tech"));
        assert_eq!(summary.industries, vec!["IT Services", "Security"]);
        assert_eq!(summary.follower_count, Some(1200));
        assert_eq!(summary.staff_range, Some(json!({"start": 11, "end": 50})));
    }

    #[test]
    fn test_tolerates_missing_fields() {
        let summary = extract_company_summary(&json!({"name": "Lear Cyber Tech"}));
        assert_eq!(summary.name.as_deref(), Some("Lear Cyber Tech"));
        assert!(summary.tagline.is_none());
        assert!(summary.industries.is_empty());
        assert!(summary.staff_count.is_none());
    }

    #[test]
    fn test_tolerates_wrongly_typed_fields() {
        let data = json!({
            "name": 42,
            "industries": "not a list",
            "followerCount": "lots"
        });
        let summary = extract_company_summary(&data);
        assert!(summary.name.is_none());
        assert!(summary.industries.is_empty());
        assert!(summary.follower_count.is_none());
    }
}
