use serde::{Deserialize, Serialize};

/// How a question is answered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Short free text.
    Text,
    /// Long free text.
    Textarea,
    /// Single choice from `options`.
    Select,
    /// Multiple choices from `options`.
    Checkbox,
}

/// A single questionnaire field, as stored in the per-section JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}
