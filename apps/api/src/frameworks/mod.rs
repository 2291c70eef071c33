//! Compliance framework registry.
//!
//! The registry is an explicitly constructed, read-only table built once in
//! `main` and shared through `AppState`. Handlers never see a global.

pub mod handlers;

use serde::Serialize;

/// A compliance framework and the document sections it offers.
#[derive(Debug, Clone, Serialize)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub sections: Vec<String>,
}

/// Read-only lookup table of supported frameworks, in display order.
#[derive(Debug, Clone)]
pub struct FrameworkRegistry {
    frameworks: Vec<Framework>,
}

impl FrameworkRegistry {
    /// The built-in framework set served by the product today.
    pub fn builtin() -> Self {
        let frameworks = vec![
            Framework {
                id: "gdpr".to_string(),
                name: "GDPR".to_string(),
                full_name: "General Data Protection Regulation".to_string(),
                description: "EU regulation on data protection and privacy".to_string(),
                sections: vec![
                    "Data Protection Policy".to_string(),
                    "Privacy Notice".to_string(),
                    "Data Breach Response Plan".to_string(),
                    "Data Processing Agreement".to_string(),
                ],
            },
            Framework {
                id: "hipaa".to_string(),
                name: "HIPAA".to_string(),
                full_name: "Health Insurance Portability and Accountability Act".to_string(),
                description: "US legislation for data privacy in healthcare".to_string(),
                sections: vec![
                    "Privacy Policy".to_string(),
                    "Security Policy".to_string(),
                    "Breach Notification Procedure".to_string(),
                    "Business Associate Agreement".to_string(),
                ],
            },
            Framework {
                id: "iso27001".to_string(),
                name: "ISO 27001".to_string(),
                full_name: "ISO/IEC 27001 Information Security Management".to_string(),
                description: "International standard for information security".to_string(),
                sections: vec![
                    "Information Security Policy".to_string(),
                    "Risk Assessment Methodology".to_string(),
                    "Asset Management".to_string(),
                    "Access Control Policy".to_string(),
                ],
            },
            Framework {
                id: "nist".to_string(),
                name: "NIST CSF".to_string(),
                full_name: "NIST Cybersecurity Framework".to_string(),
                description: "Framework to improve cybersecurity risk management".to_string(),
                sections: vec![
                    "Identify".to_string(),
                    "Protect".to_string(),
                    "Detect".to_string(),
                    "Respond".to_string(),
                    "Recover".to_string(),
                ],
            },
        ];

        Self { frameworks }
    }

    pub fn get(&self, id: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.id == id)
    }

    pub fn all(&self) -> &[Framework] {
        &self.frameworks
    }
}
