//! Template Resolver — markdown templates for a (framework, section) pair.

use std::io::ErrorKind;
use std::path::Path;

use chrono::Local;
use tracing::debug;

use crate::errors::AppError;
use crate::frameworks::FrameworkRegistry;
use crate::store::section_slug;

/// Resolves the markdown template for `section` of `framework_id`.
///
/// Unknown framework fails with NotFound. When no
/// `documents/{framework_id}_{slug}.md` file exists, a generic policy
/// skeleton embedding the section name and today's date is returned instead.
pub async fn resolve_template(
    registry: &FrameworkRegistry,
    templates_dir: &Path,
    framework_id: &str,
    section: &str,
) -> Result<String, AppError> {
    if registry.get(framework_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Framework '{framework_id}' not found"
        )));
    }

    let path = templates_dir
        .join("documents")
        .join(format!("{framework_id}_{}.md", section_slug(section)));

    match tokio::fs::read_to_string(&path).await {
        Ok(template) => Ok(template),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                "No template file at {}, using default template",
                path.display()
            );
            Ok(default_template(section))
        }
        Err(e) => Err(AppError::Storage(e)),
    }
}

/// Generic policy skeleton used when a section ships without its own template.
pub fn default_template(section: &str) -> String {
    let today = Local::now().format("%B %d, %Y");
    let section_lower = section.to_lowercase();

    format!(
        "# {section} for {{{{ org_name }}}}

## Introduction

This document outlines the {section_lower} for {{{{ org_name }}}}, a {{{{ org_description }}}} with {{{{ org_size }}}}.

## Scope

This policy applies to all data processing activities conducted by {{{{ org_name }}}}, including but not limited to {{{{ data_types }}}}.

## Effective Date

This policy is effective from {today}.

## Responsibility

The management of {{{{ org_name }}}} is responsible for ensuring that this policy is implemented and maintained.

## Policy Details

(Detailed policy content would be generated here based on specific requirements)

## Review and Update

This policy will be reviewed annually or when significant changes occur.

## Approval

Approved by: ____________________________

Date: ____________________________

Position: ____________________________
"
    )
}
