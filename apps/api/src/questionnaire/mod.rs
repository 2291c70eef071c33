//! Questionnaire descriptors for a (framework, section) pair.
//!
//! Question sets ship as JSON files under `{templates_dir}/questions/`; a
//! section with no file gets the built-in organizational defaults.

pub mod handlers;
pub mod loader;
pub mod models;
