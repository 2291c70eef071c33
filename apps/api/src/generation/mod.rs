//! Document generation — template resolution, placeholder substitution,
//! markdown-to-HTML conversion, and PDF assembly.

pub mod assembler;
pub mod handlers;
pub mod html;
pub mod substitute;
pub mod templates;

pub use substitute::{FieldValue, Submission};
