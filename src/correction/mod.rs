//! Human-supervised correction of extracted rounds.

pub mod edit;
pub mod section;
pub mod validation;

pub use edit::{EditOutcome, HoleEdit, apply_edit};
pub use section::section_name;
pub use validation::{ValidationIssue, is_valid, validation_issues};
