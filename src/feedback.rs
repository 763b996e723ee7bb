//! User-facing summary of an attempt.

use std::fmt::Write;

use crate::generator::PasswordOutcome;

pub const SELECTION_HEADER: &str = "This password was created from your selections:";

/// Formats the feedback shown after an attempt.
///
/// Failures become a single `Error: ...` line carrying the error message verbatim.
/// Successes list every included category in category order, followed by the length.
pub fn format_feedback(outcome: &PasswordOutcome) -> String {
    if let Some(err) = outcome.error() {
        return format!("Error: {err}");
    }

    let mut feedback = String::from(SELECTION_HEADER);
    for label in outcome.selected_labels() {
        let _ = write!(feedback, "\n  - include {label}");
    }
    if let Some(length) = outcome.length() {
        let _ = write!(feedback, "\n  - a password length of {length} characters.");
    }
    feedback
}

impl PasswordOutcome {
    pub fn feedback(&self) -> String {
        format_feedback(self)
    }
}
