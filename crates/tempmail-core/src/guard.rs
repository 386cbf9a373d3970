//! Confirmation gate for destructive form submissions.

use tracing::{debug, info};

/// Synchronous yes/no prompt shown to the user.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Ask the user; returns true if they accept.
    fn confirm(&self, message: &str) -> bool;
}

/// Kind of resource a deletion endpoint addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A temporary email address.
    EmailAddress,
    /// A temporary phone number.
    PhoneNumber,
}

impl ResourceKind {
    /// Human-readable name used in prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmailAddress => "email address",
            Self::PhoneNumber => "phone number",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Forms the page intercepts, classified by their action URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    /// Deletes a resource; needs confirmation.
    Delete(ResourceKind),
    /// Generates a resource; shows a pending indicator.
    Generate,
}

/// Classify a form by substring matches on its action.
///
/// Deletion wins when an action matches both markers.
pub fn classify_form_action(action: &str) -> Option<FormIntent> {
    if action.contains("delete") {
        let kind = if action.contains("delete-email") {
            ResourceKind::EmailAddress
        } else {
            ResourceKind::PhoneNumber
        };
        Some(FormIntent::Delete(kind))
    } else if action.contains("generate") {
        Some(FormIntent::Generate)
    } else {
        None
    }
}

/// Prompt shown before deleting `kind`.
pub fn deletion_prompt(kind: ResourceKind) -> String {
    format!("Are you sure you want to delete this {kind}? This action cannot be undone.")
}

/// What happens to an intercepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit the form unmodified.
    Proceed,
    /// Cancel the submission; nothing is sent.
    Cancel,
}

/// Decide whether a deletion form may be submitted.
///
/// Forms that are not deletions always proceed without prompting.
pub fn guard_submission(action: &str, prompt: &dyn Confirm) -> SubmitDecision {
    let Some(FormIntent::Delete(kind)) = classify_form_action(action) else {
        return SubmitDecision::Proceed;
    };

    if prompt.confirm(&deletion_prompt(kind)) {
        info!(%action, %kind, "Deletion confirmed");
        SubmitDecision::Proceed
    } else {
        debug!(%action, %kind, "Deletion declined");
        SubmitDecision::Cancel
    }
}
