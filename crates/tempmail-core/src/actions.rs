//! Page-level actions invoked from inline handlers.
//!
//! Refresh reloads the page. Change and delete ask first, then submit a POST
//! form; the server's redirect is the only feedback.

use tracing::{debug, info};

use crate::config::Endpoints;
use crate::guard::Confirm;

/// Prompt shown before replacing the current address.
pub const CHANGE_EMAIL_PROMPT: &str = "Generate a new email address? This will delete the current one.";
/// Prompt shown before deleting an address.
pub const DELETE_EMAIL_PROMPT: &str = "Delete this email address? All received emails will be lost.";

/// A form the page builds and submits on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// HTTP method.
    pub method: &'static str,
    /// Target path.
    pub action: String,
}

impl FormSubmission {
    /// A POST to `action`.
    pub fn post(action: impl Into<String>) -> Self {
        Self {
            method: "POST",
            action: action.into(),
        }
    }
}

/// A page-level action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Reload the page to fetch new messages.
    Refresh,
    /// Replace the current address with a fresh one.
    ChangeEmail,
    /// Delete the address with this id.
    DeleteEmail {
        /// Address identifier.
        id: String,
    },
}

/// What the browser should do after an action is approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPlan {
    /// Spin the refresh icon and reload.
    Reload,
    /// Build and submit a form.
    Submit(FormSubmission),
}

impl PageAction {
    /// Prompt shown before the action, if it needs one.
    pub const fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            Self::Refresh => None,
            Self::ChangeEmail => Some(CHANGE_EMAIL_PROMPT),
            Self::DeleteEmail { .. } => Some(DELETE_EMAIL_PROMPT),
        }
    }

    /// Form submitted by the action, if any.
    pub fn submission(&self, endpoints: &Endpoints) -> Option<FormSubmission> {
        match self {
            Self::Refresh => None,
            Self::ChangeEmail => Some(FormSubmission::post(endpoints.generate.clone())),
            Self::DeleteEmail { id } => Some(FormSubmission::post(endpoints.delete_email_path(id))),
        }
    }

    /// Ask for confirmation where needed and return what to do.
    ///
    /// Returns `None` when the user declines.
    pub fn plan(&self, endpoints: &Endpoints, prompt: &dyn Confirm) -> Option<ActionPlan> {
        if let Some(message) = self.confirmation_prompt()
            && !prompt.confirm(message)
        {
            debug!(action = ?self, "Page action declined");
            return None;
        }

        let plan = match self.submission(endpoints) {
            Some(form) => ActionPlan::Submit(form),
            None => ActionPlan::Reload,
        };
        info!(action = ?self, ?plan, "Page action approved");
        Some(plan)
    }
}
