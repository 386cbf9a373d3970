//! `Tempmail` Core Library
//!
//! View state and rules behind the interactive parts of the Tempmail inbox
//! page:
//! - Copy buttons with a short-lived success indicator
//! - Auto-dismissal of flash alerts
//! - Confirmation before destructive form submissions
//! - Pending indicators on generate buttons
//! - Expiry countdowns
//! - Toast notifications
//! - Page-level refresh/change/delete actions
//! - Per-message show/hide toggles
//!
//! Nothing in this crate touches the DOM. Every widget is a plain value
//! updated through transition methods that return the DOM changes to apply,
//! which the `tempmail-ui` crate performs.
//!
//! # Error Handling
//!
//! ```rust,ignore
//! use tempmail_core::{Error, Result};
//!
//! fn expiry(raw: &str) -> Result<chrono::DateTime<chrono::Utc>> {
//!     tempmail_core::parse_expiry(raw)
//! }
//! ```

pub mod actions;
pub mod alert;
pub mod config;
pub mod copy;
pub mod countdown;
pub mod error;
pub mod guard;
pub mod markup;
pub mod pending;
pub mod toast;
pub mod toggle;

pub use actions::{ActionPlan, FormSubmission, PageAction};
pub use alert::should_auto_dismiss;
pub use config::{Endpoints, PageConfig, Timings};
pub use copy::{
    ConfirmEffect, CopyButtonState, CopyOutcome, CopyPath, RevertEffect, RevertTicket,
    StyleFamily,
};
pub use countdown::{CountdownView, EXPIRED_TEXT, Urgency, countdown_at, parse_expiry};
pub use error::{Error, Result};
pub use guard::{
    Confirm, FormIntent, ResourceKind, SubmitDecision, classify_form_action, deletion_prompt,
    guard_submission,
};
pub use markup::ClassSwap;
pub use pending::{FailsafeTicket, PendingEffect, RestoreEffect, SubmitGuard};
pub use toast::{Toast, ToastKind, ToastStack};
pub use toggle::{ContentToggle, ToggleEffect};
