//! Generation-in-progress indicator for submit buttons.
//!
//! The button is disabled and shows a spinner while the form submits. A
//! failsafe timer restores it; a failsafe issued before a newer submission
//! does nothing.

use tracing::debug;

use crate::copy::StyleFamily;
use crate::markup::{ClassSwap, classes, icons};

/// Classes applied while pending, per style family.
pub const fn pending_classes(family: StyleFamily) -> ClassSwap {
    match family {
        StyleFamily::Tailwind => ClassSwap {
            add: &[classes::TW_DIMMED, classes::TW_NOT_ALLOWED],
            remove: &[classes::TW_PRIMARY_HOVER],
        },
        StyleFamily::Bootstrap => ClassSwap::NONE,
    }
}

/// Classes applied when the failsafe restores the button.
pub const fn restored_classes(family: StyleFamily) -> ClassSwap {
    match family {
        StyleFamily::Tailwind => ClassSwap {
            add: &[classes::TW_PRIMARY_HOVER],
            remove: &[classes::TW_DIMMED, classes::TW_NOT_ALLOWED],
        },
        StyleFamily::Bootstrap => ClassSwap {
            add: &[],
            remove: &[classes::TW_DIMMED, classes::TW_NOT_ALLOWED],
        },
    }
}

/// Token handed to the failsafe timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailsafeTicket {
    epoch: u64,
}

/// DOM changes for entering the pending state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEffect {
    /// Ticket for the failsafe timer.
    pub ticket: FailsafeTicket,
    /// Inner HTML shown while pending.
    pub inner_html: &'static str,
    /// Classes to swap.
    pub swap: ClassSwap,
}

/// DOM changes for restoring the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreEffect {
    /// Original inner HTML.
    pub inner_html: String,
    /// Classes to swap.
    pub swap: ClassSwap,
}

/// View state of one submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    epoch: u64,
    saved: Option<(String, StyleFamily)>,
}

impl SubmitGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the button is currently pending.
    pub const fn is_pending(&self) -> bool {
        self.saved.is_some()
    }

    /// Enter the pending state.
    ///
    /// The original content is captured only from an idle button.
    pub fn begin(&mut self, current_html: &str, class_list: &str) -> PendingEffect {
        self.epoch += 1;
        let family = match &self.saved {
            Some((_, family)) => *family,
            None => {
                let family = StyleFamily::detect(class_list);
                self.saved = Some((current_html.to_string(), family));
                family
            }
        };
        debug!(epoch = self.epoch, ?family, "Submit button pending");

        PendingEffect {
            ticket: FailsafeTicket { epoch: self.epoch },
            inner_html: icons::GENERATING,
            swap: pending_classes(family),
        }
    }

    /// Restore the button if `ticket` is still current.
    pub fn release(&mut self, ticket: FailsafeTicket) -> Option<RestoreEffect> {
        if ticket.epoch != self.epoch {
            return None;
        }
        let (inner_html, family) = self.saved.take()?;
        debug!(epoch = self.epoch, "Submit button restored by failsafe");
        Some(RestoreEffect {
            inner_html,
            swap: restored_classes(family),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_pending_and_restore() {
        let mut guard = SubmitGuard::new();
        let effect = guard.begin("Generate", "bg-blue-600 hover:bg-blue-700");
        assert_eq!(effect.inner_html, icons::GENERATING);
        assert_eq!(effect.swap.remove, &[classes::TW_PRIMARY_HOVER]);
        assert!(guard.is_pending());

        let restore = guard.release(effect.ticket).expect("current ticket");
        assert_eq!(restore.inner_html, "Generate");
        assert_eq!(restore.swap.add, &[classes::TW_PRIMARY_HOVER]);
        assert!(!guard.is_pending());
    }

    #[test]
    fn test_bootstrap_pending_changes_no_classes() {
        let mut guard = SubmitGuard::new();
        let effect = guard.begin("Generate", "btn btn-primary");
        assert!(effect.swap.is_empty());
        let restore = guard.release(effect.ticket).expect("current ticket");
        assert!(restore.swap.add.is_empty());
    }

    #[test]
    fn test_stale_failsafe_ignored() {
        let mut guard = SubmitGuard::new();
        let first = guard.begin("Generate", "bg-blue-600 hover:bg-blue-700");
        let second = guard.begin(icons::GENERATING, "bg-blue-600 opacity-75");
        assert!(guard.release(first.ticket).is_none());
        assert!(guard.is_pending());

        let restore = guard.release(second.ticket).expect("latest ticket");
        assert_eq!(restore.inner_html, "Generate");
        assert_eq!(restore.swap, restored_classes(StyleFamily::Tailwind));
    }
}
