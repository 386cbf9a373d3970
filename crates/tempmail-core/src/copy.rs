//! Copy button view state.
//!
//! A copy button shows a check mark and success styling for a short time
//! after every activation, then reverts. Each activation bumps an epoch, and
//! the revert scheduled for an older epoch does nothing, so rapid clicks keep
//! the success state until the revert of the last click fires.

use tracing::{debug, trace};

use crate::markup::{ClassSwap, classes, has_class, icons};

/// Styling convention of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    /// Tailwind utility classes (`bg-blue-600`).
    Tailwind,
    /// Bootstrap button classes.
    Bootstrap,
}

impl StyleFamily {
    /// Detect the family from a button's class list.
    pub fn detect(class_list: &str) -> Self {
        if has_class(class_list, classes::TW_PRIMARY) {
            Self::Tailwind
        } else {
            Self::Bootstrap
        }
    }

    /// Classes applied when the copy succeeds.
    pub const fn success_swap(self) -> ClassSwap {
        match self {
            Self::Tailwind => ClassSwap {
                add: &[classes::TW_SUCCESS],
                remove: &[classes::TW_PRIMARY, classes::TW_PRIMARY_HOVER],
            },
            Self::Bootstrap => ClassSwap {
                add: &[classes::BS_SUCCESS],
                remove: &[classes::BS_OUTLINE_PRIMARY, classes::BS_OUTLINE_SUCCESS],
            },
        }
    }

    /// Classes applied when the success indicator reverts.
    ///
    /// Bootstrap buttons always come back as `btn-outline-primary`, even if
    /// they started as `btn-outline-success`.
    pub const fn revert_swap(self) -> ClassSwap {
        match self {
            Self::Tailwind => ClassSwap {
                add: &[classes::TW_PRIMARY, classes::TW_PRIMARY_HOVER],
                remove: &[classes::TW_SUCCESS],
            },
            Self::Bootstrap => ClassSwap {
                add: &[classes::BS_OUTLINE_PRIMARY],
                remove: &[classes::BS_SUCCESS],
            },
        }
    }
}

/// How the payload will be written to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// Asynchronous Clipboard API.
    AsyncClipboard,
    /// Off-screen textarea and the legacy copy command.
    LegacyCommand,
}

impl CopyPath {
    /// The Clipboard API is only used in secure contexts where it exists.
    pub const fn choose(clipboard_api: bool, secure_context: bool) -> Self {
        if clipboard_api && secure_context {
            Self::AsyncClipboard
        } else {
            Self::LegacyCommand
        }
    }
}

/// What actually happened when copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The Clipboard API accepted the text.
    Clipboard,
    /// The legacy command ran; `copied` is what it reported.
    Legacy {
        /// Whether the command reported success.
        copied: bool,
        /// Why the Clipboard API was not used, if it was tried.
        clipboard_error: Option<String>,
    },
}

impl CopyOutcome {
    /// Whether the text is known to be on the clipboard.
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Clipboard | Self::Legacy { copied: true, .. })
    }

    /// Whether the button shows its success indicator.
    ///
    /// Always true: the indicator acknowledges the click, not the outcome.
    pub const fn shows_success(&self) -> bool {
        true
    }
}

/// Token handed to a scheduled revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket {
    epoch: u64,
}

/// DOM changes for entering the success state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmEffect {
    /// Ticket for the revert timer.
    pub ticket: RevertTicket,
    /// Inner HTML and classes to apply; `None` if already showing success.
    pub apply: Option<(&'static str, ClassSwap)>,
}

/// DOM changes for leaving the success state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertEffect {
    /// Inner HTML to restore.
    pub inner_html: String,
    /// Classes to swap back.
    pub swap: ClassSwap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Saved {
    inner_html: String,
    family: StyleFamily,
}

/// View state of one copy button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyButtonState {
    epoch: u64,
    saved: Option<Saved>,
}

impl CopyButtonState {
    /// Create an idle button state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the success indicator is currently shown.
    pub const fn is_confirming(&self) -> bool {
        self.saved.is_some()
    }

    /// Enter (or extend) the success state.
    ///
    /// `current_html` and `class_list` are only captured when the button is
    /// idle, so the original content survives repeated clicks.
    pub fn confirm(&mut self, current_html: &str, class_list: &str) -> ConfirmEffect {
        self.epoch += 1;
        let ticket = RevertTicket { epoch: self.epoch };

        if self.saved.is_some() {
            trace!(epoch = self.epoch, "Copy indicator extended");
            return ConfirmEffect {
                ticket,
                apply: None,
            };
        }

        let family = StyleFamily::detect(class_list);
        self.saved = Some(Saved {
            inner_html: current_html.to_string(),
            family,
        });
        debug!(epoch = self.epoch, ?family, "Copy indicator shown");

        ConfirmEffect {
            ticket,
            apply: Some((icons::CHECK, family.success_swap())),
        }
    }

    /// Leave the success state if `ticket` is still current.
    pub fn revert(&mut self, ticket: RevertTicket) -> Option<RevertEffect> {
        if ticket.epoch != self.epoch {
            trace!(
                ticket = ticket.epoch,
                current = self.epoch,
                "Stale copy revert ignored"
            );
            return None;
        }

        let saved = self.saved.take()?;
        debug!(epoch = self.epoch, "Copy indicator reverted");
        Some(RevertEffect {
            inner_html: saved.inner_html,
            swap: saved.family.revert_swap(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAILWIND: &str = "copy-btn bg-blue-600 hover:bg-blue-700 text-white";
    const BOOTSTRAP: &str = "copy-btn btn btn-outline-primary";

    #[test]
    fn test_detect_family() {
        assert_eq!(StyleFamily::detect(TAILWIND), StyleFamily::Tailwind);
        assert_eq!(StyleFamily::detect(BOOTSTRAP), StyleFamily::Bootstrap);
        assert_eq!(StyleFamily::detect(""), StyleFamily::Bootstrap);
    }

    #[test]
    fn test_copy_path_requires_secure_context() {
        assert_eq!(CopyPath::choose(true, true), CopyPath::AsyncClipboard);
        assert_eq!(CopyPath::choose(true, false), CopyPath::LegacyCommand);
        assert_eq!(CopyPath::choose(false, true), CopyPath::LegacyCommand);
    }

    #[test]
    fn test_failed_legacy_copy_still_shows_success() {
        let outcome = CopyOutcome::Legacy {
            copied: false,
            clipboard_error: Some("NotAllowedError".to_string()),
        };
        assert!(!outcome.is_confirmed());
        assert!(outcome.shows_success());
        assert!(CopyOutcome::Clipboard.is_confirmed());
    }

    #[test]
    fn test_confirm_then_revert_restores_original() {
        let mut state = CopyButtonState::new();
        let effect = state.confirm("<i class=\"fas fa-copy\"></i>", TAILWIND);
        let (html, swap) = effect.apply.expect("first confirm applies");
        assert_eq!(html, icons::CHECK);
        assert_eq!(swap, StyleFamily::Tailwind.success_swap());
        assert!(state.is_confirming());

        let revert = state.revert(effect.ticket).expect("current ticket reverts");
        assert_eq!(revert.inner_html, "<i class=\"fas fa-copy\"></i>");
        assert_eq!(revert.swap, StyleFamily::Tailwind.revert_swap());
        assert!(!state.is_confirming());
    }

    #[test]
    fn test_rapid_clicks_supersede_earlier_revert() {
        let mut state = CopyButtonState::new();
        let first = state.confirm("Copy", BOOTSTRAP);
        // Second click sees the check icon and the success classes.
        let second = state.confirm(icons::CHECK, "copy-btn btn btn-success");
        assert!(second.apply.is_none());

        assert!(state.revert(first.ticket).is_none());
        assert!(state.is_confirming());

        let revert = state.revert(second.ticket).expect("latest ticket reverts");
        assert_eq!(revert.inner_html, "Copy");
        assert_eq!(revert.swap, StyleFamily::Bootstrap.revert_swap());
    }

    #[test]
    fn test_revert_twice_is_noop() {
        let mut state = CopyButtonState::new();
        let effect = state.confirm("Copy", BOOTSTRAP);
        assert!(state.revert(effect.ticket).is_some());
        assert!(state.revert(effect.ticket).is_none());
    }

    #[test]
    fn test_tailwind_swaps_are_inverse() {
        let family = StyleFamily::Tailwind;
        assert_eq!(family.success_swap().add, family.revert_swap().remove);
        assert_eq!(family.success_swap().remove, family.revert_swap().add);
    }
}
