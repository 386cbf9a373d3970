//! Toast notification model.
//!
//! The page keeps one stack of toasts rendered into a container that is
//! created on first use. Toasts leave the stack when dismissed or when their
//! display time runs out; there is no cap on how many are visible.

use tracing::debug;

/// Severity of a toast, mapped onto Bootstrap contextual backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Informational message.
    #[default]
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Danger,
    /// Primary accent.
    Primary,
    /// Neutral accent.
    Secondary,
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl ToastKind {
    /// Parse a severity name; unknown names fall back to info.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" | "error" => Self::Danger,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Info,
        }
    }

    /// Classes of a toast element of this kind.
    pub fn css_class(self) -> String {
        format!("toast show align-items-center text-white bg-{self} border-0")
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier unique within the stack.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// Message, rendered as plain text.
    pub message: String,
}

/// Ordered toasts plus the lazily created container flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    container_created: bool,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Create an empty stack with no container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the container as created.
    ///
    /// Returns true only the first time, when the caller must create it.
    pub fn ensure_container(&mut self) -> bool {
        let needs_container = !self.container_created;
        self.container_created = true;
        needs_container
    }

    /// Whether the container exists.
    pub const fn has_container(&self) -> bool {
        self.container_created
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        debug!(id, %kind, visible = self.toasts.len(), "Toast shown");
        id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    /// Visible toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("ERROR"), ToastKind::Danger);
        assert_eq!(ToastKind::parse("danger"), ToastKind::Danger);
        assert_eq!(ToastKind::parse("whatever"), ToastKind::Info);
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn test_css_class_uses_background() {
        assert_eq!(
            ToastKind::Warning.css_class(),
            "toast show align-items-center text-white bg-warning border-0"
        );
    }

    #[test]
    fn test_light_and_dark_backgrounds() {
        assert_eq!(ToastKind::parse("light"), ToastKind::Light);
        assert_eq!(ToastKind::parse(" Dark "), ToastKind::Dark);
        assert!(ToastKind::Light.css_class().contains("bg-light"));
        assert!(ToastKind::Dark.css_class().contains("bg-dark"));
    }

    #[test]
    fn test_container_created_once() {
        let mut stack = ToastStack::new();
        assert!(!stack.has_container());
        assert!(stack.ensure_container());
        assert!(!stack.ensure_container());
        assert!(stack.has_container());
    }

    #[test]
    fn test_two_toasts_are_independent() {
        let mut stack = ToastStack::new();
        let first = stack.push("Copied", ToastKind::Success);
        let second = stack.push("Copied", ToastKind::Success);
        assert_ne!(first, second);
        assert_eq!(stack.toasts().len(), 2);

        assert!(stack.dismiss(first));
        assert!(!stack.dismiss(first));
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].id, second);
    }
}
