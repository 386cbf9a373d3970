//! Markup contract shared with the server templates.
//!
//! Selectors, data attributes, class names and icon fragments the page
//! interactions rely on. Templates and this module must agree.

/// CSS selectors used to find enhanced elements.
pub mod selectors {
    /// Copy-to-clipboard buttons.
    pub const COPY_BUTTON: &str = ".copy-btn";
    /// Dismissible notice boxes.
    pub const ALERT: &str = ".alert";
    /// Forms whose action deletes a resource.
    pub const DELETE_FORM: &str = "form[action*=\"delete\"]";
    /// Forms whose action generates a resource.
    pub const GENERATE_FORM: &str = "form[action*=\"generate\"]";
    /// Submit control inside a form.
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    /// Elements carrying an expiry instant.
    pub const EXPIRING: &str = "[data-expires]";
    /// Per-message content toggles.
    pub const TOGGLE_EMAIL: &str = ".toggle-email";
    /// Decorative refresh icon.
    pub const REFRESH_ICON: &str = ".refresh-icon";
    /// Icon inside a toggle control.
    pub const ICON: &str = "i";
    /// Message wrapper that may carry the unread marker.
    pub const MESSAGE: &str = "[data-message]";
    /// Optional JSON configuration block.
    pub const CONFIG_BLOCK: &str = "script#tempmail-config[type=\"application/json\"]";
}

/// Data attributes read from elements.
pub mod attributes {
    /// Text payload of a copy button.
    pub const TEXT: &str = "data-text";
    /// Expiry instant (ISO 8601).
    pub const EXPIRES: &str = "data-expires";
    /// Message identifier on a toggle control.
    pub const MESSAGE_ID: &str = "data-message-id";
}

/// Class names toggled by the interactions.
pub mod classes {
    /// Bootstrap informational alert; never auto-dismissed.
    pub const ALERT_INFO: &str = "alert-info";
    /// Hidden content block.
    pub const HIDDEN: &str = "hidden";
    /// Countdown past its deadline.
    pub const TEXT_DANGER: &str = "text-danger";
    /// Countdown inside its last hour.
    pub const TEXT_WARNING: &str = "text-warning";
    /// Font Awesome spin modifier.
    pub const FA_SPIN: &str = "fa-spin";
    /// Eye icon shown while content is hidden.
    pub const FA_EYE: &str = "fa-eye";
    /// Crossed eye icon shown while content is visible.
    pub const FA_EYE_SLASH: &str = "fa-eye-slash";
    /// Marker on messages not yet read.
    pub const UNREAD: &str = "unread";

    /// Tailwind primary button background; its presence selects the Tailwind family.
    pub const TW_PRIMARY: &str = "bg-blue-600";
    /// Tailwind primary hover background.
    pub const TW_PRIMARY_HOVER: &str = "hover:bg-blue-700";
    /// Tailwind success background.
    pub const TW_SUCCESS: &str = "bg-green-600";
    /// Tailwind dimmed state.
    pub const TW_DIMMED: &str = "opacity-75";
    /// Tailwind blocked cursor.
    pub const TW_NOT_ALLOWED: &str = "cursor-not-allowed";

    /// Bootstrap success button.
    pub const BS_SUCCESS: &str = "btn-success";
    /// Bootstrap outlined primary button.
    pub const BS_OUTLINE_PRIMARY: &str = "btn-outline-primary";
    /// Bootstrap outlined success button.
    pub const BS_OUTLINE_SUCCESS: &str = "btn-outline-success";
}

/// Inner HTML fragments swapped into buttons.
pub mod icons {
    /// Check mark shown after a copy.
    pub const CHECK: &str = r#"<i class="fas fa-check"></i>"#;
    /// Spinner shown while generating.
    pub const GENERATING: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i> Generating..."#;
}

/// Toast container contract.
pub mod toast {
    /// Id of the lazily created container.
    pub const CONTAINER_ID: &str = "toast-container";
    /// Classes of the container.
    pub const CONTAINER_CLASS: &str = "toast-container position-fixed bottom-0 end-0 p-3";
}

/// A set of class additions and removals applied to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSwap {
    /// Classes to add.
    pub add: &'static [&'static str],
    /// Classes to remove.
    pub remove: &'static [&'static str],
}

impl ClassSwap {
    /// A swap that changes nothing.
    pub const NONE: Self = Self {
        add: &[],
        remove: &[],
    };

    /// Returns true if the swap changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Returns true if a whitespace-separated class list contains `class`.
pub fn has_class(class_list: &str, class: &str) -> bool {
    class_list.split_whitespace().any(|c| c == class)
}
