//! Show/hide state of a message body.

use crate::markup::{ClassSwap, classes};

const SHOW_CONTENT: ClassSwap = ClassSwap {
    add: &[],
    remove: &[classes::HIDDEN],
};
const HIDE_CONTENT: ClassSwap = ClassSwap {
    add: &[classes::HIDDEN],
    remove: &[],
};
const ICON_SHOWN: ClassSwap = ClassSwap {
    add: &[classes::FA_EYE_SLASH],
    remove: &[classes::FA_EYE],
};
const ICON_HIDDEN: ClassSwap = ClassSwap {
    add: &[classes::FA_EYE],
    remove: &[classes::FA_EYE_SLASH],
};

/// DOM changes for one toggle click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEffect {
    /// Classes for the content block.
    pub content: ClassSwap,
    /// Classes for the icon.
    pub icon: ClassSwap,
    /// True the first time the content becomes visible.
    pub first_open: bool,
}

/// Visibility of one message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentToggle {
    visible: bool,
    opened: bool,
}

impl ContentToggle {
    /// Start from the block's current `hidden` class.
    ///
    /// A block that starts visible counts as already opened.
    pub const fn from_hidden(hidden: bool) -> Self {
        Self {
            visible: !hidden,
            opened: !hidden,
        }
    }

    /// Whether the content is shown.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility.
    pub const fn toggle(&mut self) -> ToggleEffect {
        self.visible = !self.visible;
        if self.visible {
            let first_open = !self.opened;
            self.opened = true;
            ToggleEffect {
                content: SHOW_CONTENT,
                icon: ICON_SHOWN,
                first_open,
            }
        } else {
            ToggleEffect {
                content: HIDE_CONTENT,
                icon: ICON_HIDDEN,
                first_open: false,
            }
        }
    }

    /// Icon classes matching the current state.
    pub const fn icon_swap(&self) -> ClassSwap {
        if self.visible { ICON_SHOWN } else { ICON_HIDDEN }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_shows_hidden_content() {
        let mut toggle = ContentToggle::from_hidden(true);
        let effect = toggle.toggle();
        assert!(toggle.is_visible());
        assert_eq!(effect.content.remove, &[classes::HIDDEN]);
        assert_eq!(effect.icon.add, &[classes::FA_EYE_SLASH]);
        assert!(effect.first_open);
    }

    #[test]
    fn test_even_clicks_restore_state() {
        for hidden in [true, false] {
            let mut toggle = ContentToggle::from_hidden(hidden);
            let original = toggle.is_visible();
            let original_icon = toggle.icon_swap();
            let mut last = original;
            for _ in 0..4 {
                toggle.toggle();
                assert_ne!(toggle.is_visible(), last);
                last = toggle.is_visible();
            }
            assert_eq!(toggle.is_visible(), original);
            assert_eq!(toggle.icon_swap(), original_icon);
        }
    }

    #[test]
    fn test_first_open_reported_once() {
        let mut toggle = ContentToggle::from_hidden(true);
        assert!(toggle.toggle().first_open);
        assert!(!toggle.toggle().first_open);
        assert!(!toggle.toggle().first_open);
    }

    #[test]
    fn test_initially_visible_never_first_open() {
        let mut toggle = ContentToggle::from_hidden(false);
        let hide = toggle.toggle();
        assert_eq!(hide.content.add, &[classes::HIDDEN]);
        assert!(!toggle.toggle().first_open);
    }
}
