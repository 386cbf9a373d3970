//! Alert auto-dismissal rules.

use crate::markup::{classes, has_class};

/// Whether an alert present at load is dismissed automatically.
///
/// Informational alerts stay until the user closes them.
pub fn should_auto_dismiss(class_list: &str) -> bool {
    !has_class(class_list, classes::ALERT_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_danger_alerts_dismiss() {
        assert!(should_auto_dismiss("alert alert-success alert-dismissible"));
        assert!(should_auto_dismiss("alert alert-danger"));
        assert!(should_auto_dismiss("alert"));
    }

    #[test]
    fn test_info_alert_persists() {
        assert!(!should_auto_dismiss("alert alert-info fade show"));
    }
}
