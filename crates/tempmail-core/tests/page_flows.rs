//! End-to-end flows over the page view state, the way the UI drives them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;

use chrono::TimeDelta;
use tempmail_core::{
    ActionPlan, Confirm, ContentToggle, CopyButtonState, FormIntent, PageAction, PageConfig,
    ResourceKind, SubmitDecision, SubmitGuard, ToastKind, ToastStack, Urgency,
    classify_form_action, countdown_at, guard_submission, parse_expiry, should_auto_dismiss,
};

/// Scripted prompt that records every question it was asked.
struct ScriptedPrompt {
    answers: RefCell<Vec<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().rev().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Confirm for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop().expect("unexpected prompt")
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn test_deletion_form_declined_then_accepted() {
    init_tracing();
    let prompt = ScriptedPrompt::new(&[false, true]);
    let action = "/delete-email/5";

    assert_eq!(
        classify_form_action(action),
        Some(FormIntent::Delete(ResourceKind::EmailAddress))
    );
    assert_eq!(guard_submission(action, &prompt), SubmitDecision::Cancel);
    assert_eq!(guard_submission(action, &prompt), SubmitDecision::Proceed);
    assert_eq!(prompt.asked().len(), 2);
    assert!(prompt.asked()[0].contains("email address"));
}

#[test]
fn test_copy_button_cycle_with_double_click() {
    init_tracing();
    let mut button = CopyButtonState::new();
    let original = "<i class=\"fas fa-copy\"></i>";

    let first = button.confirm(original, "copy-btn bg-blue-600 hover:bg-blue-700");
    let second = button.confirm("<i class=\"fas fa-check\"></i>", "copy-btn bg-green-600");

    // The first timer fires while the second click is still showing.
    assert!(button.revert(first.ticket).is_none());
    let restored = button.revert(second.ticket).expect("latest revert applies");
    assert_eq!(restored.inner_html, original);
    assert!(restored.swap.add.contains(&"bg-blue-600"));
}

#[test]
fn test_generate_failsafe_restores_button() {
    init_tracing();
    assert_eq!(
        classify_form_action("/generate-email"),
        Some(FormIntent::Generate)
    );

    let mut guard = SubmitGuard::new();
    let pending = guard.begin("New address", "btn btn-primary");
    assert!(guard.is_pending());
    let restored = guard.release(pending.ticket).expect("failsafe applies");
    assert_eq!(restored.inner_html, "New address");
    assert!(!guard.is_pending());
}

#[test]
fn test_countdown_over_successive_ticks() {
    let expires = parse_expiry("2026-05-01T10:00:00").unwrap();
    let start = expires - TimeDelta::minutes(61);

    let ticks: Vec<_> = (0..3)
        .map(|i| countdown_at(expires, start + TimeDelta::minutes(i)))
        .collect();

    assert_eq!(ticks[0].text, "1h 1m remaining");
    assert_eq!(ticks[1].text, "1h 0m remaining");
    assert_eq!(ticks[2].text, "59m remaining");
    assert_eq!(ticks[2].urgency, Urgency::Warning);

    let late = countdown_at(expires, expires + TimeDelta::seconds(1));
    assert_eq!(late.text, "Expired");
}

#[test]
fn test_alert_filtering_on_load() {
    let alerts = [
        "alert alert-success",
        "alert alert-info",
        "alert alert-danger alert-dismissible",
    ];
    let dismissed: Vec<_> = alerts
        .iter()
        .filter(|classes| should_auto_dismiss(classes))
        .collect();
    assert_eq!(dismissed.len(), 2);
}

#[test]
fn test_toasts_share_one_container() {
    let mut stack = ToastStack::new();
    let mut created = 0;
    for message in ["Copied", "Copied again"] {
        if stack.ensure_container() {
            created += 1;
        }
        stack.push(message, ToastKind::default());
    }
    assert_eq!(created, 1);
    assert_eq!(stack.toasts().len(), 2);
    assert!(stack.toasts().iter().all(|t| t.kind == ToastKind::Info));
}

#[test]
fn test_toggle_reports_first_open_for_mark_read() {
    let config = PageConfig::default();
    let mut toggle = ContentToggle::from_hidden(true);
    let opened: Vec<_> = (0..4).map(|_| toggle.toggle().first_open).collect();
    assert_eq!(opened, [true, false, false, false]);
    assert_eq!(config.endpoints.mark_read_path("9"), "/mark-read/9");
}

#[test]
fn test_page_actions_with_custom_endpoints() {
    init_tracing();
    let config = PageConfig::from_json(
        r#"{"endpoints": {"generate": "/api/generate-email", "delete_email": "/api/delete-email"}}"#,
    )
    .unwrap();
    let prompt = ScriptedPrompt::new(&[true, true]);

    let change = PageAction::ChangeEmail.plan(&config.endpoints, &prompt);
    let delete = PageAction::DeleteEmail {
        id: "3".to_string(),
    }
    .plan(&config.endpoints, &prompt);

    match (change, delete) {
        (Some(ActionPlan::Submit(change)), Some(ActionPlan::Submit(delete))) => {
            assert_eq!(change.action, "/api/generate-email");
            assert_eq!(delete.action, "/api/delete-email/3");
        }
        other => panic!("unexpected plans: {other:?}"),
    }
}
