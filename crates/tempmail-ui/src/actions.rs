//! Page-level actions exported for inline `onclick` handlers.

use tempmail_core::markup::{classes, selectors};
use tempmail_core::{ActionPlan, Error, FormSubmission, PageAction, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlFormElement};

use crate::controller;
use crate::dom::{self, BrowserConfirm, JsResultExt, log_failure};

/// `refreshEmails()`: spin the refresh icon and reload the page.
#[wasm_bindgen(js_name = refreshEmails)]
pub fn refresh_emails() {
    run(&PageAction::Refresh);
}

/// `changeEmail()`: replace the current address after confirmation.
#[wasm_bindgen(js_name = changeEmail)]
pub fn change_email() {
    run(&PageAction::ChangeEmail);
}

/// `deleteEmail(id)`: delete an address after confirmation.
///
/// Templates pass the id as a number or a string.
#[wasm_bindgen(js_name = deleteEmail)]
pub fn delete_email(email_id: JsValue) {
    let Some(id) = address_id(&email_id) else {
        log_failure::<()>(
            "delete email",
            Err(Error::Dom(format!("invalid address id: {email_id:?}"))),
        );
        return;
    };
    run(&PageAction::DeleteEmail { id });
}

fn address_id(value: &JsValue) -> Option<String> {
    if let Some(id) = value.as_string() {
        return Some(id);
    }
    value.as_f64().and_then(integer_id)
}

/// Numeric ids must be whole numbers.
fn integer_id(n: f64) -> Option<String> {
    (n.is_finite() && n.fract() == 0.0).then(|| format!("{n:.0}"))
}

fn run(action: &PageAction) {
    log_failure("page action", try_run(action));
}

fn try_run(action: &PageAction) -> Result<()> {
    let window = dom::window()?;
    let config = controller::config();
    let Some(plan) = action.plan(&config.endpoints, &BrowserConfirm::new(window.clone())) else {
        return Ok(());
    };

    let document = dom::document()?;
    match plan {
        ActionPlan::Reload => {
            if let Ok(Some(icon)) = document.query_selector(selectors::REFRESH_ICON) {
                icon.class_list()
                    .add_1(classes::FA_SPIN)
                    .dom_context("classList.add")?;
            }
            window.location().reload().dom_context("location.reload")
        }
        ActionPlan::Submit(submission) => submit_form(&document, &submission),
    }
}

fn submit_form(document: &Document, submission: &FormSubmission) -> Result<()> {
    let body = document
        .body()
        .ok_or_else(|| Error::ElementNotFound("body".to_string()))?;
    let form: HtmlFormElement = dom::cast(
        document.create_element("form").dom_context("createElement")?,
        "form",
    )?;
    form.set_method(submission.method);
    form.set_action(&submission.action);
    body.append_child(&form).dom_context("appendChild")?;
    form.submit().dom_context("form.submit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_id() {
        assert_eq!(integer_id(17.0), Some("17".to_string()));
        assert_eq!(integer_id(0.0), Some("0".to_string()));
    }

    #[test]
    fn test_integer_id_rejects_fractions_and_nan() {
        assert_eq!(integer_id(1.5), None);
        assert_eq!(integer_id(f64::NAN), None);
        assert_eq!(integer_id(f64::INFINITY), None);
    }
}
