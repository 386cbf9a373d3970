//! Submit handlers for deletion and generation forms.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tempmail_core::markup::selectors;
use tempmail_core::{Result, SubmitDecision, SubmitGuard, guard_submission};
use tracing::{debug, warn};
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use crate::dom::{self, BrowserConfirm, apply_swap, log_failure, on};

/// Ask before any deletion form submits.
pub fn install_delete_guards(document: &Document) -> Result<usize> {
    let forms = dom::query_all(document, selectors::DELETE_FORM)?;
    for form in forms.iter().cloned() {
        let form: HtmlFormElement = dom::cast(form, "delete form")?;
        let target = form.clone();
        on(&form, "submit", move |event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let prompt = BrowserConfirm::new(window);
            if guard_submission(&target.action(), &prompt) == SubmitDecision::Cancel {
                event.prevent_default();
            }
        })?;
    }
    Ok(forms.len())
}

/// Show a pending spinner on generation forms' submit buttons.
pub fn install_generate_indicators(document: &Document, failsafe_ms: u32) -> Result<usize> {
    let forms = dom::query_all(document, selectors::GENERATE_FORM)?;
    for form in &forms {
        let state = Rc::new(RefCell::new(SubmitGuard::new()));
        let target = form.clone();
        on(form, "submit", move |event| {
            // A deletion guard on the same form may have cancelled it.
            if event.default_prevented() {
                return;
            }
            log_failure(
                "generate indicator",
                begin_pending(&target, &state, failsafe_ms),
            );
        })?;
    }
    Ok(forms.len())
}

fn begin_pending(
    form: &web_sys::Element,
    state: &Rc<RefCell<SubmitGuard>>,
    failsafe_ms: u32,
) -> Result<()> {
    let Some(button) = form
        .query_selector(selectors::SUBMIT_BUTTON)
        .ok()
        .flatten()
    else {
        debug!("Generate form has no submit button");
        return Ok(());
    };
    let button: HtmlButtonElement = dom::cast(button, "submit button")?;

    let effect = state
        .borrow_mut()
        .begin(&button.inner_html(), &button.class_name());
    button.set_inner_html(effect.inner_html);
    button.set_disabled(true);

    // Restore is scheduled before any step that can fail.
    let ticket = effect.ticket;
    let restore_state = Rc::clone(state);
    let target = button.clone();
    Timeout::new(failsafe_ms, move || {
        let restore = restore_state.borrow_mut().release(ticket);
        let Some(restore) = restore else {
            return;
        };
        warn!("Generate request still pending, re-enabling submit button");
        target.set_inner_html(&restore.inner_html);
        target.set_disabled(false);
        log_failure("generate restore styling", apply_swap(&target, restore.swap));
    })
    .forget();

    log_failure("generate pending styling", apply_swap(&button, effect.swap));
    Ok(())
}
