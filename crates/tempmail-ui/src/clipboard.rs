//! Copy-to-clipboard buttons.
//!
//! Uses the asynchronous Clipboard API in secure contexts and falls back to
//! an off-screen textarea with `execCommand("copy")` otherwise, or when the
//! API rejects the write.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tempmail_core::markup::{attributes, selectors};
use tempmail_core::{CopyButtonState, CopyOutcome, CopyPath, Error, Result};
use tracing::{debug, error, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlDocument, HtmlTextAreaElement, Window};

use crate::dom::{self, JsResultExt, apply_swap, log_failure, on};

/// Wire every copy button in `document`.
pub fn install(document: &Document, revert_ms: u32) -> Result<usize> {
    let buttons = dom::query_all(document, selectors::COPY_BUTTON)?;
    for button in &buttons {
        let state = Rc::new(RefCell::new(CopyButtonState::new()));
        let target = button.clone();
        on(button, "click", move |_| {
            let text = target.get_attribute(attributes::TEXT).unwrap_or_default();
            log_failure(
                "copy button",
                copy_and_confirm(target.clone(), Rc::clone(&state), text, revert_ms),
            );
        })?;
    }
    Ok(buttons.len())
}

fn copy_and_confirm(
    button: Element,
    state: Rc<RefCell<CopyButtonState>>,
    text: String,
    revert_ms: u32,
) -> Result<()> {
    let window = dom::window()?;
    match choose_path(&window) {
        CopyPath::AsyncClipboard => spawn_local(async move {
            let outcome = match write_with_clipboard_api(&window, &text).await {
                Ok(()) => CopyOutcome::Clipboard,
                Err(err) => {
                    warn!(error = %err, "Clipboard API failed, using fallback copy");
                    CopyOutcome::Legacy {
                        copied: legacy_copy(&text),
                        clipboard_error: Some(err.to_string()),
                    }
                }
            };
            show_success(&button, &state, &outcome, revert_ms);
        }),
        CopyPath::LegacyCommand => {
            let outcome = CopyOutcome::Legacy {
                copied: legacy_copy(&text),
                clipboard_error: None,
            };
            show_success(&button, &state, &outcome, revert_ms);
        }
    }
    Ok(())
}

fn choose_path(window: &Window) -> CopyPath {
    let navigator = window.navigator();
    let has_api = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .is_ok_and(|api| !api.is_undefined() && !api.is_null());
    CopyPath::choose(has_api, window.is_secure_context())
}

async fn write_with_clipboard_api(window: &Window, text: &str) -> Result<()> {
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .dom_context("clipboard.writeText")?;
    Ok(())
}

/// Copy through a temporary textarea; failures are logged, never surfaced.
fn legacy_copy(text: &str) -> bool {
    match try_legacy_copy(text) {
        Ok(copied) => copied,
        Err(err) => {
            error!(error = %err, "Fallback copy failed");
            false
        }
    }
}

fn try_legacy_copy(text: &str) -> Result<bool> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| Error::ElementNotFound("body".to_string()))?;
    let html_document = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| Error::Dom("document is not an HTML document".to_string()))?;

    let textarea: HtmlTextAreaElement = dom::cast(
        document
            .create_element("textarea")
            .dom_context("createElement")?,
        "textarea",
    )?;
    textarea.set_value(text);
    let style = textarea.style();
    style
        .set_property("position", "fixed")
        .dom_context("style.position")?;
    style
        .set_property("left", "-999999px")
        .dom_context("style.left")?;
    style
        .set_property("top", "-999999px")
        .dom_context("style.top")?;

    body.append_child(&textarea).dom_context("appendChild")?;
    let copied = textarea
        .focus()
        .map(|()| textarea.select())
        .and_then(|()| html_document.exec_command("copy"))
        .dom_context("execCommand(copy)");
    textarea.remove();
    copied
}

fn show_success(
    button: &Element,
    state: &Rc<RefCell<CopyButtonState>>,
    outcome: &CopyOutcome,
    revert_ms: u32,
) {
    debug!(?outcome, confirmed = outcome.is_confirmed(), "Copy finished");
    if !outcome.shows_success() {
        return;
    }

    let effect = state
        .borrow_mut()
        .confirm(&button.inner_html(), &button.class_name());
    if let Some((html, swap)) = effect.apply {
        button.set_inner_html(html);
        log_failure("copy success styling", apply_swap(button, swap));
    }

    let ticket = effect.ticket;
    let button = button.clone();
    let state = Rc::clone(state);
    Timeout::new(revert_ms, move || {
        let revert = state.borrow_mut().revert(ticket);
        if let Some(revert) = revert {
            button.set_inner_html(&revert.inner_html);
            log_failure("copy revert styling", apply_swap(&button, revert.swap));
        }
    })
    .forget();
}
