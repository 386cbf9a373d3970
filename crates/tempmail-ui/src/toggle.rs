//! Show/hide toggles for message bodies, with mark-read on first open.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::Deserialize;
use tempmail_core::markup::{attributes, classes, selectors};
use tempmail_core::{ContentToggle, Error, PageConfig, Result, ToastKind};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom::{self, JsResultExt, apply_swap, log_failure, on};
use crate::toast::show_toast;

/// Shown when the server does not confirm a mark-read.
pub const MARK_READ_FAILED: &str = "Could not mark message as read";

#[derive(Debug, Deserialize)]
struct MarkReadResponse {
    status: String,
}

/// Wire every `.toggle-email` control.
pub fn install(document: &Document, config: &PageConfig) -> Result<usize> {
    let buttons = dom::query_all(document, selectors::TOGGLE_EMAIL)?;
    let mut wired = 0;
    for button in &buttons {
        let Some(message_id) = button.get_attribute(attributes::MESSAGE_ID) else {
            warn!(error = %Error::missing_attribute(selectors::TOGGLE_EMAIL, attributes::MESSAGE_ID), "Skipping toggle");
            continue;
        };
        let content_id = format!("email-content-{message_id}");
        let Some(content) = document.get_element_by_id(&content_id) else {
            warn!(error = %Error::ElementNotFound(content_id), "Skipping toggle");
            continue;
        };

        let state = Rc::new(Cell::new(ContentToggle::from_hidden(
            content.class_list().contains(classes::HIDDEN),
        )));
        let icon = button.query_selector(selectors::ICON).ok().flatten();
        if icon.is_none() {
            warn!(%message_id, "Toggle has no icon, only the content will change");
        }
        let mark_read_path = config
            .mark_read_on_open
            .then(|| config.endpoints.mark_read_path(&message_id));
        let target = button.clone();

        on(button, "click", move |_| {
            let mut toggle = state.get();
            let effect = toggle.toggle();
            state.set(toggle);

            log_failure("toggle content", apply_swap(&content, effect.content));
            if let Some(icon) = &icon {
                log_failure("toggle icon", apply_swap(icon, effect.icon));
            }
            if effect.first_open
                && let Some(path) = &mark_read_path
            {
                mark_read(target.clone(), path.clone());
            }
        })?;
        wired += 1;
    }
    Ok(wired)
}

fn mark_read(toggle: Element, path: String) {
    spawn_local(async move {
        match send_mark_read(&path).await {
            Ok(()) => {
                info!(%path, "Message marked read");
                if let Ok(Some(message)) = toggle.closest(selectors::MESSAGE) {
                    log_failure(
                        "clear unread marker",
                        message
                            .class_list()
                            .remove_1(classes::UNREAD)
                            .dom_context("classList.remove"),
                    );
                }
            }
            Err(err) => {
                warn!(%path, error = %err, "Mark read failed");
                show_toast(MARK_READ_FAILED, ToastKind::Warning);
            }
        }
    });
}

async fn send_mark_read(path: &str) -> Result<()> {
    let response = Request::post(path)
        .send()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;
    if !response.ok() {
        return Err(Error::Request(format!(
            "{path} returned HTTP {}",
            response.status()
        )));
    }
    let body: MarkReadResponse = response
        .json()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;
    if body.status != "success" {
        return Err(Error::Request(format!(
            "{path} answered with status {:?}",
            body.status
        )));
    }
    Ok(())
}
