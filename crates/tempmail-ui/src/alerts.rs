//! Auto-dismissal of flash alerts present at load.

use gloo_timers::callback::Timeout;
use tempmail_core::markup::selectors;
use tempmail_core::{Result, should_auto_dismiss};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{self, describe_js_error};

#[wasm_bindgen]
extern "C" {
    /// Bootstrap's alert plugin, if the page loaded it.
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BootstrapAlert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert", catch)]
    fn new(element: &Element) -> std::result::Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &BootstrapAlert) -> std::result::Result<(), JsValue>;
}

/// Schedule dismissal of every non-informational alert.
pub fn install(document: &Document, dismiss_ms: u32) -> Result<usize> {
    let alerts: Vec<Element> = dom::query_all(document, selectors::ALERT)?
        .into_iter()
        .filter(|alert| should_auto_dismiss(&alert.class_name()))
        .collect();

    for alert in &alerts {
        let alert = alert.clone();
        Timeout::new(dismiss_ms, move || dismiss(&alert)).forget();
    }
    Ok(alerts.len())
}

/// Close through Bootstrap so its fade runs; remove directly without it.
fn dismiss(alert: &Element) {
    let closed = BootstrapAlert::new(alert).and_then(|bs| bs.close());
    if let Err(err) = closed {
        debug!(error = %describe_js_error(&err), "Bootstrap alert unavailable, removing element");
        alert.remove();
    }
}
