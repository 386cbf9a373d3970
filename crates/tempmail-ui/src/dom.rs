//! Thin helpers over `web-sys`.
//!
//! Browser calls return `Result<_, JsValue>`; these helpers convert them into
//! the core [`Error`] type so handlers can use `?` and log once at the edge.

use tempmail_core::{ClassSwap, Confirm, Error, Result};
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// Conversion from `JsValue` errors into the crate error type.
pub trait JsResultExt<T> {
    /// Attach a short description of the failed operation.
    fn dom_context(self, operation: &str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn dom_context(self, operation: &str) -> Result<T> {
        self.map_err(|e| Error::Dom(format!("{operation}: {}", describe_js_error(&e))))
    }
}

/// Best-effort message for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The global window.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::ElementNotFound("window".to_string()))
}

/// The current document.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::ElementNotFound("document".to_string()))
}

/// All elements matching `selector` under `document`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .dom_context(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Cast an element to a more specific type.
pub fn cast<T: JsCast>(element: Element, what: &str) -> Result<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| Error::Dom(format!("{what} has an unexpected element type")))
}

/// Apply a class swap; removals happen before additions.
pub fn apply_swap(element: &Element, swap: ClassSwap) -> Result<()> {
    let list = element.class_list();
    for class in swap.remove {
        list.remove_1(class).dom_context("classList.remove")?;
    }
    for class in swap.add {
        list.add_1(class).dom_context("classList.add")?;
    }
    Ok(())
}

/// Attach an event listener that lives as long as the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .dom_context(event)?;
    // Listeners are never removed; the page owns them until unload.
    closure.forget();
    Ok(())
}

/// Log a failed handler step and swallow it.
pub fn log_failure<T>(context: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!(%context, error = %err, "Page interaction failed");
            None
        }
    }
}

/// The browser's blocking `confirm()` dialog.
pub struct BrowserConfirm {
    window: Window,
}

impl BrowserConfirm {
    /// Prompt through `window`.
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.window
            .confirm_with_message(message)
            .unwrap_or_else(|e| {
                warn!(error = %describe_js_error(&e), "confirm() unavailable, treating as declined");
                false
            })
    }
}
