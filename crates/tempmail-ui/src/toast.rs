//! Toast notifications for displaying feedback messages.
//!
//! The container is created (or adopted, if the template already has one)
//! the first time a toast is shown, and a Leptos view rendering the shared
//! [`ToastStack`] is mounted into it. Toasts dismiss themselves after the
//! configured duration or when their close button is clicked.

use std::cell::RefCell;

use leptos::prelude::*;
use tempmail_core::markup::toast::{CONTAINER_CLASS, CONTAINER_ID};
use tempmail_core::{Error, Result, Toast, ToastKind, ToastStack};
use tracing::debug;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::controller;
use crate::dom::{self, JsResultExt, log_failure};

thread_local! {
    static STACK: RefCell<Option<RwSignal<ToastStack>>> = const { RefCell::new(None) };
}

/// Show a toast from JavaScript: `showToast(message, kind?)`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast_js(message: String, kind: Option<String>) {
    let kind = kind.as_deref().map_or_else(ToastKind::default, ToastKind::parse);
    show_toast(message, kind);
}

/// Show a toast; failures are logged.
pub fn show_toast(message: impl Into<String>, kind: ToastKind) {
    log_failure("show toast", try_show_toast(message.into(), kind));
}

fn try_show_toast(message: String, kind: ToastKind) -> Result<u64> {
    let stack = STACK.with(|cell| {
        *cell
            .borrow_mut()
            .get_or_insert_with(|| RwSignal::new(ToastStack::new()))
    });

    if !stack.with_untracked(ToastStack::has_container) {
        mount_container(stack)?;
        stack.update_untracked(|s| {
            s.ensure_container();
        });
    }

    let id = stack
        .try_update(|s| s.push(message, kind))
        .ok_or_else(|| Error::Dom("toast stack disposed".to_string()))?;

    let duration_ms = controller::config().timings.toast_duration_ms;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        stack.update(|s| {
            s.dismiss(id);
        });
    });
    Ok(id)
}

fn mount_container(stack: RwSignal<ToastStack>) -> Result<()> {
    let document = dom::document()?;
    let container = if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        existing
    } else {
        let body = document
            .body()
            .ok_or_else(|| Error::ElementNotFound("body".to_string()))?;
        let created = document
            .create_element("div")
            .dom_context("createElement")?;
        created.set_id(CONTAINER_ID);
        created.set_class_name(CONTAINER_CLASS);
        body.append_child(&created).dom_context("appendChild")?;
        created
    };
    let container: HtmlElement = dom::cast(container, "toast container")?;

    leptos::mount::mount_to(container, move || view! { <ToastList stack=stack /> }).forget();
    debug!("Toast container mounted");
    Ok(())
}

/// Renders every toast in the stack.
#[component]
fn ToastList(
    /// Shared toast stack.
    stack: RwSignal<ToastStack>,
) -> impl IntoView {
    view! {
        <For
            each=move || stack.with(|s| s.toasts().to_vec())
            key=|toast| toast.id
            children=move |toast| {
                let id = toast.id;
                view! {
                    <ToastItem
                        toast=toast
                        on_dismiss=Callback::new(move |()| {
                            stack.update(|s| {
                                s.dismiss(id);
                            });
                        })
                    />
                }
            }
        />
    }
}

/// A single toast notification.
#[component]
fn ToastItem(
    /// The toast to display.
    toast: Toast,
    /// Callback when the close button is clicked.
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=toast.kind.css_class()
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
            data-toast-kind=toast.kind.to_string()
        >
            <div class="d-flex">
                <div class="toast-body">{toast.message}</div>
                <button
                    type="button"
                    class="btn-close btn-close-white me-2 m-auto"
                    aria-label="Close"
                    on:click=move |_| on_dismiss.run(())
                ></button>
            </div>
        </div>
    }
}
