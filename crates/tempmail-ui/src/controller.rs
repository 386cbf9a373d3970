//! Page interaction controller.
//!
//! Loads configuration, starts logging, and wires every handler once the
//! document has been parsed.

use std::cell::RefCell;

use tempmail_core::markup::selectors;
use tempmail_core::{PageConfig, Result};
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Window};

use crate::dom::{self, JsResultExt, log_failure, on};
use crate::logging::{LoggingConfig, init_logging};
use crate::{actions, alerts, clipboard, countdown, forms, toast, toggle};

thread_local! {
    static CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
}

/// The active page configuration.
pub fn config() -> PageConfig {
    CONFIG.with(|c| c.borrow().clone())
}

/// How many elements each handler was attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Copy buttons.
    pub copy_buttons: usize,
    /// Alerts scheduled for dismissal.
    pub alerts: usize,
    /// Deletion forms guarded.
    pub delete_forms: usize,
    /// Generation forms with a pending indicator.
    pub generate_forms: usize,
    /// Countdown elements rendered at load.
    pub countdowns: usize,
    /// Message toggles.
    pub toggles: usize,
}

/// Entry point: configure, then install now or on `DOMContentLoaded`.
pub fn boot() {
    let Ok(document) = dom::document() else {
        return;
    };

    let loaded = read_config(&document);
    let config = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
    init_logging(&LoggingConfig::auto().with_directive(config.log_level.clone()));
    if let Err(err) = loaded {
        warn!(error = %err, "Ignoring invalid page configuration");
    }
    CONFIG.with(|c| *c.borrow_mut() = config.clone());

    if let Ok(window) = dom::window() {
        log_failure("page globals", expose_globals(&window));
    }

    if document.ready_state() == "loading" {
        let target = document.clone();
        log_failure(
            "DOMContentLoaded listener",
            on(&document, "DOMContentLoaded", move |_| {
                install(&target, &config);
            }),
        );
    } else {
        install(&document, &config);
    }
}

/// Names installed on `window` for inline `onclick` handlers.
pub const GLOBALS: [&str; 4] = ["showToast", "refreshEmails", "changeEmail", "deleteEmail"];

/// Make the exported page functions callable as globals.
///
/// Module exports are not visible to inline handlers in the server
/// templates, so each one is also set as a `window` property.
pub fn expose_globals(window: &Window) -> Result<()> {
    let show_toast = Closure::<dyn Fn(String, Option<String>)>::new(toast::show_toast_js);
    let refresh = Closure::<dyn Fn()>::new(actions::refresh_emails);
    let change = Closure::<dyn Fn()>::new(actions::change_email);
    let delete = Closure::<dyn Fn(JsValue)>::new(actions::delete_email);

    let functions = [
        show_toast.into_js_value(),
        refresh.into_js_value(),
        change.into_js_value(),
        delete.into_js_value(),
    ];
    for (name, function) in GLOBALS.iter().zip(&functions) {
        js_sys::Reflect::set(window, &JsValue::from_str(name), function)
            .dom_context(name)?;
    }
    debug!(globals = ?GLOBALS, "Page functions exposed on window");
    Ok(())
}

/// Read the optional JSON configuration block.
pub fn read_config(document: &Document) -> Result<Option<PageConfig>> {
    let Ok(Some(block)) = document.query_selector(selectors::CONFIG_BLOCK) else {
        return Ok(None);
    };
    let json = block.text_content().unwrap_or_default();
    PageConfig::from_json(&json).map(Some)
}

/// Attach every handler to `document`.
///
/// Each handler is independent; one failing to install does not stop the
/// others.
pub fn install(document: &Document, config: &PageConfig) -> InstallReport {
    let t = &config.timings;
    let report = InstallReport {
        copy_buttons: log_failure("copy buttons", clipboard::install(document, t.copy_revert_ms))
            .unwrap_or_default(),
        alerts: log_failure("alerts", alerts::install(document, t.alert_dismiss_ms))
            .unwrap_or_default(),
        delete_forms: log_failure("delete forms", forms::install_delete_guards(document))
            .unwrap_or_default(),
        generate_forms: log_failure(
            "generate forms",
            forms::install_generate_indicators(document, t.generate_failsafe_ms),
        )
        .unwrap_or_default(),
        countdowns: log_failure(
            "countdowns",
            countdown::install(document, t.countdown_interval_ms),
        )
        .unwrap_or_default(),
        toggles: log_failure("toggles", toggle::install(document, config)).unwrap_or_default(),
    };
    info!(?report, "Page interactions installed");
    report
}
