//! `Tempmail` UI - WASM page interactions.
//!
//! Progressive enhancement for the server-rendered inbox page. Load the
//! module after the page markup; it wires copy buttons, alert dismissal,
//! form guards, countdowns and message toggles, and exports
//! `showToast`, `refreshEmails`, `changeEmail` and `deleteEmail` for inline
//! handlers.

pub mod actions;
pub mod alerts;
pub mod clipboard;
pub mod controller;
pub mod countdown;
pub mod dom;
pub mod forms;
pub mod logging;
pub mod toast;
pub mod toggle;

pub use controller::{InstallReport, config};
pub use toast::show_toast;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the WASM module.
/// This function is called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    controller::boot();
}
