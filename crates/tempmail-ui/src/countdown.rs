//! Periodic refresh of expiry countdowns.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use tempmail_core::markup::{attributes, selectors};
use tempmail_core::{CountdownView, Error, Result, countdown_at, parse_expiry};
use tracing::{trace, warn};
use web_sys::{Document, Element};

use crate::dom::{self, JsResultExt, log_failure};

/// Render every countdown now and again every `interval_ms`.
pub fn install(document: &Document, interval_ms: u32) -> Result<usize> {
    let count = refresh(document)?;
    let document = document.clone();
    Interval::new(interval_ms, move || {
        log_failure("countdown refresh", refresh(&document));
    })
    .forget();
    Ok(count)
}

/// Recompute every `[data-expires]` element against the current time.
///
/// Elements are looked up on each tick, so countdowns added after load are
/// picked up too.
pub fn refresh(document: &Document) -> Result<usize> {
    let now = now_utc()?;
    let elements = dom::query_all(document, selectors::EXPIRING)?;
    for element in &elements {
        let Some(raw) = element.get_attribute(attributes::EXPIRES) else {
            continue;
        };
        match parse_expiry(&raw) {
            Ok(expires_at) => {
                let view = countdown_at(expires_at, now);
                log_failure("countdown render", render(element, &view));
            }
            Err(err) => warn!(error = %err, "Skipping countdown"),
        }
    }
    trace!(count = elements.len(), "Countdowns refreshed");
    Ok(elements.len())
}

fn now_utc() -> Result<DateTime<Utc>> {
    let millis = js_sys::Date::now();
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| Error::Dom(format!("clock value out of range: {millis}")))
}

/// Urgency classes are added, never removed.
fn render(element: &Element, view: &CountdownView) -> Result<()> {
    element.set_text_content(Some(&view.text));
    if let Some(class) = view.urgency.class() {
        element
            .class_list()
            .add_1(class)
            .dom_context("classList.add")?;
    }
    Ok(())
}
