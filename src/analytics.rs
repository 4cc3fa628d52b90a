use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::config;

#[derive(Serialize)]
struct AnalyticsEvent<'a> {
    action: &'a str,
    category: &'a str,
    label: &'a str,
}

/// Record a user interaction. Always logged to the console; forwarded to the
/// page's `gtag` global when one is loaded and analytics is enabled.
pub fn track_event(action: &str, category: &str, label: &str) {
    let event = AnalyticsEvent {
        action,
        category,
        label,
    };
    if let Ok(line) = serde_json::to_string(&event) {
        gloo_console::log!("analytics:", line);
    }

    if config::analytics_enabled() {
        forward_to_gtag(action, category, label);
    }
}

fn forward_to_gtag(action: &str, category: &str, label: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    // The gtag snippet is injected by the host page; it may be absent
    // entirely (blocked, or consent declined).
    let gtag = match js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) {
        Ok(value) if value.is_function() => value.unchecked_into::<js_sys::Function>(),
        _ => return,
    };

    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &params,
        &JsValue::from_str("event_category"),
        &JsValue::from_str(category),
    );
    let _ = js_sys::Reflect::set(
        &params,
        &JsValue::from_str("event_label"),
        &JsValue::from_str(label),
    );

    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(action),
        &params,
    ) {
        gloo_console::error!("gtag call failed:", e);
    }
}
