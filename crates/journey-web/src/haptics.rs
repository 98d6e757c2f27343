//! Optional vibration output. The capability is feature-detected before
//! every call; where it does not exist the request is a silent no-op.

use journey_engine::HapticPulse;
use wasm_bindgen::JsValue;

/// Request a vibration pulse from the host, if it supports one.
pub fn vibrate(pulse: &HapticPulse) {
    let segments = pulse.segments();
    if segments.is_empty() {
        return;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let navigator = window.navigator();
    // The binding throws if the host lacks navigator.vibrate entirely.
    let supported =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        return;
    }
    if segments.len() == 1 {
        let _ = navigator.vibrate_with_duration(segments[0]);
    } else {
        let pattern = js_sys::Array::new();
        for &ms in segments {
            pattern.push(&JsValue::from_f64(ms as f64));
        }
        let _ = navigator.vibrate_with_pattern(&pattern);
    }
}
