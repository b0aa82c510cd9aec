// console.rs - Browser console logging
//
// The simulation stays silent; only lifecycle events from the host land here.

use wasm_bindgen::JsValue;

const PREFIX: &str = "[constellation]";

pub fn debug(msg: &str) {
    web_sys::console::debug_1(&JsValue::from_str(&format!("{} {}", PREFIX, msg)));
}

/// Warn with the JS error value attached, so the console can expand it.
pub fn warn_js(msg: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(&format!("{} {}", PREFIX, msg)), err);
}
