//! Browser tests; run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::config::Config;
use shared::ViewConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_override(value: &JsValue) {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"PITCHSIDE_VIEW_CONFIG".into(), value).unwrap();
}

#[wasm_bindgen_test]
fn view_config_defaults_without_override() {
    set_override(&JsValue::UNDEFINED);
    assert_eq!(Config::view(), ViewConfig::default());
}

#[wasm_bindgen_test]
fn view_config_reads_json_string() {
    set_override(&JsValue::from_str(r#"{ "default_page_size": 25 }"#));
    assert_eq!(Config::view().default_page_size, 25);
    set_override(&JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn view_config_rejects_zero_page_size() {
    set_override(&JsValue::from_str(r#"{ "default_page_size": 0 }"#));
    assert_eq!(Config::view(), ViewConfig::default());
    set_override(&JsValue::UNDEFINED);
}
