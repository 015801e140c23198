// Browser tests for the JS facade. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use rslider_web::RSlider;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web::Element {
    let document = web::window()
        .and_then(|w| w.document())
        .expect("document");
    let el = document.create_element("div").expect("div");
    document
        .body()
        .expect("body")
        .append_child(&el)
        .expect("append");
    el
}

#[wasm_bindgen_test]
fn second_attach_is_refused() {
    let slider = RSlider::create(JsValue::UNDEFINED).expect("create");
    let host = container();

    assert!(!slider.is_attached());
    slider.attach(host.clone()).expect("first attach");
    assert!(slider.is_attached());
    assert_eq!(host.child_element_count(), 1);

    assert!(slider.attach(host.clone()).is_err());
    assert!(slider.attach(container()).is_err());
    assert_eq!(host.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn attached_slider_still_takes_values() {
    let slider = RSlider::create(JsValue::UNDEFINED).expect("create");
    slider.attach(container()).expect("attach");
    assert_eq!(slider.set_value(0, 12.0), Some(10.0));
    assert_eq!(slider.value(0), Some(10.0));
}
