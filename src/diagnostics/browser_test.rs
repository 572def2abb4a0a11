use std::sync::{Arc, Mutex};

use relay::{Arg, ErrorInfo, RelayConfig};
use serde_json::json;
use wasm_bindgen_test::*;

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

fn eval(source: &str) -> JsValue {
    js_sys::eval(source).unwrap()
}

// =============================================================
// classify
// =============================================================

#[wasm_bindgen_test]
fn values_without_json_form_use_their_string_form() {
    assert_eq!(classify(&eval("1n")), Arg::Opaque("1".to_owned()));
    assert_eq!(classify(&eval("Symbol('cart')")), Arg::Opaque("Symbol(cart)".to_owned()));
    assert_eq!(classify(&eval("(function restock() {})")), Arg::Opaque("function restock() {}".to_owned()));
}

#[wasm_bindgen_test]
fn object_without_prototype_falls_back_to_object_tag() {
    let cyclic = eval("(() => { const o = Object.create(null); o.self = o; return o; })()");
    assert_eq!(classify(&cyclic), Arg::Opaque("[object Object]".to_owned()));
}

#[wasm_bindgen_test]
fn plain_values_keep_their_shape() {
    assert_eq!(classify(&JsValue::UNDEFINED), Arg::Null);
    assert_eq!(classify(&JsValue::from_str("low stock")), Arg::text("low stock"));
    assert_eq!(classify(&eval("({ sku: 'A1', qty: 2 })")), Arg::from_json(serde_json::json!({ "sku": "A1", "qty": 2 })));
}

// =============================================================
// to_js
// =============================================================

#[wasm_bindgen_test]
fn error_args_keep_name_message_and_stack() {
    let arg = Arg::Error(ErrorInfo::new("RangeError", "too many").with_stack("at checkout (app.js:1:2)"));
    let value = to_js(&arg);

    let err = value.dyn_ref::<js_sys::Error>().unwrap();
    assert_eq!(String::from(err.name()), "RangeError");
    assert_eq!(String::from(err.message()), "too many");
    assert_eq!(classify(&value), arg);
}

// =============================================================
// unrelayed
// =============================================================

#[wasm_bindgen_test]
fn unrelayed_restores_the_outer_state() {
    unrelayed(&|| {
        unrelayed(&|| {});
        assert!(UNRELAYED.with(Cell::get));
    });
    assert!(!UNRELAYED.with(Cell::get));
}

// =============================================================
// wrap_console
// =============================================================

#[wasm_bindgen_test]
fn wrapped_console_relays_raw_calls_but_not_its_own_echoes() {
    let sent: Arc<Mutex<Vec<RelayMessage>>> = Arc::default();
    let recorded = sent.clone();
    let transport = move |message: &RelayMessage, _: &TargetOrigin| -> Result<Delivered, TransportError> {
        recorded.lock().unwrap().push(message.clone());
        Ok(Delivered::Sent)
    };
    let relay: &'static Relay = Box::leak(Box::new(Relay::new(RelayConfig::default(), transport, BrowserConsole)));
    wrap_console(relay).unwrap();

    web_sys::console::warn_2(&JsValue::from_str("low stock"), &JsValue::from_str("Croissants"));
    echo_record(&log::Record::builder().args(format_args!("echo only")).level(log::Level::Warn).build());

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].level, Level::Warn);
    assert_eq!(sent[0].args, vec![json!("low stock"), json!("Croissants")]);
}
