//! Browser seams for the relay: `postMessage` to the parent frame, the
//! original `console`, the wrapped `console` methods, and window error
//! listeners.
//!
//! Output written on the relay's own behalf (logger echoes, delivery failure
//! reports, the previous panic hook) runs inside [`unrelayed`], which the
//! console wrappers pass straight through to the original method.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "browser_test.rs"]
mod browser_test;

use std::cell::Cell;

use js_sys::{Array, Function, JSON, Object, Reflect};
use relay::{Arg, Console, Delivered, ErrorInfo, ErrorReport, Level, Relay, RelayMessage, TargetOrigin, Transport, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::panic::PANIC_TRAP;

/// What `Object.prototype.toString` gives for a plain object.
const OPAQUE_OBJECT: &str = "[object Object]";

/// Turns a Rust closure taking an array into a variadic JS function.
const VARIADIC_SHIM: &str = "return function () { hook(Array.prototype.slice.call(arguments)); };";

thread_local! {
    static UNRELAYED: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` with the console wrappers passing output through unrelayed.
pub fn unrelayed(f: &dyn Fn()) {
    let outer = UNRELAYED.with(|flag| flag.replace(true));
    f();
    UNRELAYED.with(|flag| flag.set(outer));
}

/// Echo a `log` record to the console without relaying it again.
pub fn echo_record(record: &log::Record<'_>) {
    unrelayed(&|| console_log::log(record));
}

/// Posts relay messages to `window.parent`.
pub struct ParentFrame;

impl Transport for ParentFrame {
    fn deliver(&self, message: &RelayMessage, origin: &TargetOrigin) -> Result<Delivered, TransportError> {
        let Some(window) = web_sys::window() else {
            return Ok(Delivered::NoParent);
        };
        let parent = match window.parent() {
            Ok(Some(parent)) => parent,
            Ok(None) => return Ok(Delivered::NoParent),
            Err(err) => return Err(post_error(&err)),
        };
        // A top-level window is its own parent.
        if Object::is(&parent, &window) {
            return Ok(Delivered::NoParent);
        }

        let encoded = serde_json::to_string(message)?;
        let value = JSON::parse(&encoded).map_err(|err| post_error(&err))?;
        parent
            .post_message(&value, origin.as_str())
            .map_err(|err| post_error(&err))?;
        Ok(Delivered::Sent)
    }
}

/// The browser console, bypassing the `log` facade.
pub struct BrowserConsole;

impl Console for BrowserConsole {
    fn write(&self, level: Level, args: &[Arg]) {
        let values = args.iter().map(to_js).collect::<Array>();
        unrelayed(&|| match level {
            Level::Log => web_sys::console::log(&values),
            Level::Warn => web_sys::console::warn(&values),
            Level::Error => web_sys::console::error(&values),
        });
    }
}

/// Replace `console.log`, `console.warn` and `console.error` with wrappers
/// that call the original method with the raw arguments, then relay them.
/// Wrappers live for the page lifetime.
///
/// # Errors
///
/// Returns the thrown value when `console` or one of its methods is missing
/// or cannot be replaced. Methods wrapped before the failure stay wrapped.
pub fn wrap_console(relay: &'static Relay) -> Result<(), JsValue> {
    let global = js_sys::global();
    let console = Reflect::get(&global, &JsValue::from_str("console"))?;
    // Built through Reflect so a CSP refusal surfaces as an error.
    let function = Reflect::get(&global, &JsValue::from_str("Function"))?.dyn_into::<Function>()?;
    let shim = Reflect::construct(&function, &Array::of2(&JsValue::from_str("hook"), &JsValue::from_str(VARIADIC_SHIM)))?
        .dyn_into::<Function>()?;

    for level in [Level::Log, Level::Warn, Level::Error] {
        let name = JsValue::from_str(level.as_str());
        let original = Reflect::get(&console, &name)?.dyn_into::<Function>()?;
        let target = console.clone();
        let hook = Closure::<dyn Fn(Array)>::new(move |args: Array| {
            let echo = || {
                // A throwing console method has nowhere left to report to.
                let _ = original.apply(&target, &args);
            };
            if UNRELAYED.with(Cell::get) {
                echo();
                return;
            }
            let classified = args.iter().map(|value| classify(&value)).collect();
            relay.console(level, classified, echo);
        });

        let wrapper = shim.call1(&JsValue::UNDEFINED, hook.as_ref())?;
        Reflect::set(&console, &name, &wrapper)?;
        hook.forget();
    }
    Ok(())
}

/// Classify a raw JS value for transmission.
pub fn classify(value: &JsValue) -> Arg {
    if value.is_null() || value.is_undefined() {
        return Arg::Null;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return Arg::Error(error_info(err));
    }
    if let Some(b) = value.as_bool() {
        return Arg::Bool(b);
    }
    if let Some(n) = value.as_f64() {
        return Arg::float(n);
    }
    if let Some(s) = value.as_string() {
        return Arg::Text(s);
    }
    // Functions, symbols, BigInts, and cyclic objects have no JSON form.
    JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .and_then(|json| serde_json::from_str(&json).ok())
        .map_or_else(
            || Arg::Opaque(js_string(value).unwrap_or_else(|| OPAQUE_OBJECT.to_owned())),
            Arg::from_json,
        )
}

/// `String(value)`. `None` when it throws, as for objects without a prototype.
fn js_string(value: &JsValue) -> Option<String> {
    let string = Reflect::get(&js_sys::global(), &JsValue::from_str("String")).ok()?;
    string
        .dyn_ref::<Function>()?
        .call1(&JsValue::UNDEFINED, value)
        .ok()?
        .as_string()
}

pub fn error_info(err: &js_sys::Error) -> ErrorInfo {
    let info = ErrorInfo::new(String::from(err.name()), String::from(err.message()));
    match Reflect::get(err, &JsValue::from_str("stack")).map(|stack| stack.as_string()) {
        Ok(Some(stack)) => info.with_stack(stack),
        _ => info,
    }
}

/// Content of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    meta.get_attribute("content")
}

/// Observe window `error` and `unhandledrejection` alongside any existing
/// handlers. Listeners live for the page lifetime.
pub fn listen(relay: &'static Relay) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
        // Resource load failures arrive as plain `Event`s.
        let Ok(event) = event.dyn_into::<web_sys::ErrorEvent>() else {
            return;
        };
        // Already relayed by the panic hook.
        if PANIC_TRAP.is_panic_trap(&event.message()) {
            return;
        }
        relay.global_error(ErrorReport {
            message: event.message(),
            url: event.filename(),
            line: event.lineno(),
            column: event.colno(),
            error: event.error().dyn_ref::<js_sys::Error>().map(error_info),
        });
    });
    let on_rejection = Closure::<dyn Fn(web_sys::PromiseRejectionEvent)>::new(
        move |event: web_sys::PromiseRejectionEvent| {
            relay.unhandled_rejection(classify(&event.reason()));
        },
    );

    let listeners: [(&str, &JsValue); 2] = [("error", on_error.as_ref()), ("unhandledrejection", on_rejection.as_ref())];
    for (kind, callback) in listeners {
        if let Err(err) = window.add_event_listener_with_callback(kind, callback.unchecked_ref()) {
            web_sys::console::warn_2(&JsValue::from_str(&format!("failed to observe {kind}:")), &err);
        }
    }
    on_error.forget();
    on_rejection.forget();
}

pub fn to_js(arg: &Arg) -> JsValue {
    match arg {
        Arg::Null => JsValue::NULL,
        Arg::Bool(b) => JsValue::from_bool(*b),
        Arg::Number(n) => n.as_f64().map_or(JsValue::NULL, JsValue::from_f64),
        Arg::Text(s) | Arg::Opaque(s) => JsValue::from_str(s),
        Arg::Structured(value) => JSON::parse(&value.to_string()).unwrap_or_else(|_| JsValue::from_str(&value.to_string())),
        Arg::Error(info) => {
            let err = js_sys::Error::new(&info.message);
            err.set_name(&info.name);
            if let Some(stack) = &info.stack {
                // Frozen or exotic errors keep the engine's own stack.
                let _ = Reflect::set(&err, &JsValue::from_str("stack"), &JsValue::from_str(stack));
            }
            err.into()
        }
    }
}

fn post_error(err: &JsValue) -> TransportError {
    let text = match err.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.to_string()),
        None => err.as_string().unwrap_or_else(|| format!("{err:?}")),
    };
    TransportError::Post(text)
}
