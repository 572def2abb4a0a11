//! Clipboard and share-sheet access. Requires a browser environment.

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description of the failure when there is no clipboard or the
/// browser rejects the write (e.g. missing permission).
#[cfg(feature = "csr")]
pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let Some(clipboard) = window.navigator().clipboard() else {
        return Err("clipboard unavailable".to_owned());
    };
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

/// Open the native share sheet if the browser has one.
///
/// Returns `false` when `navigator.share` is not available.
pub fn share(title: &str, text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return false;
        };
        let Ok(share) = js_sys::Reflect::get(&navigator, &JsValue::from_str("share")) else {
            return false;
        };
        let Some(share) = share.dyn_ref::<js_sys::Function>() else {
            return false;
        };

        let data = js_sys::Object::new();
        let fields = [("title", title), ("text", text)];
        if fields
            .iter()
            .any(|(key, value)| js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value)).is_err())
        {
            return false;
        }

        match share.call1(&navigator, &data) {
            Ok(promise) => {
                // Dismissing the share sheet rejects the promise.
                if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                    leptos::task::spawn_local(async move {
                        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                            log::debug!("share dismissed: {err:?}");
                        }
                    });
                }
                true
            }
            Err(err) => {
                log::warn!("navigator.share failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (title, text);
        false
    }
}
