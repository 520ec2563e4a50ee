//! Optional browser integrations, probed through `Reflect` so the
//! page works the same whether or not the APIs exist. Clipboard and
//! file-picker buttons only appear when the probe succeeds.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub clipboard_read: bool,
    pub file_open_picker: bool,
}

pub async fn detect() -> Capabilities {
    Capabilities {
        clipboard_read: clipboard_may_work().await,
        file_open_picker: has_function_on_window("showOpenFilePicker"),
    }
}

fn window_value() -> Option<JsValue> {
    web_sys::window().map(JsValue::from)
}

fn member(target: &JsValue, name: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(value)
}

fn has_function_on_window(name: &str) -> bool {
    window_value()
        .and_then(|window| member(&window, name))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

fn clipboard_object() -> Option<JsValue> {
    let window = window_value()?;
    let navigator = member(&window, "navigator")?;
    let clipboard = member(&navigator, "clipboard")?;
    member(&clipboard, "readText")?;
    Some(clipboard)
}

/// Checks `navigator.clipboard.readText` exists and the clipboard-read
/// permission is not denied. Browsers without the permissions API get
/// the optimistic answer; a later read may still prompt or fail.
async fn clipboard_may_work() -> bool {
    if clipboard_object().is_none() {
        return false;
    }
    let permissions = window_value()
        .and_then(|window| member(&window, "navigator"))
        .and_then(|navigator| member(&navigator, "permissions"));
    let Some(permissions) = permissions else {
        return true;
    };
    let Some(query) = member(&permissions, "query").and_then(|v| v.dyn_into::<Function>().ok())
    else {
        return true;
    };
    let descriptor = Object::new();
    if Reflect::set(
        &descriptor,
        &JsValue::from_str("name"),
        &JsValue::from_str("clipboard-read"),
    )
    .is_err()
    {
        return true;
    }
    let Ok(promise) = query.call1(&permissions, &descriptor) else {
        return true;
    };
    let Ok(promise) = promise.dyn_into::<Promise>() else {
        return true;
    };
    match JsFuture::from(promise).await {
        Ok(status) => member(&status, "state")
            .and_then(|state| state.as_string())
            .map(|state| state != "denied")
            .unwrap_or(true),
        // Chromium rejects the query for unsupported names.
        Err(_) => true,
    }
}

pub async fn read_clipboard_text() -> Result<String, String> {
    let clipboard = clipboard_object().ok_or_else(|| "clipboard is not available".to_string())?;
    let read_text = member(&clipboard, "readText")
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| "clipboard.readText is not available".to_string())?;
    let promise = read_text
        .call0(&clipboard)
        .map_err(|err| js_error_text(&err))?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.readText did not return a promise".to_string())?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| js_error_text(&err))?;
    text.as_string()
        .ok_or_else(|| "clipboard returned no text".to_string())
}

/// Opens the browser file picker and reads the chosen file as text.
/// `Ok(None)` means the user dismissed the picker.
pub async fn pick_file_text() -> Result<Option<String>, String> {
    let window = window_value().ok_or_else(|| "no window".to_string())?;
    let picker = member(&window, "showOpenFilePicker")
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| "showOpenFilePicker is not available".to_string())?;
    let promise = picker
        .call0(&window)
        .map_err(|err| js_error_text(&err))?
        .dyn_into::<Promise>()
        .map_err(|_| "showOpenFilePicker did not return a promise".to_string())?;
    let handles = match JsFuture::from(promise).await {
        Ok(handles) => handles,
        Err(err) if is_abort_error(&err) => return Ok(None),
        Err(err) => return Err(js_error_text(&err)),
    };
    let handle = Array::from(&handles).get(0);
    if handle.is_undefined() {
        return Ok(None);
    }
    let file = call_async_method(&handle, "getFile").await?;
    let text = call_async_method(&file, "text").await?;
    text.as_string()
        .map(Some)
        .ok_or_else(|| "file contents were not text".to_string())
}

async fn call_async_method(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let method = member(target, name)
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| format!("{name} is not available"))?;
    let promise = method
        .call0(target)
        .map_err(|err| js_error_text(&err))?
        .dyn_into::<Promise>()
        .map_err(|_| format!("{name} did not return a promise"))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| js_error_text(&err))
}

fn is_abort_error(err: &JsValue) -> bool {
    member(err, "name")
        .and_then(|name| name.as_string())
        .map(|name| name == "AbortError")
        .unwrap_or(false)
}

fn js_error_text(err: &JsValue) -> String {
    member(err, "message")
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown browser error".to_string())
}
