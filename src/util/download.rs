//! Save generated bytes through a temporary object URL.
//!
//! The report never leaves the browser: the bytes are wrapped in a `Blob`,
//! exposed through `URL.createObjectURL`, and clicked through a detached
//! anchor carrying the `download` attribute.

/// MIME type of the exported report.
pub const PDF_MIME: &str = "application/pdf";

/// How long the object URL stays alive after the click, in milliseconds.
pub const REVOKE_DELAY_MS: u32 = 1_000;

/// Hand `bytes` to the browser as a download named `file_name`.
///
/// # Errors
///
/// Returns the browser's error text when the Blob, object URL, or anchor
/// cannot be created.
#[cfg(feature = "csr")]
pub fn save_bytes(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            leptos::logging::warn!("revoking report url failed: {err:?}");
        }
    })
    .forget();
    Ok(())
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
