//! Blocking user notices.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Shown when the report could not be generated or saved.
pub const EXPORT_FAILED_ALERT: &str = "PDF 生成失败，请检查网络连接 (需要下载中文字体)。\nExport failed.";

/// Show `message` in a native alert dialog.
#[cfg(feature = "csr")]
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("alert without window: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        leptos::logging::warn!("alert failed: {err:?}");
    }
}
