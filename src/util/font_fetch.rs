//! Browser font fetcher for the report renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `report::acquire_font` walks the configured font sources through the
//! `FontFetcher` trait. In the browser each attempt is a `gloo-net` GET raced
//! against a `gloo-timers` sleep so a stalled CDN cannot hold the export
//! forever.

#[cfg(test)]
#[path = "font_fetch_test.rs"]
mod font_fetch_test;

use std::time::Duration;

/// Timeout in whole milliseconds, saturating.
pub fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

/// Whether an HTTP status counts as a successful font download.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `FontFetcher` backed by the browser `fetch` API.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooFontFetcher;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl report::FontFetcher for GlooFontFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, report::FetchError> {
        use futures::future::{Either, select};
        use report::FetchError;

        let request = async {
            let response = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = response.status();
            if !is_success_status(status) {
                return Err(FetchError::Status { status });
            }
            response.binary().await.map_err(|e| FetchError::Transport(e.to_string()))
        };
        let deadline = gloo_timers::future::sleep(timeout);
        futures::pin_mut!(request, deadline);

        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::TimedOut { millis: timeout_millis(timeout) }),
        }
    }
}
