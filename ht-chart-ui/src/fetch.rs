//! Async text fetch over the browser Fetch API.

use anyhow::{anyhow, bail, Context};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch a URL and return its body as text.
///
/// Network failures and non-2xx statuses resolve as errors so callers can
/// render an explicit failure state instead of a silently empty page.
/// Cancellation is handled by the caller: pages issue this through a
/// Dioxus resource, which drops the future when the page unmounts.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().context("no window object")?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("network error fetching {url}: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow!("fetch of {url} returned a non-Response value"))?;

    if !resp.ok() {
        bail!("HTTP {} fetching {url}", resp.status());
    }

    let text_promise = resp
        .text()
        .map_err(|e| anyhow!("reading body of {url}: {e:?}"))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow!("reading body of {url}: {e:?}"))?;

    text.as_string()
        .with_context(|| format!("body of {url} was not text"))
}
