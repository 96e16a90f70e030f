//! Native share with clipboard fallback.
//!
//! `navigator.share` is gated behind user activation and absent from many
//! desktop browsers, so the binding goes through inline JS and rejects
//! when unsupported; callers fall back to copying the page URL.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(
    inline_js = "export function native_share(title, text, url) { \
                   if (navigator.share) { return navigator.share({ title, text, url }); } \
                   return Promise.reject(new Error('share unsupported')); \
                 }"
)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn native_share(title: &str, text: &str, url: &str) -> Result<js_sys::Promise, JsValue>;
}

/// The current page URL.
pub fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Invoke the platform share sheet. Err when unavailable or dismissed.
pub async fn share(title: &str, text: &str, url: &str) -> Result<(), JsValue> {
    let promise = native_share(title, text, url)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Copy text to the clipboard. Err when the clipboard is unavailable.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let clipboard = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .navigator()
        .clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
