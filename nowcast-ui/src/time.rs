//! Timer shim for the WASM event loop.

use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds via `setTimeout`. Drives the dashboard
/// poll loop; there is no tokio runtime in the browser.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
