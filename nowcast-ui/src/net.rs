//! API base-URL resolution.

/// Where the backend lives. A `NOWCAST_API_URL` value supplied at build
/// time wins; otherwise the API is assumed to share the page's origin.
/// Read once at app start.
pub fn api_base_url() -> String {
    if let Some(url) = option_env!("NOWCAST_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string())
}
