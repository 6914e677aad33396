pub mod assets_api;
pub mod auth_api;
pub mod client;
pub mod reservations_api;
pub mod sessions_api;

/// Same-origin by default, overridable at build time when the UI and the API
/// live on different hosts.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}
