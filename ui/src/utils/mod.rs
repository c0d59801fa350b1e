pub mod format;
pub mod time;

/// Base URL used when no API address was given at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// The backend address, fixed at build time. `NEXT_PUBLIC_API_URL` is
/// accepted for deployments that still export the old variable name.
pub fn api_base_url() -> &'static str {
    option_env!("API_URL")
        .or(option_env!("NEXT_PUBLIC_API_URL"))
        .unwrap_or(DEFAULT_API_URL)
}

/// Returns true if the application is running in development mode.
/// Checks if the API address points at localhost.
pub fn is_dev_mode() -> bool {
    let url = api_base_url();
    url.contains("localhost") || url.contains("127.0.0.1")
}

/// JavaScript key for the Kakao maps SDK, if one was given at build time.
pub fn kakao_map_api_key() -> Option<&'static str> {
    option_env!("KAKAO_MAP_API_KEY").filter(|key| !key.is_empty())
}

/// Ask the user to confirm through the browser's dialog. Anything other
/// than an explicit yes counts as a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
