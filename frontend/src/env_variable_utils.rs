use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
    pub static ref PAGE_LIMIT: Option<u32> = get_page_limit();
}

const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> String {
    normalize_base_url(
        &get_env_var("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
    )
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "VideoHub".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

pub fn get_page_limit() -> Option<u32> {
    let raw = get_env_var("PAGE_LIMIT").filter(|v| !v.trim().is_empty())?;
    parse_page_limit(&raw)
}

/// Strips trailing slashes so paths can be appended with `format!`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Only positive page sizes are forwarded; anything else leaves the
/// backend's default in place.
pub fn parse_page_limit(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Some(limit),
        _ => {
            log::warn!("Ignoring invalid PAGE_LIMIT '{}'", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(normalize_base_url("http://api.local:9000/"), "http://api.local:9000");
        assert_eq!(normalize_base_url(" http://api.local// "), "http://api.local");
        assert_eq!(normalize_base_url("http://api.local"), "http://api.local");
    }

    #[test]
    fn page_limit_accepts_only_positive_integers() {
        assert_eq!(parse_page_limit("25"), Some(25));
        assert_eq!(parse_page_limit(" 8 "), Some(8));
        assert_eq!(parse_page_limit("0"), None);
        assert_eq!(parse_page_limit("-3"), None);
        assert_eq!(parse_page_limit("ten"), None);
    }
}
