//! Portal configuration
//!
//! Values are baked in at compile time through `option_env!`; anything left
//! unset falls back to the origin the application is served from.

use tracing::Level;

/// Backend and asset locations for the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Backend origin, without trailing slash. Empty means "same origin".
    pub api_base_url: String,
    /// Prefix for static PDF and QR assets. Empty means "same origin".
    pub media_base_url: String,
    /// Most verbose level forwarded to the browser console.
    pub log_level: Level,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("PORTAL_API_BASE_URL"),
            option_env!("PORTAL_MEDIA_BASE_URL"),
            option_env!("PORTAL_LOG_LEVEL"),
        )
    }
}

impl PortalConfig {
    /// Configuration compiled into this build.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_values(
        api_base_url: Option<&str>,
        media_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: trim_base(api_base_url),
            media_base_url: trim_base(media_base_url),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(Level::INFO),
        }
    }

    /// Backend origin to prefix endpoint paths with.
    ///
    /// `reqwest` needs absolute URLs even in the browser, so an empty setting
    /// resolves to `window.location.origin`.
    pub fn api_origin(&self) -> String {
        if self.api_base_url.is_empty() {
            browser_origin()
        } else {
            self.api_base_url.clone()
        }
    }

    /// Absolute or origin-relative URL of a static asset.
    ///
    /// URLs that already carry a scheme are returned unchanged.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.media_base_url,
            path.trim_start_matches('/')
        )
    }
}

fn trim_base(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

fn browser_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_same_origin() {
        let config = PortalConfig::from_values(None, None, None);
        assert!(config.api_base_url.is_empty());
        assert!(config.media_base_url.is_empty());
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = PortalConfig::from_values(
            Some("https://api.bcb.bi/"),
            Some(" https://cdn.bcb.bi// "),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://api.bcb.bi");
        assert_eq!(config.api_origin(), "https://api.bcb.bi");
        assert_eq!(config.media_base_url, "https://cdn.bcb.bi");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_media_url() {
        let local = PortalConfig::from_values(None, None, None);
        assert_eq!(local.media_url("/media/pdfs/visa.pdf"), "/media/pdfs/visa.pdf");

        let cdn = PortalConfig::from_values(None, Some("https://cdn.bcb.bi"), None);
        assert_eq!(
            cdn.media_url("/media/pdfs/visa.pdf"),
            "https://cdn.bcb.bi/media/pdfs/visa.pdf"
        );
        assert_eq!(
            cdn.media_url("https://qr.bcb.bi/42.png"),
            "https://qr.bcb.bi/42.png"
        );
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = PortalConfig::from_values(None, None, Some("chatty"));
        assert_eq!(config.log_level, Level::INFO);
    }
}
