//! URL processing utilities.
//!
//! Provides consistent handling of configuration source references:
//! - Absolute URL detection (`http://` / `https://`)
//! - Path normalization (leading slash handling)

use regex::Regex;
use std::sync::LazyLock;

/// Matches an absolute HTTP(S) URL prefix.
static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("static regex"));

/// Check if a reference is an absolute HTTP(S) URL
///
/// # Examples
/// ```ignore
/// assert!(is_absolute_url("https://example.com/conf.yml"));
/// assert!(!is_absolute_url("/conf.yml"));
/// assert!(!is_absolute_url("ftp://example.com/conf.yml"));
/// ```
#[inline]
pub fn is_absolute_url(reference: &str) -> bool {
    ABSOLUTE_URL.is_match(reference)
}

/// Normalize a config source reference into a fetchable path
///
/// - Absolute HTTP(S) URLs are returned unchanged
/// - Paths already starting with `/` are returned unchanged
/// - Anything else gets a leading `/`, so `""` becomes `"/"`
///
/// # Examples
/// ```ignore
/// assert_eq!(format_config_path("https://example.com/conf.yml"), "https://example.com/conf.yml");
/// assert_eq!(format_config_path("conf.yml"), "/conf.yml");
/// assert_eq!(format_config_path("/conf.yml"), "/conf.yml");
/// ```
pub fn format_config_path(path: &str) -> String {
    if is_absolute_url(path) || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_path_urls_unchanged() {
        let url = "https://example.com/config.yml";
        assert_eq!(format_config_path(url), url);
        assert_eq!(
            format_config_path("http://nas.local:4000/conf.yml"),
            "http://nas.local:4000/conf.yml"
        );
    }

    #[test]
    fn test_format_config_path_adds_leading_slash() {
        assert_eq!(format_config_path("config.yml"), "/config.yml");
        assert_eq!(format_config_path("user-data/conf.yml"), "/user-data/conf.yml");
        assert_eq!(format_config_path(""), "/");
    }

    #[test]
    fn test_format_config_path_keeps_absolute_paths() {
        assert_eq!(format_config_path("/config.yml"), "/config.yml");
        assert_eq!(format_config_path("/"), "/");
    }

    #[test]
    fn test_format_config_path_idempotent() {
        for input in [
            "conf.yml",
            "/conf.yml",
            "https://a.com/c.yml",
            "http://b.org",
            "",
            "ftp://x/y",
        ] {
            let once = format_config_path(input);
            assert_eq!(format_config_path(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_non_http_schemes_are_paths() {
        // Only http(s) counts as an absolute source
        assert_eq!(format_config_path("ftp://x/y"), "/ftp://x/y");
        assert!(!is_absolute_url("HTTPS://example.com"));
        assert!(!is_absolute_url("https:/example.com"));
    }
}
