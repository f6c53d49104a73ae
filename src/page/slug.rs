//! Page names and route slugs.
//!
//! A page name is the URL-safe form of a page title: lowercase ASCII
//! letters, digits and hyphens only. It is never empty.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Name used when a title yields nothing usable.
pub const UNNAMED_PAGE: &str = "unnamed-page";

/// Everything outside `[a-z0-9-]`.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-]").expect("static regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Derive a page name from a title.
///
/// Lowercases, drops a trailing `.yml`, turns whitespace runs into single
/// hyphens, then removes everything outside `[a-z0-9-]`. `None`, `""`, and
/// titles with nothing left after cleaning all give [`UNNAMED_PAGE`], which
/// makes the function idempotent.
///
/// # Examples
/// ```ignore
/// assert_eq!(make_page_name(Some("My Page")), "my-page");
/// assert_eq!(make_page_name(Some("config.yml")), "config");
/// assert_eq!(make_page_name(None), "unnamed-page");
/// ```
pub fn make_page_name(title: Option<&str>) -> String {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return UNNAMED_PAGE.to_string();
    };

    let lower = title.to_lowercase();
    let stem = lower.strip_suffix(".yml").unwrap_or(&lower);
    let hyphenated = WHITESPACE.replace_all(stem, "-");
    let name = DISALLOWED.replace_all(&hyphenated, "");

    if name.is_empty() {
        UNNAMED_PAGE.to_string()
    } else {
        name.into_owned()
    }
}

/// Route for a page: `/{context}/{page-name}`.
///
/// `context` is used verbatim; callers pass an already-safe segment.
pub fn make_page_slug(title: Option<&str>, context: &str) -> String {
    format!("/{context}/{}", make_page_name(title))
}

/// Name and route of one page, as the router consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageIdentity {
    pub name: String,
    pub slug: String,
}

impl PageIdentity {
    pub fn new(title: Option<&str>, context: &str) -> Self {
        Self {
            name: make_page_name(title),
            slug: make_page_slug(title, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_hyphens() {
        assert_eq!(make_page_name(Some("My Page")), "my-page");
        assert_eq!(make_page_name(Some("Multiple Word Page")), "multiple-word-page");
        assert_eq!(make_page_name(Some("tabs\tand   spaces")), "tabs-and-spaces");
    }

    #[test]
    fn test_strips_yml_extension() {
        assert_eq!(make_page_name(Some("config.yml")), "config");
        assert_eq!(make_page_name(Some("Config.YML")), "config");
        // only the trailing extension
        assert_eq!(make_page_name(Some("a.yml.yml")), "ayml");
        assert_eq!(make_page_name(Some("conf.yaml")), "confyaml");
    }

    #[test]
    fn test_removes_special_characters() {
        assert_eq!(make_page_name(Some("Page!@#$Name")), "pagename");
        assert_eq!(make_page_name(Some("Config! Page")), "config-page");
        assert_eq!(make_page_name(Some("under_score")), "underscore");
        assert_eq!(make_page_name(Some("Café Menu")), "caf-menu");
    }

    #[test]
    fn test_hyphenates_before_removing() {
        // the space on each side of `!` becomes its own hyphen
        assert_eq!(make_page_name(Some("a ! b")), "a--b");
        assert_eq!(make_page_name(Some("Home & Garden")), "home--garden");
        assert_eq!(make_page_name(Some("a_ b")), "a-b");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(make_page_name(None), UNNAMED_PAGE);
        assert_eq!(make_page_name(Some("")), UNNAMED_PAGE);
        assert_eq!(make_page_name(Some("!!!")), UNNAMED_PAGE);
        assert_eq!(make_page_name(Some(".yml")), UNNAMED_PAGE);
    }

    #[test]
    fn test_output_alphabet_and_idempotence() {
        let titles = [
            "My Page",
            "Page!@#$Name",
            "config.yml",
            "  leading and trailing  ",
            "ÜBER Straße",
            "x.yml.yml",
            "--already-a-name--",
            "日本語",
            "a \n b",
            "a ! b",
            "",
        ];
        for title in titles {
            let once = make_page_name(Some(title));
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad characters in {once:?} from {title:?}"
            );
            assert_eq!(make_page_name(Some(&once)), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn test_make_page_slug() {
        assert_eq!(make_page_slug(Some("My Page"), "home"), "/home/my-page");
        assert_eq!(make_page_slug(Some("Config! Page"), "admin"), "/admin/config-page");
        assert_eq!(make_page_slug(None, "home"), "/home/unnamed-page");
        // context is not slugified
        assert_eq!(make_page_slug(Some("x"), "Work Space"), "/Work Space/x");
    }

    #[test]
    fn test_page_identity() {
        let identity = PageIdentity::new(Some("Networking.yml"), "home");
        assert_eq!(identity.name, "networking");
        assert_eq!(identity.slug, "/home/networking");
        assert_eq!(identity.slug, make_page_slug(Some("Networking.yml"), "home"));
    }
}
