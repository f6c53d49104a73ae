//! `pageInfo` section.
//!
//! Heading, description and footer shown around the dashboard.
//!
//! # Example
//!
//! ```yaml
//! pageInfo:
//!   title: Home Lab
//!   description: Services running on the NAS
//!   navLinks:
//!     - title: GitHub
//!       path: https://github.com
//!   footerText: ''
//! ```

use crate::config::types::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageInfo {
    /// Page heading, also used for the browser tab.
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,

    /// Sub-heading.
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,

    /// Links rendered in the navigation bar.
    #[serde(deserialize_with = "lenient::seq")]
    pub nav_links: Vec<NavLink>,

    /// Footer HTML; empty string hides the default footer text.
    #[serde(deserialize_with = "lenient::string")]
    pub footer_text: Option<String>,

    /// Icon or image shown next to the heading.
    #[serde(deserialize_with = "lenient::string")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavLink {
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("{}");
        assert_eq!(config.page_info.title, None);
        assert!(config.page_info.nav_links.is_empty());
    }

    #[test]
    fn test_page_info_parsing() {
        let config = test_parse_config(
            r#"
pageInfo:
  title: Home Lab
  description: Services
  footerText: ''
  navLinks:
    - title: GitHub
      path: https://github.com
"#,
        );
        assert_eq!(config.page_info.title.as_deref(), Some("Home Lab"));
        assert_eq!(config.page_info.description.as_deref(), Some("Services"));
        assert_eq!(config.page_info.footer_text.as_deref(), Some(""));
        assert_eq!(config.page_info.nav_links.len(), 1);
        assert_eq!(
            config.page_info.nav_links[0].path.as_deref(),
            Some("https://github.com")
        );
    }

    #[test]
    fn test_numeric_title_is_stringified() {
        let config = test_parse_config("pageInfo:\n  title: 2024\n");
        assert_eq!(config.page_info.title.as_deref(), Some("2024"));
    }
}
