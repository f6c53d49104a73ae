//! `sections` and `pages`: the links the dashboard is made of.
//!
//! # Example
//!
//! ```yaml
//! pages:
//!   - name: Networking
//!     path: networking.yml
//! sections:
//!   - name: Media
//!     icon: fas fa-film
//!     items:
//!       - title: Jellyfin
//!         url: https://jellyfin.lan
//!         hotkey: 1
//! ```

use crate::config::types::lenient;
use serde::{Deserialize, Serialize};

/// A named group of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Section {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::seq")]
    pub items: Vec<Item>,
}

/// A single link tile.
///
/// `title` and `url` are required by the schema but optional here, so a
/// document whose violations were tolerated still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    /// Opening method (`newtab`, `sametab`, `modal`, ...).
    #[serde(deserialize_with = "lenient::string")]
    pub target: Option<String>,
    /// Digit key that opens this item.
    #[serde(deserialize_with = "lenient::hotkey", skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<u32>,
}

/// Additional dashboard page, loaded from its own config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageRef {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// Relative path or absolute URL of the page's config.
    #[serde(deserialize_with = "lenient::string")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_sections_parsing() {
        let config = test_parse_config(
            r#"
sections:
  - name: Media
    items:
      - title: Jellyfin
        url: https://jellyfin.lan
        hotkey: 1
      - title: Sonarr
        url: http://sonarr.lan
  - name: Empty
"#,
        );
        assert_eq!(config.sections.len(), 2);
        let media = &config.sections[0];
        assert_eq!(media.name.as_deref(), Some("Media"));
        assert_eq!(media.items[0].hotkey, Some(1));
        assert_eq!(media.items[1].hotkey, None);
        assert!(config.sections[1].items.is_empty());
    }

    #[test]
    fn test_item_missing_title_still_loads() {
        let config = test_parse_config("sections:\n  - items:\n      - url: https://a.com\n");
        assert_eq!(config.sections[0].items[0].title, None);
        assert_eq!(
            config.sections[0].items[0].url.as_deref(),
            Some("https://a.com")
        );
    }

    #[test]
    fn test_pages_parsing() {
        let config = test_parse_config(
            "pages:\n  - name: Networking\n    path: networking.yml\n  - name: Remote\n    path: https://x.org/c.yml\n",
        );
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[0].path.as_deref(), Some("networking.yml"));
    }
}
