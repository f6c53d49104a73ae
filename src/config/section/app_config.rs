//! `appConfig` section.
//!
//! Only the settings this tool derives values from are modeled; every other
//! key (theme, layout, auth, ...) is accepted and ignored.
//!
//! # Example
//!
//! ```yaml
//! appConfig:
//!   hideComponents:
//!     hideHeading: true     # no page title
//!     hideNav: false
//!     hideSearch: false
//!     hideSettings: false
//!     hideFooter: true      # no footer
//! ```

use crate::config::types::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Regions the user chose to hide.
    #[serde(deserialize_with = "lenient::record")]
    pub hide_components: HideComponents,
}

/// Sparse "hide X" switches. Missing keys mean "shown".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HideComponents {
    #[serde(deserialize_with = "lenient::truthy")]
    pub hide_heading: bool,
    #[serde(deserialize_with = "lenient::truthy")]
    pub hide_nav: bool,
    #[serde(deserialize_with = "lenient::truthy")]
    pub hide_search: bool,
    #[serde(deserialize_with = "lenient::truthy")]
    pub hide_settings: bool,
    #[serde(deserialize_with = "lenient::truthy")]
    pub hide_footer: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("appConfig: {}");
        let hide = &config.app_config.hide_components;
        assert!(!hide.hide_heading);
        assert!(!hide.hide_nav);
        assert!(!hide.hide_search);
        assert!(!hide.hide_settings);
        assert!(!hide.hide_footer);
    }

    #[test]
    fn test_hide_components_parsing() {
        let config = test_parse_config(
            "appConfig:\n  hideComponents:\n    hideHeading: true\n    hideFooter: 1\n    hideNav: ''\n",
        );
        let hide = &config.app_config.hide_components;
        assert!(hide.hide_heading);
        assert!(hide.hide_footer);
        assert!(!hide.hide_nav);
    }

    #[test]
    fn test_malformed_hide_components_means_all_shown() {
        let config = test_parse_config("appConfig:\n  hideComponents: everything\n");
        assert!(!config.app_config.hide_components.hide_heading);
        assert!(!config.app_config.hide_components.hide_footer);
    }
}
