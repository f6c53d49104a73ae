//! Which page regions render.
//!
//! `appConfig.hideComponents` is sparse; the UI wants every flag. The
//! mapping lives in one table, [`VISIBILITY_RULES`], walked once per call.

use crate::config::{AppConfig, HideComponents};
use serde::Serialize;

/// A page region that can be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    PageTitle,
    Navigation,
    SearchBar,
    Settings,
    Footer,
}

/// One row of the resolution table.
pub struct VisibilityRule {
    pub region: Region,
    /// Human name of the region.
    pub label: &'static str,
    /// Key under `hideComponents`, for display.
    pub hide_key: &'static str,
    pub hidden: fn(&HideComponents) -> bool,
    /// Visibility when the hide key is not truthy.
    pub default: bool,
}

pub static VISIBILITY_RULES: [VisibilityRule; 5] = [
    VisibilityRule {
        region: Region::PageTitle,
        label: "page title",
        hide_key: "hideHeading",
        hidden: |h| h.hide_heading,
        default: true,
    },
    VisibilityRule {
        region: Region::Navigation,
        label: "navigation",
        hide_key: "hideNav",
        hidden: |h| h.hide_nav,
        default: true,
    },
    VisibilityRule {
        region: Region::SearchBar,
        label: "search bar",
        hide_key: "hideSearch",
        hidden: |h| h.hide_search,
        default: true,
    },
    VisibilityRule {
        region: Region::Settings,
        label: "settings",
        hide_key: "hideSettings",
        hidden: |h| h.hide_settings,
        default: true,
    },
    VisibilityRule {
        region: Region::Footer,
        label: "footer",
        hide_key: "hideFooter",
        hidden: |h| h.hide_footer,
        default: true,
    },
];

/// Fully-populated visibility, one flag per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFlags {
    pub page_title: bool,
    pub navigation: bool,
    pub search_bar: bool,
    pub settings: bool,
    pub footer: bool,
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            page_title: true,
            navigation: true,
            search_bar: true,
            settings: true,
            footer: true,
        }
    }
}

impl VisibilityFlags {
    pub fn get(&self, region: Region) -> bool {
        match region {
            Region::PageTitle => self.page_title,
            Region::Navigation => self.navigation,
            Region::SearchBar => self.search_bar,
            Region::Settings => self.settings,
            Region::Footer => self.footer,
        }
    }

    fn set(&mut self, region: Region, visible: bool) {
        match region {
            Region::PageTitle => self.page_title = visible,
            Region::Navigation => self.navigation = visible,
            Region::SearchBar => self.search_bar = visible,
            Region::Settings => self.settings = visible,
            Region::Footer => self.footer = visible,
        }
    }
}

/// Resolve visibility for every region.
///
/// A region is hidden iff its hide key is truthy.
pub fn component_visibility(app_config: &AppConfig) -> VisibilityFlags {
    let hide = &app_config.hide_components;
    let mut flags = VisibilityFlags::default();
    for rule in &VISIBILITY_RULES {
        let visible = !(rule.hidden)(hide) && rule.default;
        flags.set(rule.region, visible);
    }
    flags
}
