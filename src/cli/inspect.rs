//! `inspect` command: show what the dashboard derives from a config.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{Cli, InspectArgs, common};
use crate::config::{ConfigDocument, ConfigSource};
use crate::logger::{InfoKey, info_handler};
use crate::page::{
    PageIdentity, VISIBILITY_RULES, VisibilityFlags, VisibilityRule, component_visibility,
    get_custom_key_shortcuts,
};
use crate::utils::path::format_config_path;
use crate::utils::plural_count;

/// Everything `inspect` reports, in the order it is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    /// The page `pageInfo.title` names.
    pub home: PageIdentity,
    pub pages: Vec<PageSummary>,
    pub visibility: VisibilityFlags,
    pub hotkeys: Vec<HotkeySummary>,
}

/// A `pages` entry, as the router and fetcher see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    #[serde(flatten)]
    pub identity: PageIdentity,
    /// Normalized config path, absent when the entry has none.
    pub path: Option<String>,
    pub remote: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotkeySummary {
    pub hotkey: u32,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl InspectReport {
    pub fn build(document: &ConfigDocument, context: &str) -> Self {
        let home = PageIdentity::new(document.page_info.title.as_deref(), context);

        let pages = document
            .pages
            .iter()
            .map(|page| PageSummary {
                identity: PageIdentity::new(page.name.as_deref(), context),
                path: page.path.as_deref().map(format_config_path),
                remote: page
                    .path
                    .as_deref()
                    .is_some_and(|p| matches!(ConfigSource::parse(p), ConfigSource::Remote(_))),
            })
            .collect();

        let hotkeys = get_custom_key_shortcuts(&document.sections)
            .into_iter()
            .filter_map(|item| {
                Some(HotkeySummary {
                    hotkey: item.hotkey?,
                    title: item.title.clone(),
                    url: item.url.clone(),
                })
            })
            .collect();

        Self {
            home,
            pages,
            visibility: component_visibility(&document.app_config),
            hotkeys,
        }
    }

    /// Rules whose region the config hides, in table order.
    pub fn hidden_regions(&self) -> impl Iterator<Item = &'static VisibilityRule> + '_ {
        VISIBILITY_RULES
            .iter()
            .filter(|rule| !self.visibility.get(rule.region))
    }

    /// Print as plain text to stdout.
    pub fn print(&self) {
        println!("{}", "home".bold());
        println!("  {} {}", self.home.name, self.home.slug.dimmed());

        if !self.pages.is_empty() {
            println!("{} {}", "pages".bold(), format!("({})", self.pages.len()).dimmed());
            for page in &self.pages {
                let path = page.path.as_deref().unwrap_or("-");
                let remote = if page.remote { " (remote)" } else { "" };
                println!(
                    "  {} {} {} {}{}",
                    page.identity.name,
                    page.identity.slug.dimmed(),
                    "→".cyan(),
                    path,
                    remote.dimmed()
                );
            }
        }

        println!("{}", "visibility".bold());
        for rule in &VISIBILITY_RULES {
            let state = if self.visibility.get(rule.region) {
                "shown".green().to_string()
            } else {
                format!("{} {}", "hidden".red(), format!("({})", rule.hide_key).dimmed())
            };
            println!("  {:<12} {state}", rule.label);
        }

        println!(
            "{} {}",
            "hotkeys".bold(),
            format!("({})", plural_count(self.hotkeys.len(), "item")).dimmed()
        );
        for hotkey in &self.hotkeys {
            println!(
                "  {} {} {}",
                hotkey.hotkey.to_string().yellow(),
                hotkey.title.as_deref().unwrap_or("(untitled)"),
                hotkey.url.as_deref().unwrap_or_default().dimmed()
            );
        }
    }
}

/// Load the config and print its derived values.
pub fn run_inspect(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let path = common::resolve_config(cli)?;
    let loaded = ConfigDocument::load(&path)?;
    loaded.announce();
    loaded.print_ignored();

    let report = InspectReport::build(&loaded.document, &args.context);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let hidden: Vec<_> = report.hidden_regions().map(|rule| rule.label).collect();
    if !hidden.is_empty() {
        info_handler(&format!("hidden by config: {}", hidden.join(", ")), InfoKey::Visual);
    }
    report.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const CONFIG: &str = r#"
pageInfo:
  title: Home Lab
appConfig:
  hideComponents:
    hideSearch: true
pages:
  - name: Networking
    path: networking.yml
  - name: Remote Stuff
    path: https://example.com/conf.yml
  - name: No Path
sections:
  - name: Media
    items:
      - title: Jellyfin
        url: https://jellyfin.lan
        hotkey: 1
      - title: Sonarr
        url: https://sonarr.lan
  - name: Tools
    items:
      - title: Grafana
        url: https://grafana.lan
        hotkey: 2
"#;

    #[test]
    fn test_report_pages() {
        let report = InspectReport::build(&test_parse_config(CONFIG), "home");
        assert_eq!(report.home.slug, "/home/home-lab");

        let paths: Vec<_> = report.pages.iter().map(|p| p.path.as_deref()).collect();
        assert_eq!(
            paths,
            vec![
                Some("/networking.yml"),
                Some("https://example.com/conf.yml"),
                None
            ]
        );
        assert_eq!(report.pages[1].identity.slug, "/home/remote-stuff");
        assert!(report.pages[1].remote);
        assert!(!report.pages[0].remote);
    }

    #[test]
    fn test_report_visibility_and_hotkeys() {
        let report = InspectReport::build(&test_parse_config(CONFIG), "work");
        assert!(!report.visibility.search_bar);
        assert!(report.visibility.footer);
        let hidden: Vec<_> = report.hidden_regions().map(|rule| rule.hide_key).collect();
        assert_eq!(hidden, vec!["hideSearch"]);

        let keys: Vec<_> = report.hotkeys.iter().map(|h| h.hotkey).collect();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(report.hotkeys[1].title.as_deref(), Some("Grafana"));
    }

    #[test]
    fn test_report_empty_document() {
        let report = InspectReport::build(&ConfigDocument::default(), "home");
        assert_eq!(report.home.name, "unnamed-page");
        assert!(report.pages.is_empty());
        assert!(report.hotkeys.is_empty());
        assert_eq!(report.visibility, VisibilityFlags::default());
        assert_eq!(report.hidden_regions().count(), 0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = InspectReport::build(&test_parse_config(CONFIG), "home");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["home"]["slug"], "/home/home-lab");
        assert_eq!(json["pages"][0]["name"], "networking");
        assert_eq!(json["visibility"]["searchBar"], false);
        assert_eq!(json["hotkeys"][0]["hotkey"], 1);
    }
}
