//! Keyboard shortcuts declared on items.

use crate::config::{Item, Section};
use std::collections::BTreeMap;

/// Every item that declares a `hotkey`, section order then item order.
///
/// Duplicated hotkey values are kept; see [`hotkey_collisions`].
pub fn get_custom_key_shortcuts(sections: &[Section]) -> Vec<&Item> {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .filter(|item| item.hotkey.is_some())
        .collect()
}

/// Hotkeys claimed by more than one item, with their claimants in order.
pub fn hotkey_collisions<'a>(shortcuts: &[&'a Item]) -> BTreeMap<u32, Vec<&'a Item>> {
    let mut by_key: BTreeMap<u32, Vec<&'a Item>> = BTreeMap::new();
    for &item in shortcuts {
        if let Some(key) = item.hotkey {
            by_key.entry(key).or_default().push(item);
        }
    }
    by_key.retain(|_, items| items.len() > 1);
    by_key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str, hotkey: Option<u32>) -> Item {
        Item {
            url: Some(url.to_string()),
            hotkey,
            ..Item::default()
        }
    }

    fn section(items: Vec<Item>) -> Section {
        Section {
            items,
            ..Section::default()
        }
    }

    #[test]
    fn test_extracts_hotkeys() {
        let sections = vec![section(vec![
            item("https://example.com", Some(1)),
            item("https://example.org", None),
        ])];
        let result = get_custom_key_shortcuts(&sections);
        assert_eq!(result.len(), 1);
        assert_eq!(*result[0], item("https://example.com", Some(1)));
    }

    #[test]
    fn test_whole_float_hotkey_kept() {
        let config = crate::config::test_parse_config(
            "sections:\n  - items:\n      - title: A\n        url: https://a.com\n        hotkey: 2.0\n",
        );
        let result = get_custom_key_shortcuts(&config.sections);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hotkey, Some(2));
    }

    #[test]
    fn test_empty_when_no_hotkeys() {
        let sections = vec![section(vec![item("https://example.com", None)])];
        assert!(get_custom_key_shortcuts(&sections).is_empty());
        assert!(get_custom_key_shortcuts(&[]).is_empty());
        assert!(get_custom_key_shortcuts(&[section(Vec::new())]).is_empty());
    }

    #[test]
    fn test_flattens_in_section_then_item_order() {
        let sections = vec![
            section(vec![item("https://a.com", Some(1)), item("https://a2.com", Some(5))]),
            section(Vec::new()),
            section(vec![item("https://b.com", None), item("https://c.com", Some(2))]),
        ];
        let urls: Vec<_> = get_custom_key_shortcuts(&sections)
            .iter()
            .map(|i| i.url.as_deref().unwrap())
            .collect();
        assert_eq!(urls, vec!["https://a.com", "https://a2.com", "https://c.com"]);
    }

    #[test]
    fn test_duplicates_kept_and_reported() {
        let sections = vec![
            section(vec![item("https://a.com", Some(1))]),
            section(vec![item("https://b.com", Some(1)), item("https://c.com", Some(2))]),
        ];
        let shortcuts = get_custom_key_shortcuts(&sections);
        assert_eq!(shortcuts.len(), 3);

        let collisions = hotkey_collisions(&shortcuts);
        assert_eq!(collisions.len(), 1);
        let claimants: Vec<_> = collisions[&1]
            .iter()
            .map(|i| i.url.as_deref().unwrap())
            .collect();
        assert_eq!(claimants, vec!["https://a.com", "https://b.com"]);
    }
}
