//! `check` command: validate a config against the schema.

use anyhow::Result;

use super::{CheckArgs, Cli, common};
use crate::config::{ConfigDocument, ConfigError, FieldPath, Violations};
use crate::logger::{InfoKey, info_handler, warning_info_handler};
use crate::page::{get_custom_key_shortcuts, hotkey_collisions};
use crate::schema::{Validation, validate};
use crate::utils::plural_count;
use crate::{debug, log};

/// Validate the config and report.
///
/// Exits with an error when the document has violations, unless
/// `--tolerant` turns them into warnings.
pub fn run_check(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let path = common::resolve_config(cli)?;
    let schema = common::load_schema(cli)?;
    let loaded = ConfigDocument::load(&path)?;
    if !args.json {
        log!("check"; "validating {}", path.display());
    }
    loaded.print_ignored();

    let validation = validate(&loaded.raw, &schema);
    debug!("check"; "{}", plural_count(validation.violations.len(), "violation"));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&validation)?);
        if validation.valid || args.tolerant {
            return Ok(());
        }
        anyhow::bail!("config is invalid");
    }

    let findings = collect_findings(&loaded.document, validation, args.tolerant);
    findings.print_warnings();
    findings.into_result().map_err(ConfigError::Violations)?;

    if args.tolerant {
        info_handler("config loaded; tolerated findings above", InfoKey::RawEditor);
    } else {
        log!("ok"; "config is valid");
    }
    Ok(())
}

/// Merge schema violations with model-level findings.
///
/// Hotkey collisions are always warnings: the dashboard keeps the first
/// item bound to a key and the rest are unreachable by keyboard.
fn collect_findings(
    document: &ConfigDocument,
    validation: Validation,
    tolerant: bool,
) -> Violations {
    let mut findings = if tolerant {
        let mut warnings = Violations::new();
        for violation in validation.violations {
            warnings.warn(violation.path, violation.message);
        }
        warnings
    } else {
        validation.into_violations()
    };

    let shortcuts = get_custom_key_shortcuts(&document.sections);
    let collisions = hotkey_collisions(&shortcuts);
    if !collisions.is_empty() {
        warning_info_handler("some items share a hotkey", InfoKey::Editor);
    }
    for (key, items) in collisions {
        let titles: Vec<_> = items
            .iter()
            .map(|item| item.title.as_deref().unwrap_or("(untitled)"))
            .collect();
        findings.warn(
            FieldPath::root().key("sections"),
            format!(
                "hotkey {key} is bound to {}: {}",
                plural_count(items.len(), "item"),
                titles.join(", ")
            ),
        );
    }

    findings
}
