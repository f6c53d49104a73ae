//! Dashboard configuration management.
//!
//! Handles loading and parsing `conf.yml` (or `.yaml` / `.json`).
//!
//! # Module Structure
//!
//! | Module    | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `load`    | File discovery, source classification, reading |
//! | `section` | Typed views of the top-level keys              |
//! | `types`   | Errors, violation paths, lenient deserializers |
//!
//! # Configuration Structure
//!
//! ```yaml
//! pageInfo:        # Heading, description, nav links
//! appConfig:       # Global settings (hideComponents, ...)
//! pages:           # Additional dashboard pages
//! sections:        # Groups of items
//! ```
//!
//! The raw [`Value`] is what the schema validator sees; [`ConfigDocument`]
//! is the typed model the page derivations consume. The typed model always
//! loads: malformed values fall back to defaults and are left for the
//! validator to report.

mod load;
mod section;
mod types;

pub use load::{
    CONFIG_FILE_NAMES, ConfigSource, find_config_file, find_config_file_from, read_document,
};
pub use section::{AppConfig, HideComponents, Item, NavLink, PageInfo, PageRef, Section};
pub use types::{ConfigError, FieldPath, Violation, Violations, lenient};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing `conf.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(deserialize_with = "lenient::record")]
    pub page_info: PageInfo,

    #[serde(deserialize_with = "lenient::record")]
    pub app_config: AppConfig,

    #[serde(deserialize_with = "lenient::seq")]
    pub sections: Vec<Section>,

    #[serde(deserialize_with = "lenient::seq")]
    pub pages: Vec<PageRef>,
}

/// A document read from disk, in both raw and typed form.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub raw: Value,
    pub document: ConfigDocument,
    /// Top-level keys the typed model does not use.
    pub ignored: Vec<String>,
}

impl ConfigDocument {
    /// Read `path` and build both views of it.
    pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let raw = read_document(path)?;
        let (document, ignored) = Self::parse_with_ignored(raw.clone())?;
        Ok(LoadedConfig {
            path: path.to_path_buf(),
            raw,
            document,
            ignored,
        })
    }

    /// Parse a raw document, collecting any keys the model ignores.
    ///
    /// A root that is not a mapping (an empty file, a list) reads as the
    /// empty document.
    fn parse_with_ignored(value: Value) -> Result<(Self, Vec<String>), ConfigError> {
        let value = match value {
            value @ Value::Object(_) => value,
            _ => Value::Object(serde_json::Map::new()),
        };
        let mut ignored = Vec::new();
        let config = serde_ignored::deserialize(value, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }
}

impl LoadedConfig {
    /// Print the keys the typed model skipped.
    ///
    /// These are not errors: the dashboard reads many settings this tool
    /// does not derive anything from.
    pub fn print_ignored(&self) {
        if self.ignored.is_empty() {
            return;
        }
        let display_path = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        debug!("config"; "keys not modeled in {}:", display_path);
        for field in &self.ignored {
            debug!("config"; "- {}", field);
        }
    }

    /// Report where the document came from.
    pub fn announce(&self) {
        log!("config"; "loaded {}", self.path.display());
    }
}

/// Parse a YAML snippet with no unknown top-level keys (test helper).
#[cfg(test)]
pub fn test_parse_config(yaml: &str) -> ConfigDocument {
    let value: Value = serde_yaml::from_str(yaml).unwrap();
    let (parsed, ignored) = ConfigDocument::parse_with_ignored(value).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
