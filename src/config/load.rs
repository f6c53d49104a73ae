//! Locating and reading configuration documents.

use super::ConfigError;
use crate::utils::path::is_absolute_url;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File names tried, in order, when no config is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["conf.yml", "conf.yaml", "conf.json"];

/// Where a configuration reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `http(s)://` reference; the dashboard fetches these itself.
    Remote(url::Url),
    /// Filesystem path, `~` expanded.
    Local(PathBuf),
}

impl ConfigSource {
    /// Classify a reference as typed on the command line or in `pages`.
    ///
    /// # Examples
    /// ```ignore
    /// ConfigSource::parse("https://example.com/conf.yml")  // Remote
    /// ConfigSource::parse("~/dash/conf.yml")               // Local("/home/user/dash/conf.yml")
    /// ```
    pub fn parse(reference: &str) -> Self {
        if is_absolute_url(reference)
            && let Ok(url) = url::Url::parse(reference)
        {
            return Self::Remote(url);
        }
        Self::Local(PathBuf::from(shellexpand::tilde(reference).as_ref()))
    }

    /// The local path, or [`ConfigError::RemoteSource`].
    pub fn into_local(self) -> Result<PathBuf, ConfigError> {
        match self {
            Self::Local(path) => Ok(path),
            Self::Remote(url) => Err(ConfigError::RemoteSource(url.to_string())),
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/dash/public/item-icons/  ← cwd
/// /home/user/dash/public/conf.yml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Read a document, choosing the parser from the file extension.
///
/// `.yml` / `.yaml` are parsed as YAML and `.json` as JSON. Both produce the
/// same [`Value`] tree, so the validator does not care which it was.
pub fn read_document(path: &Path) -> Result<Value, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    // check the extension before touching the file
    if !matches!(ext.as_str(), "yml" | "yaml" | "json") {
        return Err(ConfigError::UnsupportedFormat(ext));
    }

    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

    match ext.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        _ => parse_yaml(&content),
    }
}

fn parse_yaml(content: &str) -> Result<Value, ConfigError> {
    // an empty file is an empty document, not a parse error
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    // `<<: *anchor` keys are resolved before the tree is handed on
    let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml.apply_merge()?;
    Ok(serde_json::to_value(yaml)?)
}

// ============================================================================
// tests
// ============================================================================
