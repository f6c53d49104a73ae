//! Common utilities shared across CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::Cli;
use crate::config::{CONFIG_FILE_NAMES, ConfigSource, find_config_file};
use crate::debug;
use crate::schema::Schema;

/// Locate the config file named by `--config`, or the default one.
pub fn resolve_config(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(reference) => {
            let path = ConfigSource::parse(reference).into_local()?;
            find_config_file(&path).ok_or_else(|| anyhow!("config file `{reference}` not found"))
        }
        None => CONFIG_FILE_NAMES
            .iter()
            .find_map(|name| find_config_file(Path::new(name)))
            .ok_or_else(|| {
                anyhow!(
                    "no config found (looked for {} here and in parent directories)",
                    CONFIG_FILE_NAMES.join(", ")
                )
            }),
    }
}

/// The schema given with `--schema`, or the built-in one.
pub fn load_schema(cli: &Cli) -> Result<Schema> {
    let Some(path) = &cli.schema else {
        return Ok(Schema::builtin()?);
    };
    let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
    debug!("schema"; "using {}", path.display());
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read schema `{}`", path.display()))?;
    Schema::from_str(&content).with_context(|| format!("invalid schema `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use tempfile::TempDir;

    fn cli_with(config: Option<String>, schema: Option<PathBuf>) -> Cli {
        Cli {
            color: clap::ColorChoice::Never,
            config,
            schema,
            command: Commands::Schema,
        }
    }

    #[test]
    fn test_resolve_remote_rejected() {
        let cli = cli_with(Some("https://example.com/conf.yml".to_string()), None);
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("remote"));
    }

    #[test]
    fn test_resolve_explicit_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dash.yml");
        fs::write(&path, "{}").unwrap();
        let cli = cli_with(Some(path.to_string_lossy().into_owned()), None);
        assert_eq!(resolve_config(&cli).unwrap(), path);
    }

    #[test]
    fn test_load_builtin_schema() {
        let schema = load_schema(&cli_with(None, None)).unwrap();
        assert!(schema.as_value().get("properties").is_some());
    }

    #[test]
    fn test_load_custom_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, r#"{"type": "object", "required": ["sections"]}"#).unwrap();
        let schema = load_schema(&cli_with(None, Some(path))).unwrap();
        assert_eq!(schema.as_value()["required"][0], "sections");
    }

    #[test]
    fn test_load_invalid_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, r#"{"type": "colour"}"#).unwrap();
        assert!(load_schema(&cli_with(None, Some(path))).is_err());
        assert!(load_schema(&cli_with(None, Some(dir.path().join("missing.json")))).is_err());
    }
}
