//! Configuration error types.

use super::FieldPath;
use crate::schema::SchemaError;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config file extension `{0}` (expected yml, yaml or json)")]
    UnsupportedFormat(String),

    #[error("remote config sources are not fetched by this tool: {0}")]
    RemoteSource(String),

    #[error("invalid schema")]
    Schema(#[from] SchemaError),

    // No #[from]: source() would print the list twice
    #[error("{0}")]
    Violations(Violations),
}

// ============================================================================
// Violation
// ============================================================================

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Document path (e.g., "sections[0].items[1].url")
    pub path: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Violation {
    pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.path.label().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Violations
// ============================================================================

/// Collected violations (errors) and warnings for one document.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    errors: Vec<Violation>,
    /// Non-fatal findings (unknown fields, hotkey collisions).
    warnings: Vec<(FieldPath, String)>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.errors.push(violation);
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, path: FieldPath, message: impl Into<String>) {
        self.warnings.push((path, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        let warnings = self.warnings();
        if warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "{} non-fatal finding{}:", warnings.len(), crate::utils::plural_s(warnings.len()));
        for (path, message) in warnings {
            eprintln!("- {}: {}", path.label(), message);
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors().iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.len().to_string().red().bold(),
                "violations".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}
