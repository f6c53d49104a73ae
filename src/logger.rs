//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `error_handler` / `info_handler` / `warning_info_handler` for
//!   category-tagged messages (see [`InfoKey`])
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validating {}", path.display());
//! info_handler("config is valid", InfoKey::RawEditor);
//! ```
//!
//! Everything goes to stderr so that `--json` output on stdout stays clean.

use owo_colors::OwoColorize;
use std::{
    fmt,
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "check" => prefix.bright_blue().bold().to_string(),
        "ok" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Info / Warning / Error handlers
// ============================================================================

/// Category attached to user-facing info and warning messages.
///
/// The labels are what the dashboard shows next to a message, so they are
/// kept human readable rather than identifier-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKey {
    Editor,
    RawEditor,
    Visual,
}

impl InfoKey {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Editor => "Interactive Editor",
            Self::RawEditor => "Raw Config Editor",
            Self::Visual => "Layout & Styles",
        }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Report an error. Never panics, whatever the message.
pub fn error_handler(message: &str) {
    log("error", message);
}

/// Report an informational message under a category.
pub fn info_handler(message: &str, key: InfoKey) {
    log("info", &format!("{} {}", format!("({key})").dimmed(), message));
}

/// Report a non-fatal warning under a category.
pub fn warning_info_handler(message: &str, key: InfoKey) {
    log("warning", &format!("{} {}", format!("({key})").dimmed(), message));
}

// ============================================================================
// Tests
// ============================================================================
