//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`route`]: URL utilities (`format_config_path`, `is_absolute_url`)

pub mod route;

pub use route::{format_config_path, is_absolute_url};
