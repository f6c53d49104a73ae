//! UI-ready values derived from a loaded configuration.
//!
//! | Module       | Produces                                    |
//! |--------------|---------------------------------------------|
//! | `slug`       | Page names, route slugs ([`PageIdentity`])  |
//! | `visibility` | [`VisibilityFlags`] from `hideComponents`   |
//! | `hotkey`     | Flattened hotkey item list                  |
//!
//! Everything here is a pure function of its arguments.

pub mod hotkey;
pub mod slug;
pub mod visibility;

pub use hotkey::{get_custom_key_shortcuts, hotkey_collisions};
pub use slug::{PageIdentity, make_page_name, make_page_slug};
pub use visibility::{VISIBILITY_RULES, VisibilityFlags, VisibilityRule, component_visibility};
