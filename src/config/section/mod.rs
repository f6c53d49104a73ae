//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key in `conf.yml`:
//!
//! | Module      | Key                   | Purpose                        |
//! |-------------|-----------------------|--------------------------------|
//! | `page_info` | `pageInfo`            | Heading, description, nav      |
//! | `app_config`| `appConfig`           | Global settings, hidden regions|
//! | `content`   | `sections`, `pages`   | Items, sub-pages               |

mod app_config;
mod content;
mod page_info;

pub use app_config::{AppConfig, HideComponents};
pub use content::{Item, PageRef, Section};
pub use page_info::{NavLink, PageInfo};
