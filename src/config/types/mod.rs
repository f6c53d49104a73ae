//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | ConfigError, Violation, Violations           |
//! | `field`  | Document paths for violations                |
//! | `lenient`| Forgiving scalar deserializers               |

mod error;
mod field;
pub mod lenient;

pub use error::{ConfigError, Violation, Violations};
pub use field::FieldPath;
