//! Types shared by the glarea crates: config errors and logging setup.

pub mod errors;
pub mod logging;

pub use errors::ConfigError;
pub use logging::{directive_for_level, init_logging, DEFAULT_LOG_DIRECTIVE};
