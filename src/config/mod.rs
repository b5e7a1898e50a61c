//! Configuration module for Exoframe
//!
//! Configuration hierarchy:
//! 1. CLI flags (`--endpoint`, `--token`; highest priority)
//! 2. Environment variables (EXOFRAME_*)
//! 3. User config (`$EXOFRAME_CONFIG` or ~/.config/exoframe/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, ConfigWarning};
pub use types::{Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
