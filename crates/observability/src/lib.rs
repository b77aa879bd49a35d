//! Process-wide logging setup.

/// Tracing configuration (format, filter) and subscriber installation.
pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat, UnknownLogFormat};

/// Initialize logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init(&LogConfig::from_env());
}
