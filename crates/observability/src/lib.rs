//! Tracing and logging setup shared by catalog binaries and tests.

/// Install the default subscriber (JSON, `RUST_LOG` or `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::default());
}

pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, UnknownLogFormat, init_with};
