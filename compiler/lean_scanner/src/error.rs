//! Error types for snapshots and configuration.
//!
//! Scan failures are not errors: a scan that cannot produce a token simply
//! returns `None` and the host falls back to its own lexer.

use thiserror::Error;

/// A snapshot could not be written or read.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum SnapshotError {
    /// The destination buffer is too small for the current state.
    #[error("scanner snapshot needs {needed} bytes but the buffer holds {available}")]
    BufferTooSmall { needed: usize, available: usize },
    /// The persisted bytes are longer than any snapshot this scanner writes.
    #[error("scanner snapshot of {len} bytes exceeds the {max}-byte limit")]
    TooLong { len: usize, max: usize },
    /// The persisted layout stack is deeper than the configured maximum.
    #[error("scanner snapshot holds {depth} layout frames, above the maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}

/// Invalid [`ScannerConfig`](crate::ScannerConfig).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ConfigError {
    #[error("tab width must be at least 1")]
    ZeroTabWidth,
    #[error("max depth {depth} is outside 1..={max}")]
    DepthOutOfRange { depth: usize, max: usize },
    #[error("environment variable {var}={value:?} is not a valid number")]
    InvalidEnv { var: &'static str, value: String },
}
