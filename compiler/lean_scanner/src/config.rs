//! Scanner configuration.
//!
//! # Environment Overrides
//!
//! - `LEAN_SCANNER_TAB_WIDTH`: tab stop width of the host source buffer.
//! - `LEAN_SCANNER_MAX_DEPTH`: maximum number of layout frames.

use lean_lexer_core::{SourceBuffer, DEFAULT_TAB_WIDTH};

use crate::error::ConfigError;
use crate::snapshot::MAX_FRAMES;

const TAB_WIDTH_VAR: &str = "LEAN_SCANNER_TAB_WIDTH";
const MAX_DEPTH_VAR: &str = "LEAN_SCANNER_MAX_DEPTH";

/// Tunables for one scanner instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Tab stop width for the host's source buffer.
    ///
    /// The scanner reads columns from the host cursor and never looks at
    /// this field; hosts apply it by creating their buffer with
    /// [`source_buffer`](Self::source_buffer).
    pub tab_width: u32,
    /// Maximum number of layout frames. Pushes beyond it are refused and
    /// deeper snapshots are discarded.
    pub max_depth: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            max_depth: MAX_FRAMES,
        }
    }
}

impl ScannerConfig {
    /// Check that every field is usable.
    ///
    /// `max_depth` is bounded by what fits in one snapshot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        if self.max_depth == 0 || self.max_depth > MAX_FRAMES {
            return Err(ConfigError::DepthOutOfRange {
                depth: self.max_depth,
                max: MAX_FRAMES,
            });
        }
        Ok(())
    }

    /// Defaults overridden by `LEAN_SCANNER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(TAB_WIDTH_VAR) {
            config.tab_width = parse_var(TAB_WIDTH_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_DEPTH_VAR) {
            config.max_depth = parse_var(MAX_DEPTH_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Source buffer whose cursors compute columns with this tab width.
    pub fn source_buffer(&self, source: &str) -> SourceBuffer {
        SourceBuffer::with_tab_width(source, self.tab_width)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_owned(),
    })
}
