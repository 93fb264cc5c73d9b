//! Host-facing scanner: one instance per lexing session.

use lean_lexer_core::{ExternalToken, Lexer, ValidTokens};
use tracing::{trace, warn};

use crate::config::ScannerConfig;
use crate::error::{ConfigError, SnapshotError};
use crate::scan::{self, ScanContext};
use crate::state::ScannerState;

/// Stateful external scanner.
///
/// Create one per lexing session, call [`scan`](Self::scan) whenever the
/// parser reaches a position where an external token may follow, and use
/// [`serialize`](Self::serialize) / [`deserialize`](Self::deserialize) to
/// checkpoint and restore it across incremental edits.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    state: ScannerState,
    config: ScannerConfig,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with a validated configuration.
    ///
    /// Only `max_depth` affects scanning. Columns come from the host
    /// cursor, so `tab_width` must be applied to the host's buffer (see
    /// [`ScannerConfig::source_buffer`]).
    pub fn with_config(config: ScannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ScannerState::new(),
            config,
        })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScannerState {
        &mut self.state
    }

    /// Return to the state of a fresh session.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Produce at most one token at the cursor.
    ///
    /// On `Some`, the token spans from the cursor's token start to its last
    /// mark. On `None` the host should discard whatever the cursor read and
    /// fall back to its own lexer; the state is unchanged.
    pub fn scan(&mut self, lexer: &mut impl Lexer, valid: ValidTokens) -> Option<ExternalToken> {
        let mut cx = ScanContext::new(&mut self.state, lexer, valid, self.config.max_depth);
        let decision = scan::run(&mut cx)?;
        match decision.result {
            Some(kind) => trace!(
                recognizer = decision.recognizer,
                token = kind.grammar_name(),
                "external token"
            ),
            None => trace!(recognizer = decision.recognizer, "scan aborted"),
        }
        decision.result
    }

    /// Write a snapshot into `buf`, returning the bytes written.
    ///
    /// A state that does not fit writes nothing, which restores as the empty
    /// state.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        match self.state.serialize_into(buf) {
            Ok(written) => written,
            Err(err) => {
                warn!(%err, "dropping scanner snapshot");
                0
            }
        }
    }

    /// Restore a snapshot written by [`serialize`](Self::serialize).
    ///
    /// Empty or malformed input leaves the empty state. A snapshot deeper
    /// than the configured `max_depth` counts as malformed.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        let max = self.config.max_depth;
        let restored = ScannerState::from_snapshot(bytes).and_then(|state| {
            if state.depth() > max {
                Err(SnapshotError::TooDeep {
                    depth: state.depth(),
                    max,
                })
            } else {
                Ok(state)
            }
        });
        match restored {
            Ok(state) => self.state = state,
            Err(err) => {
                warn!(%err, "discarding malformed scanner snapshot");
                self.state.reset();
            }
        }
    }
}
