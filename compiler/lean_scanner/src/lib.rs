//! External scanner for the Lean grammar.
//!
//! The host parser calls [`Scanner::scan`] at positions where the grammar
//! needs a token that a context-free lexer cannot decide: raw string
//! fences, nested comment bodies, and the layout tokens driven by the
//! indentation column stack and bracket nesting.
//!
//! Every scan is a pure function of the [`ScannerState`], the input and the
//! set of acceptable kinds, so the host can checkpoint the state with
//! [`Scanner::serialize`] and resume from any checkpoint after an edit.
//!
//! # Example
//!
//! ```
//! use lean_lexer_core::{ExternalToken, SourceBuffer, ValidTokens};
//! use lean_scanner::Scanner;
//!
//! let buf = SourceBuffer::new("r#\"a\"b\"#");
//! let mut cursor = buf.cursor();
//! let mut scanner = Scanner::new();
//!
//! let kind = scanner.scan(&mut cursor, ValidTokens::RAW_STR_START);
//! assert_eq!(kind, Some(ExternalToken::RawStrStart));
//! assert_eq!(scanner.state().raw_fence(), Some(1));
//! ```
//!
//! # Tracing
//!
//! Decisions are logged with `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG=lean_scanner=trace` to see which recognizer produced each
//! token, or `=debug` for layout stack pushes and pops only.

mod config;
mod error;
mod scan;
mod scanner;
mod snapshot;
mod state;

#[cfg(test)]
mod test_support;


use std::sync::Once;

pub use config::ScannerConfig;
pub use error::{ConfigError, SnapshotError};
pub use scanner::Scanner;
pub use snapshot::{MAX_FRAMES, SERIALIZATION_BUFFER_SIZE};
pub use state::{Frame, ScannerState, BRACKET_SENTINEL, MAX_FENCE, MAX_INDENT_COLUMN};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
