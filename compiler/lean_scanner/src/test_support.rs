//! Shared helpers for unit tests: drive a [`Scanner`] over a string the way
//! a host parser would.

use lean_lexer_core::{ExternalToken, SourceCursor, ValidTokens};

use crate::state::{Frame, ScannerState};
use crate::Scanner;

/// Scan once; on success commit the token and return it with its text,
/// on failure rewind the cursor.
pub(crate) fn scan_once<'a>(
    scanner: &mut Scanner,
    cursor: &mut SourceCursor<'a>,
    valid: ValidTokens,
) -> Option<(ExternalToken, &'a str)> {
    match scanner.scan(cursor, valid) {
        Some(kind) => {
            let span = cursor.finish();
            Some((kind, cursor.slice(span)))
        }
        None => {
            cursor.rewind();
            None
        }
    }
}

/// Scanner whose layout stack already holds `frames`.
pub(crate) fn scanner_with(frames: &[Frame]) -> Scanner {
    let mut scanner = Scanner::new();
    *scanner.state_mut() = ScannerState::from_parts(None, frames.to_vec());
    scanner
}

/// Scanner positioned inside a raw string fenced by `fence` hashes.
pub(crate) fn scanner_in_raw_string(fence: u8) -> Scanner {
    let mut scanner = Scanner::new();
    *scanner.state_mut() = ScannerState::from_parts(Some(fence), Vec::new());
    scanner
}

/// `kinds` plus the error-recovery sentinel.
pub(crate) fn recovering(kinds: &[ExternalToken]) -> ValidTokens {
    ValidTokens::of(kinds) | ValidTokens::ERROR_SENTINEL
}
