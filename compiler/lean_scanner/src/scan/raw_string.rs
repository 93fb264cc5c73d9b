//! Raw string literals: `r`, a fence of `n` hashes, `"`, content, then `"`
//! followed by the same `n` hashes.
//!
//! The literal is produced as three tokens (start, content, end) so the
//! grammar can expose the content as a node. Between them the fence lives in
//! [`ScannerState::raw_fence`](crate::ScannerState::raw_fence).

use lean_lexer_core::ExternalToken;

use super::{Recognized, ScanContext};
use crate::state::MAX_FENCE;

/// `r#*"`: opens a raw string and records its fence.
pub(super) fn raw_string_start(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.lexer.at('r') || !cx.accepts(ExternalToken::RawStrStart) {
        return Recognized::NoMatch;
    }
    cx.lexer.advance();

    let mut fence: u8 = 0;
    while cx.lexer.at('#') {
        if fence == MAX_FENCE {
            return Recognized::Abort;
        }
        cx.lexer.advance();
        fence += 1;
    }
    if !cx.lexer.at('"') {
        return Recognized::Abort;
    }
    cx.lexer.advance();
    cx.lexer.mark_end();
    cx.state.open_raw_string(fence);
    Recognized::Token(ExternalToken::RawStrStart)
}

/// Content or closing fence of the open raw string, if any.
pub(super) fn continue_raw_string(cx: &mut ScanContext<'_>) -> Recognized {
    let Some(fence) = cx.state.raw_fence() else {
        return Recognized::NoMatch;
    };
    if cx.accepts(ExternalToken::RawStrContent) {
        return scan_content(cx, fence);
    }
    if cx.accepts(ExternalToken::RawStrEnd) && cx.lexer.at('"') {
        return scan_end(cx, fence);
    }
    Recognized::NoMatch
}

/// Everything up to the first `"` followed by `fence` hashes. A quote with
/// fewer hashes is content.
fn scan_content(cx: &mut ScanContext<'_>, fence: u8) -> Recognized {
    loop {
        match cx.lexer.lookahead() {
            None => return Recognized::Abort,
            Some('"') => {
                cx.lexer.mark_end();
                cx.lexer.advance();
                if count_hashes(cx, fence) == fence {
                    return Recognized::Token(ExternalToken::RawStrContent);
                }
            }
            Some(_) => cx.lexer.advance(),
        }
    }
}

fn scan_end(cx: &mut ScanContext<'_>, fence: u8) -> Recognized {
    cx.lexer.advance();
    if count_hashes(cx, fence) != fence {
        return Recognized::Abort;
    }
    cx.lexer.mark_end();
    cx.state.close_raw_string();
    Recognized::Token(ExternalToken::RawStrEnd)
}

/// Consume up to `limit` hashes, returning how many were found.
fn count_hashes(cx: &mut ScanContext<'_>, limit: u8) -> u8 {
    let mut count = 0;
    while count < limit && cx.lexer.at('#') {
        cx.lexer.advance();
        count += 1;
    }
    count
}
