//! Match alternatives introduced by `|`.
//!
//! A `|` only starts an alternative when a `=>` follows it somewhere, so the
//! recognizer reads ahead to the first `=>` before deciding. Both tokens are
//! zero-width: the `|` is left for the grammar.
//!
//! The first alternative pushes an indentation frame at the column of its
//! `|`; later alternatives need an indentation frame on top and must sit at
//! or right of its column. The frame is closed by an ordinary dedent.

use lean_lexer_core::ExternalToken;

use super::{Recognized, ScanContext};
use crate::state::Frame;

pub(super) fn match_alts(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.lexer.at('|') {
        return Recognized::NoMatch;
    }
    let column = cx.layout.column;
    let start = cx.accepts_layout(ExternalToken::MatchAltsStart);
    let next = cx.accepts_layout(ExternalToken::MatchAltStart)
        && cx.state.top_indent().is_some()
        && cx.state.reaches_top(column);
    if !start && !next {
        return Recognized::NoMatch;
    }

    cx.lexer.advance();
    if !skip_to_arrow(cx) {
        return Recognized::Abort;
    }

    if next {
        Recognized::Token(ExternalToken::MatchAltStart)
    } else if cx.push_frame(Frame::Indent(column)) {
        Recognized::Token(ExternalToken::MatchAltsStart)
    } else {
        Recognized::Abort
    }
}

/// Advance past the next `=>`. Returns `false` at end of input.
fn skip_to_arrow(cx: &mut ScanContext<'_>) -> bool {
    while let Some(c) = cx.lexer.lookahead() {
        cx.lexer.advance();
        if c == '=' && cx.lexer.at('>') {
            cx.lexer.advance();
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests;
