//! Bracket pairs.
//!
//! An opening bracket pushes [`Frame::Bracket`], suspending indentation for
//! its interior. A closing bracket is only produced when the innermost frame
//! is a bracket, so an indentation frame is never closed by one; the
//! separator dedent runs first and closes any block nested inside.

use lean_lexer_core::ExternalToken;

use super::{Recognized, ScanContext};
use crate::state::Frame;

struct BracketPair {
    open: char,
    close: char,
    open_kind: ExternalToken,
    close_kind: ExternalToken,
}

const PAIRS: [BracketPair; 4] = [
    BracketPair {
        open: '(',
        close: ')',
        open_kind: ExternalToken::ParenOpen,
        close_kind: ExternalToken::ParenClose,
    },
    BracketPair {
        open: '⟨',
        close: '⟩',
        open_kind: ExternalToken::AngleOpen,
        close_kind: ExternalToken::AngleClose,
    },
    BracketPair {
        open: '{',
        close: '}',
        open_kind: ExternalToken::CurlyOpen,
        close_kind: ExternalToken::CurlyClose,
    },
    BracketPair {
        open: '[',
        close: ']',
        open_kind: ExternalToken::SquareOpen,
        close_kind: ExternalToken::SquareClose,
    },
];

pub(super) fn bracket(cx: &mut ScanContext<'_>) -> Recognized {
    let Some(c) = cx.lexer.lookahead() else {
        return Recognized::NoMatch;
    };
    for pair in &PAIRS {
        if c == pair.open && cx.accepts(pair.open_kind) {
            if !cx.push_frame(Frame::Bracket) {
                return Recognized::NoMatch;
            }
            return consume(cx, pair.open_kind);
        }
        if c == pair.close && cx.accepts(pair.close_kind) {
            if cx.state.top() != Some(Frame::Bracket) {
                return Recognized::NoMatch;
            }
            cx.state.pop();
            return consume(cx, pair.close_kind);
        }
    }
    Recognized::NoMatch
}

fn consume(cx: &mut ScanContext<'_>, kind: ExternalToken) -> Recognized {
    cx.lexer.advance();
    cx.lexer.mark_end();
    Recognized::Token(kind)
}
