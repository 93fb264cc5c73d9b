//! Column-stack recognizers: push, pop, dedent, same-column continuation,
//! and the `|` / `else` continuations strictly right of the frame.
//!
//! All of them are suppressed during error recovery except plain [`eof`].

use lean_lexer_core::ExternalToken;

use super::{Recognized, ScanContext};
use crate::state::Frame;

/// Characters that close a layout block without a line break.
const BLOCK_CLOSERS: &[char] = &[')', ']', '}', '⟩', ','];

/// Pop the innermost indentation frame on request.
///
/// The grammar asks for this right after a binder whose block turned out to
/// be a single line, so the frame pushed for it is never measured again.
pub(super) fn pop_col(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.accepts_layout(ExternalToken::PopCol) || cx.state.top_indent().is_none() {
        return Recognized::NoMatch;
    }
    cx.state.pop();
    Recognized::Token(ExternalToken::PopCol)
}

/// A line starting left of the innermost frame closes it.
///
/// Zero-width: the next scan measures the same line again, so one dedent is
/// produced per closed frame.
pub(super) fn dedent(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.accepts_layout(ExternalToken::Dedent) || !cx.layout.newline {
        return Recognized::NoMatch;
    }
    match cx.state.top_indent() {
        Some(top) if cx.layout.column < top => pop_dedent(cx),
        _ => Recognized::NoMatch,
    }
}

/// End of input closes every open indentation frame, one per scan.
pub(super) fn eof_dedent(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.lexer.is_eof()
        || !cx.accepts_layout(ExternalToken::Dedent)
        || cx.state.top_indent().is_none()
    {
        return Recognized::NoMatch;
    }
    pop_dedent(cx)
}

pub(super) fn eof(cx: &mut ScanContext<'_>) -> Recognized {
    if cx.lexer.is_eof() && cx.accepts(ExternalToken::Eof) {
        Recognized::Token(ExternalToken::Eof)
    } else {
        Recognized::NoMatch
    }
}

/// A closing bracket or a comma closes the innermost indentation frame.
pub(super) fn separator_dedent(cx: &mut ScanContext<'_>) -> Recognized {
    let at_closer = cx
        .lexer
        .lookahead()
        .is_some_and(|c| BLOCK_CLOSERS.contains(&c));
    if !at_closer
        || !cx.accepts_layout(ExternalToken::Dedent)
        || cx.state.top_indent().is_none()
    {
        return Recognized::NoMatch;
    }
    pop_dedent(cx)
}

fn pop_dedent(cx: &mut ScanContext<'_>) -> Recognized {
    cx.state.pop();
    Recognized::Token(ExternalToken::Dedent)
}

/// Open an indentation frame at the candidate column.
pub(super) fn push_col(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.accepts_layout(ExternalToken::PushCol) || !cx.state.exceeds_top(cx.layout.column) {
        return Recognized::NoMatch;
    }
    if cx.push_frame(Frame::Indent(cx.layout.column)) {
        Recognized::Token(ExternalToken::PushCol)
    } else {
        Recognized::NoMatch
    }
}

/// A new line aligned with the innermost frame.
pub(super) fn eq_col(cx: &mut ScanContext<'_>) -> Recognized {
    if cx.accepts_layout(ExternalToken::EqColStart)
        && cx.layout.newline
        && cx.state.top_indent() == Some(cx.layout.column)
    {
        Recognized::Token(ExternalToken::EqColStart)
    } else {
        Recognized::NoMatch
    }
}

/// A `|` right of the innermost frame. Consumes the bar.
pub(super) fn gt_col_bar(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.lexer.at('|')
        || !cx.accepts_layout(ExternalToken::GtColBar)
        || !cx.state.exceeds_top(cx.layout.column)
    {
        return Recognized::NoMatch;
    }
    cx.lexer.advance();
    cx.lexer.mark_end();
    Recognized::Token(ExternalToken::GtColBar)
}

/// An `else` keyword right of the innermost frame. Consumes the keyword.
pub(super) fn gt_col_else(cx: &mut ScanContext<'_>) -> Recognized {
    if !cx.lexer.at('e')
        || !cx.accepts_layout(ExternalToken::GtColElse)
        || !cx.state.exceeds_top(cx.layout.column)
    {
        return Recognized::NoMatch;
    }
    for expected in "else".chars() {
        if !cx.lexer.at(expected) {
            return Recognized::Abort;
        }
        cx.lexer.advance();
    }
    if cx.lexer.lookahead().is_some_and(is_ident_continue) {
        return Recognized::Abort;
    }
    cx.lexer.mark_end();
    Recognized::Token(ExternalToken::GtColElse)
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
