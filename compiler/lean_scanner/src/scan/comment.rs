//! Body of a nested `/- ... -/` comment.
//!
//! The grammar consumes the opening `/-` and the closing `-/`; this
//! recognizer produces everything in between, counting nested openers so
//! that only the `-/` matching the outer opener ends the body. An
//! unterminated comment fails the scan.
//!
//! Nothing in the scanner state records that a comment is open, so during
//! error recovery the scanner cannot tell whether it sits inside one. The
//! recognizer stays off then and the grammar recovers the comment itself.

use lean_lexer_core::ExternalToken;

use super::{Recognized, ScanContext};

pub(super) fn comment_body(cx: &mut ScanContext<'_>) -> Recognized {
    if cx.recovering() || !cx.accepts(ExternalToken::CommentBody) {
        return Recognized::NoMatch;
    }

    let mut depth: u32 = 0;
    while let Some(c) = cx.lexer.lookahead() {
        match c {
            '-' => {
                cx.lexer.mark_end();
                cx.lexer.advance();
                if cx.lexer.at('/') {
                    if depth == 0 {
                        return Recognized::Token(ExternalToken::CommentBody);
                    }
                    depth -= 1;
                    cx.lexer.advance();
                }
            }
            '/' => {
                cx.lexer.advance();
                if cx.lexer.at('-') {
                    depth += 1;
                    cx.lexer.advance();
                }
            }
            _ => cx.lexer.advance(),
        }
    }
    Recognized::Abort
}
