//! Ordered recognizer tables and the shared scan context.
//!
//! A scan tries recognizers in a fixed priority order and stops at the first
//! one that does not answer [`Recognized::NoMatch`]. The order is split in
//! two tables around whitespace skipping: recognizers in [`PRE_LAYOUT`] see
//! the input exactly where the previous token ended, recognizers in
//! [`LAYOUT`] see the first non-whitespace character together with the
//! [`Layout`] measured on the way there.
//!
//! # Contract
//!
//! A recognizer that answers `NoMatch` must not have consumed input or
//! mutated the state. Consuming recognizers call `mark_end` themselves;
//! zero-width tokens rely on the mark the dispatcher places before the
//! whitespace, so the next scan measures the same whitespace again.

mod brackets;
mod comment;
mod layout;
mod match_alts;
mod raw_string;

use lean_lexer_core::{ExternalToken, Lexer, ValidTokens};
use tracing::warn;

use crate::state::{saturate_column, Frame, ScannerState};

/// Answer of a single recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Recognized {
    /// A token was produced; the scan is over.
    Token(ExternalToken),
    /// Not applicable here; try the next recognizer.
    NoMatch,
    /// The recognizer committed to a pattern that then failed to match.
    /// The scan ends without a token.
    Abort,
}

/// What whitespace skipping found before the candidate token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Layout {
    /// A line break was crossed.
    pub newline: bool,
    /// Column of the first non-whitespace character, saturated.
    pub column: u8,
}

/// Everything a recognizer may look at or change during one scan.
pub(crate) struct ScanContext<'s> {
    pub state: &'s mut ScannerState,
    pub lexer: &'s mut dyn Lexer,
    pub valid: ValidTokens,
    pub layout: Layout,
    max_depth: usize,
}

impl<'s> ScanContext<'s> {
    pub fn new(
        state: &'s mut ScannerState,
        lexer: &'s mut dyn Lexer,
        valid: ValidTokens,
        max_depth: usize,
    ) -> Self {
        Self {
            state,
            lexer,
            valid,
            layout: Layout::default(),
            max_depth,
        }
    }

    #[inline]
    pub fn accepts(&self, kind: ExternalToken) -> bool {
        self.valid.accepts(kind)
    }

    #[inline]
    pub fn recovering(&self) -> bool {
        self.valid.is_error_recovery()
    }

    /// Acceptable and layout-sensitive: refused during error recovery.
    #[inline]
    pub fn accepts_layout(&self, kind: ExternalToken) -> bool {
        !self.recovering() && self.accepts(kind)
    }

    /// Push a frame unless the stack is full.
    pub fn push_frame(&mut self, frame: Frame) -> bool {
        if self.state.depth() >= self.max_depth {
            warn!(
                ?frame,
                max_depth = self.max_depth,
                "layout stack full; refusing to push"
            );
            return false;
        }
        self.state.push(frame);
        true
    }

    /// Skip whitespace and record where it ended.
    pub fn skip_whitespace(&mut self) {
        let mut newline = false;
        while let Some(c) = self.lexer.lookahead() {
            match c {
                '\n' | '\r' => newline = true,
                ' ' | '\t' | '\u{c}' => {}
                _ => break,
            }
            self.lexer.skip();
        }
        self.layout = Layout {
            newline,
            column: saturate_column(self.lexer.column()),
        };
    }
}

pub(crate) type Recognizer = fn(&mut ScanContext<'_>) -> Recognized;

/// Recognizers run before whitespace is skipped, highest priority first.
pub(crate) const PRE_LAYOUT: &[(&str, Recognizer)] = &[
    ("pop_col", layout::pop_col),
    ("raw_string_continue", raw_string::continue_raw_string),
    ("comment_body", comment::comment_body),
];

/// Recognizers run at the first non-whitespace character, highest priority
/// first.
pub(crate) const LAYOUT: &[(&str, Recognizer)] = &[
    ("dedent", layout::dedent),
    ("eof_dedent", layout::eof_dedent),
    ("eof", layout::eof),
    ("separator_dedent", layout::separator_dedent),
    ("bracket", brackets::bracket),
    ("push_col", layout::push_col),
    ("eq_col", layout::eq_col),
    ("gt_col_bar", layout::gt_col_bar),
    ("match_alts", match_alts::match_alts),
    ("gt_col_else", layout::gt_col_else),
    ("raw_string_start", raw_string::raw_string_start),
];

/// Outcome of a whole scan: the token (if any) and the recognizer that
/// decided it.
pub(crate) struct Decision {
    pub recognizer: &'static str,
    pub result: Option<ExternalToken>,
}

/// Run both tables in order.
pub(crate) fn run(cx: &mut ScanContext<'_>) -> Option<Decision> {
    // Zero-width tokens end here, before any whitespace.
    cx.lexer.mark_end();

    if let Some(decision) = try_table(cx, PRE_LAYOUT) {
        return Some(decision);
    }
    cx.skip_whitespace();
    try_table(cx, LAYOUT)
}

fn try_table(cx: &mut ScanContext<'_>, table: &[(&'static str, Recognizer)]) -> Option<Decision> {
    for &(recognizer, recognize) in table {
        match recognize(cx) {
            Recognized::NoMatch => {}
            Recognized::Token(kind) => {
                return Some(Decision {
                    recognizer,
                    result: Some(kind),
                })
            }
            Recognized::Abort => {
                return Some(Decision {
                    recognizer,
                    result: None,
                })
            }
        }
    }
    None
}
