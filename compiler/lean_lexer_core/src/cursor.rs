//! Character cursor at the host/scanner boundary.
//!
//! [`Lexer`] is the contract a host parser offers the scanner: a single
//! character of lookahead, two ways of advancing (counted into the token, or
//! skipped as whitespace), and a movable token end so trailing lookahead can
//! be left unconsumed.
//!
//! # Token Extent
//!
//! A scan that produces a token covers `[token start, end)`, where the token
//! start moves forward on every [`Lexer::skip`], and `end` is the position of
//! the last [`Lexer::mark_end`] call, or the current position when
//! `mark_end` was never called. Everything advanced past `end` is lookahead
//! only and is re-read by the next scan. A mark placed before skipped
//! whitespace yields a zero-width token at the mark, and the whitespace is
//! skipped again by the next scan.
//!
//! [`SourceCursor`] is the reference implementation over a
//! [`SourceBuffer`](crate::SourceBuffer), used by tests and by hosts that
//! drive the scanner directly.

use crate::source_buffer::next_column;
use crate::Span;

/// Input cursor supplied by the host for one scan.
pub trait Lexer {
    /// The current character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the current character as part of the token.
    fn advance(&mut self);

    /// Consume the current character as whitespace. The token start moves
    /// past it.
    fn skip(&mut self);

    /// Record the current position as the end of the token.
    fn mark_end(&mut self);

    /// Zero-based layout column of the current position.
    fn column(&self) -> u32;

    /// Returns `true` once all input has been consumed.
    fn is_eof(&self) -> bool;

    /// Returns `true` if the current character is `c`.
    #[inline]
    fn at(&self, c: char) -> bool {
        self.lookahead() == Some(c)
    }
}

/// Reference [`Lexer`] over borrowed source text.
///
/// The cursor is [`Copy`], enabling cheap snapshots for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    text: &'a str,
    tab_width: u32,
    /// Current read position (byte index into `text`).
    pos: u32,
    /// Layout column of `pos`.
    column: u32,
    /// Where the pending token starts.
    token_start: u32,
    /// Last `mark_end` position and its column, if any.
    marked: Option<(u32, u32)>,
    /// Position and column where the pending scan began.
    origin: (u32, u32),
}

impl<'a> SourceCursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(text: &'a str, tab_width: u32) -> Self {
        Self::resume(text, tab_width, 0, 0)
    }

    /// Create a cursor at `pos`, whose layout column is already known.
    pub(crate) fn resume(text: &'a str, tab_width: u32, pos: u32, column: u32) -> Self {
        debug_assert!(
            text.is_char_boundary(pos as usize),
            "cursor position {pos} is not a character boundary"
        );
        Self {
            text,
            tab_width,
            pos,
            column,
            token_start: pos,
            marked: None,
            origin: (pos, column),
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Byte offset where the pending token starts.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Start a new token at the current position, discarding any mark.
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.marked = None;
        self.origin = (self.pos, self.column);
    }

    /// Commit the pending token and return its span.
    ///
    /// The cursor rewinds to the token end, so lookahead read past the last
    /// mark is scanned again, and a new token begins there.
    pub fn finish(&mut self) -> Span {
        if let Some((end, column)) = self.marked {
            self.pos = end;
            self.column = column;
        }
        let span = Span::new(self.token_start.min(self.pos), self.pos);
        self.begin_token();
        span
    }

    /// Abandon the pending scan, restoring the position where it began.
    pub fn rewind(&mut self) {
        let (pos, column) = self.origin;
        self.pos = pos;
        self.column = column;
        self.begin_token();
    }

    /// Extract the source text covered by `span`.
    ///
    /// # Contract
    ///
    /// `span` must lie within the source and on character boundaries, which
    /// holds for every span returned by [`finish()`](Self::finish).
    pub fn slice(&self, span: Span) -> &'a str {
        &self.text[span.start as usize..span.end as usize]
    }

    /// Text from the current position to the end of the source.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos as usize..]
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.lookahead() {
            self.column = next_column(self.column, c, self.tab_width);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "len_utf8() is at most 4"
            )]
            let width = c.len_utf8() as u32;
            self.pos += width;
        }
    }
}

impl Lexer for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn advance(&mut self) {
        self.bump();
    }

    #[inline]
    fn skip(&mut self) {
        self.bump();
        self.token_start = self.pos;
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked = Some((self.pos, self.column));
    }

    #[inline]
    fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }
}
