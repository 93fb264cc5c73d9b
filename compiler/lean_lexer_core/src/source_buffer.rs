//! Owned source text for the reference host cursor.
//!
//! The buffer strips a leading UTF-8 byte-order mark (recording that it was
//! present), precomputes line starts, and remembers the tab width used when
//! converting byte offsets into layout columns. Cursors created from it are
//! [`Copy`] snapshots, so a host can resume scanning anywhere by creating a
//! cursor at a checkpoint offset.

use crate::SourceCursor;

/// Tab stop width used when none is configured.
pub const DEFAULT_TAB_WIDTH: u32 = 8;

/// Source text plus the metadata needed to compute layout columns.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source content without a byte-order mark.
    text: String,
    /// Whether the original input started with `U+FEFF`.
    bom: bool,
    /// Width of a tab stop; always at least 1.
    tab_width: u32,
    /// Byte offset of the first character of every line.
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Create a buffer using [`DEFAULT_TAB_WIDTH`].
    pub fn new(source: &str) -> Self {
        Self::with_tab_width(source, DEFAULT_TAB_WIDTH)
    }

    /// Create a buffer with an explicit tab stop width.
    ///
    /// A width of `0` is treated as `1`.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Sources larger than `u32::MAX` bytes saturate;
    /// the host is expected to reject such files upstream.
    pub fn with_tab_width(source: &str, tab_width: u32) -> Self {
        let (text, bom) = match source.strip_prefix('\u{FEFF}') {
            Some(rest) => (rest, true),
            None => (source, false),
        };

        let mut line_starts = vec![0];
        line_starts.extend(
            memchr::memchr_iter(b'\n', text.as_bytes())
                .map(|offset| u32::try_from(offset + 1).unwrap_or(u32::MAX)),
        );

        Self {
            text: text.to_owned(),
            bom,
            tab_width: tab_width.max(1),
            line_starts,
        }
    }

    /// Source content (without the byte-order mark).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the input started with a UTF-8 byte-order mark.
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    /// Byte offsets where each line begins. Always starts with `0`.
    pub fn line_starts(&self) -> &[u32] {
        &self.line_starts
    }

    /// Zero-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Layout column of `offset`: characters since the line start, with
    /// tabs advancing to the next tab stop.
    ///
    /// A `\r` resets the column, matching a live cursor. Offsets past the
    /// end clamp to the end.
    pub fn column_at(&self, offset: u32) -> u32 {
        let offset = offset.min(self.len());
        let line_start = self.line_starts[self.line_of(offset)];
        let line = &self.text[line_start as usize..offset as usize];
        line.chars()
            .fold(0, |column, c| next_column(column, c, self.tab_width))
    }

    /// Create a cursor positioned at the start of the source.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(&self.text, self.tab_width)
    }

    /// Create a cursor positioned at `offset`, e.g. to resume scanning from
    /// a checkpoint after an edit.
    ///
    /// `offset` is clamped to the source length and must fall on a
    /// character boundary.
    pub fn cursor_at(&self, offset: u32) -> SourceCursor<'_> {
        let offset = offset.min(self.len());
        SourceCursor::resume(&self.text, self.tab_width, offset, self.column_at(offset))
    }
}

/// Column after consuming `c` at `column`.
#[inline]
pub(crate) fn next_column(column: u32, c: char, tab_width: u32) -> u32 {
    match c {
        '\n' | '\r' => 0,
        '\t' => (column / tab_width + 1) * tab_width,
        _ => column + 1,
    }
}
