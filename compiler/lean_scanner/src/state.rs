//! Persistent scanner state: the raw-string fence and the layout stack.
//!
//! The state is the only thing carried from one scan to the next. Its
//! behavior must be reproducible from a snapshot alone (see
//! [`snapshot`](crate::snapshot)), so nothing else may influence a scan.
//!
//! # Layout Stack
//!
//! Each [`Frame`] is one layout context. Indentation comparisons only ever
//! consult the innermost frame, and a [`Frame::Bracket`] is never compared
//! against a column: while a bracket frame is on top, indentation is
//! suspended.

use tracing::debug;

/// Largest indentation column a frame can hold. Deeper columns saturate.
pub const MAX_INDENT_COLUMN: u8 = 254;

/// Wire byte reserved for bracket frames.
pub const BRACKET_SENTINEL: u8 = u8::MAX;

/// Largest hash fence a raw string may open with.
pub const MAX_FENCE: u8 = 254;

/// Clamp a layout column into the range a frame can hold.
#[inline]
pub fn saturate_column(column: u32) -> u8 {
    u8::try_from(column).map_or(MAX_INDENT_COLUMN, |c| c.min(MAX_INDENT_COLUMN))
}

/// One entry of the layout stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    /// An indentation block anchored at a column.
    Indent(u8),
    /// The interior of an open bracket.
    Bracket,
}

impl Frame {
    /// Indentation frame at `column`, saturating at [`MAX_INDENT_COLUMN`].
    #[inline]
    pub fn indent(column: u32) -> Self {
        Frame::Indent(saturate_column(column))
    }

    /// Wire encoding: the column, or [`BRACKET_SENTINEL`].
    #[inline]
    pub fn to_byte(self) -> u8 {
        match self {
            Frame::Indent(column) => column,
            Frame::Bracket => BRACKET_SENTINEL,
        }
    }

    /// Inverse of [`to_byte`](Self::to_byte). Every byte decodes.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        if byte == BRACKET_SENTINEL {
            Frame::Bracket
        } else {
            Frame::Indent(byte)
        }
    }
}

/// Mutable state owned by one lexing session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScannerState {
    /// Hash count of the raw string being scanned, if inside one.
    raw_fence: Option<u8>,
    /// Layout frames, outermost first.
    frames: Vec<Frame>,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from its parts.
    pub fn from_parts(raw_fence: Option<u8>, frames: Vec<Frame>) -> Self {
        Self {
            raw_fence: raw_fence.map(|fence| fence.min(MAX_FENCE)),
            frames,
        }
    }

    /// Return to the empty state of a fresh session.
    pub fn reset(&mut self) {
        self.raw_fence = None;
        self.frames.clear();
    }

    // ─── Raw strings ──────────────────────────────────────────────

    /// Hash count of the open raw string, or `None` outside raw strings.
    #[inline]
    pub fn raw_fence(&self) -> Option<u8> {
        self.raw_fence
    }

    #[inline]
    pub fn in_raw_string(&self) -> bool {
        self.raw_fence.is_some()
    }

    pub(crate) fn open_raw_string(&mut self, fence: u8) {
        debug_assert!(fence <= MAX_FENCE, "fence {fence} exceeds {MAX_FENCE}");
        self.raw_fence = Some(fence.min(MAX_FENCE));
    }

    pub(crate) fn close_raw_string(&mut self) {
        self.raw_fence = None;
    }

    // ─── Layout stack ─────────────────────────────────────────────

    /// Layout frames, outermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost frame.
    #[inline]
    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    /// Column of the innermost frame, if it is an indentation frame.
    #[inline]
    pub fn top_indent(&self) -> Option<u8> {
        match self.top() {
            Some(Frame::Indent(column)) => Some(column),
            _ => None,
        }
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        debug!(?frame, depth = self.frames.len() + 1, "push layout frame");
        self.frames.push(frame);
    }

    /// Pop the innermost frame. Popping an empty stack is a no-op.
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        let frame = self.frames.pop();
        if let Some(frame) = frame {
            debug!(?frame, depth = self.frames.len(), "pop layout frame");
        }
        frame
    }

    /// Returns `true` if `column` opens a new indentation level: the stack
    /// is empty, the innermost frame is a bracket, or `column` lies strictly
    /// right of the innermost indentation frame.
    #[inline]
    pub fn exceeds_top(&self, column: u8) -> bool {
        self.top_indent().map_or(true, |top| column > top)
    }

    /// Like [`exceeds_top`](Self::exceeds_top), but also true at the frame's
    /// own column.
    #[inline]
    pub fn reaches_top(&self, column: u8) -> bool {
        self.top_indent().map_or(true, |top| column >= top)
    }
}
