//! External token kinds and the acceptable-kind set.
//!
//! The discriminants of [`ExternalToken`] are the positions of the symbols in
//! the grammar's `externals` list. The host parser addresses its
//! `valid_symbols` array with exactly these indices, so the numbering is part
//! of the boundary contract and must never be reordered.

use bitflags::bitflags;

/// Token kinds the external scanner can produce.
///
/// | Range | Category                  |
/// |-------|---------------------------|
/// | 0-2   | Raw string literal        |
/// | 3     | Nested comment body       |
/// | 4-11  | Layout (column stack)     |
/// | 12-19 | Bracket pairs             |
/// | 20    | End of input              |
/// | 21    | Error-recovery sentinel   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalToken {
    // === Raw strings (0-2) ===
    /// `r`, the hash fence and the opening `"`.
    RawStrStart = 0,
    /// Everything between the opening and closing fence.
    RawStrContent = 1,
    /// The closing `"` and its hash fence.
    RawStrEnd = 2,

    // === Comments (3) ===
    /// Body of a `/- ... -/` comment, excluding the delimiters.
    CommentBody = 3,

    // === Layout (4-11) ===
    /// Opens an indentation frame at the current column.
    PushCol = 4,
    /// Explicitly closes the innermost indentation frame.
    PopCol = 5,
    /// Opens a block of match alternatives.
    MatchAltsStart = 6,
    /// Starts another alternative in an open block.
    MatchAltStart = 7,
    /// A new line continuing at the same column as the frame.
    EqColStart = 8,
    /// A `|` strictly right of the frame column.
    GtColBar = 9,
    /// An `else` strictly right of the frame column.
    GtColElse = 10,
    /// Closes one layout frame.
    Dedent = 11,

    // === Brackets (12-19) ===
    ParenOpen = 12,
    ParenClose = 13,
    AngleOpen = 14,
    AngleClose = 15,
    CurlyOpen = 16,
    CurlyClose = 17,
    SquareOpen = 18,
    SquareClose = 19,

    // === Control (20-21) ===
    Eof = 20,
    /// Never produced. Acceptable only while the host recovers from an error.
    ErrorSentinel = 21,
}

impl ExternalToken {
    /// Number of token kinds.
    pub const COUNT: usize = 22;

    /// Every kind, in discriminant order.
    pub const ALL: [ExternalToken; Self::COUNT] = [
        ExternalToken::RawStrStart,
        ExternalToken::RawStrContent,
        ExternalToken::RawStrEnd,
        ExternalToken::CommentBody,
        ExternalToken::PushCol,
        ExternalToken::PopCol,
        ExternalToken::MatchAltsStart,
        ExternalToken::MatchAltStart,
        ExternalToken::EqColStart,
        ExternalToken::GtColBar,
        ExternalToken::GtColElse,
        ExternalToken::Dedent,
        ExternalToken::ParenOpen,
        ExternalToken::ParenClose,
        ExternalToken::AngleOpen,
        ExternalToken::AngleClose,
        ExternalToken::CurlyOpen,
        ExternalToken::CurlyClose,
        ExternalToken::SquareOpen,
        ExternalToken::SquareClose,
        ExternalToken::Eof,
        ExternalToken::ErrorSentinel,
    ];

    /// Index into the host's `valid_symbols` array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its `valid_symbols` index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Symbol name used by the grammar's `externals` list.
    pub const fn grammar_name(self) -> &'static str {
        match self {
            ExternalToken::RawStrStart => "_raw_str_start",
            ExternalToken::RawStrContent => "raw_str_content",
            ExternalToken::RawStrEnd => "_raw_str_end",
            ExternalToken::CommentBody => "comment_body",
            ExternalToken::PushCol => "_push_col",
            ExternalToken::PopCol => "_pop_col",
            ExternalToken::MatchAltsStart => "_match_alts_start",
            ExternalToken::MatchAltStart => "_match_alt_start",
            ExternalToken::EqColStart => "_eq_col_start",
            ExternalToken::GtColBar => "gt_col_bar",
            ExternalToken::GtColElse => "gt_col_else",
            ExternalToken::Dedent => "_dedent",
            ExternalToken::ParenOpen => "paren_open",
            ExternalToken::ParenClose => "paren_close",
            ExternalToken::AngleOpen => "angle_open",
            ExternalToken::AngleClose => "angle_close",
            ExternalToken::CurlyOpen => "curly_open",
            ExternalToken::CurlyClose => "curly_close",
            ExternalToken::SquareOpen => "square_open",
            ExternalToken::SquareClose => "square_close",
            ExternalToken::Eof => "_eof",
            ExternalToken::ErrorSentinel => "__error_sentinel",
        }
    }

    /// Returns `true` for kinds that never consume input.
    pub const fn is_zero_width(self) -> bool {
        matches!(
            self,
            ExternalToken::PushCol
                | ExternalToken::PopCol
                | ExternalToken::MatchAltsStart
                | ExternalToken::MatchAltStart
                | ExternalToken::EqColStart
                | ExternalToken::Dedent
                | ExternalToken::Eof
        )
    }

    /// Single-kind set containing `self`.
    #[inline]
    pub const fn flag(self) -> ValidTokens {
        ValidTokens::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// Set of token kinds the grammar accepts at the current parse position.
    ///
    /// Read-only input to a single scan. One bit per [`ExternalToken`],
    /// bit `n` corresponding to discriminant `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidTokens: u32 {
        const RAW_STR_START = 1 << 0;
        const RAW_STR_CONTENT = 1 << 1;
        const RAW_STR_END = 1 << 2;
        const COMMENT_BODY = 1 << 3;
        const PUSH_COL = 1 << 4;
        const POP_COL = 1 << 5;
        const MATCH_ALTS_START = 1 << 6;
        const MATCH_ALT_START = 1 << 7;
        const EQ_COL_START = 1 << 8;
        const GT_COL_BAR = 1 << 9;
        const GT_COL_ELSE = 1 << 10;
        const DEDENT = 1 << 11;
        const PAREN_OPEN = 1 << 12;
        const PAREN_CLOSE = 1 << 13;
        const ANGLE_OPEN = 1 << 14;
        const ANGLE_CLOSE = 1 << 15;
        const CURLY_OPEN = 1 << 16;
        const CURLY_CLOSE = 1 << 17;
        const SQUARE_OPEN = 1 << 18;
        const SQUARE_CLOSE = 1 << 19;
        const EOF = 1 << 20;
        const ERROR_SENTINEL = 1 << 21;
    }
}

impl ValidTokens {
    /// Build a set from the host's `valid_symbols` array.
    ///
    /// Entries past [`ExternalToken::COUNT`] are ignored; missing entries
    /// count as not acceptable.
    pub fn from_bools(valid_symbols: &[bool]) -> Self {
        valid_symbols
            .iter()
            .zip(ExternalToken::ALL)
            .filter(|(valid, _)| **valid)
            .fold(Self::empty(), |set, (_, kind)| set | kind.flag())
    }

    /// Build a set from a list of kinds.
    pub fn of(kinds: &[ExternalToken]) -> Self {
        kinds
            .iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }

    /// Returns `true` if `kind` is acceptable.
    #[inline]
    pub fn accepts(self, kind: ExternalToken) -> bool {
        self.contains(kind.flag())
    }

    /// Returns `true` while the host is recovering from a syntax error.
    ///
    /// The host marks every symbol valid during recovery, including the
    /// sentinel, which no grammar rule ever accepts otherwise.
    #[inline]
    pub fn is_error_recovery(self) -> bool {
        self.accepts(ExternalToken::ErrorSentinel)
    }

    /// Iterate the acceptable kinds in discriminant order.
    pub fn kinds(self) -> impl Iterator<Item = ExternalToken> {
        ExternalToken::ALL
            .into_iter()
            .filter(move |kind| self.accepts(*kind))
    }
}

impl From<ExternalToken> for ValidTokens {
    fn from(kind: ExternalToken) -> Self {
        kind.flag()
    }
}
