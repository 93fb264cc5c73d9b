//! Property-based tests for the scanner.
//!
//! 1. Balance: every indentation frame pushed in a bracket-free block
//!    structure is closed by a dedent before end of input.
//! 2. Fences: a raw string opened with `n` hashes closes only at a quote
//!    followed by `n` hashes.
//! 3. Robustness: any snapshot, input and acceptable set scans without
//!    panicking and moves the stack by at most one frame.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use lean_lexer_core::{ExternalToken, Lexer, SourceBuffer, SourceCursor, ValidTokens};
use lean_scanner::{Scanner, ScannerState};
use proptest::prelude::*;

// -- Block structures --

/// Nesting depth of each line: starts at 0, deepens by at most one level
/// per line.
fn depths_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec((any::<bool>(), 0usize..4), 1..24).prop_map(|steps| {
        let mut depths: Vec<usize> = vec![0];
        for (deeper, shallower) in steps {
            let last = depths[depths.len() - 1];
            let next = if deeper { last + 1 } else { last.saturating_sub(shallower) };
            depths.push(next);
        }
        depths
    })
}

/// One line per depth; a line ending in `:` opens the next line's block.
fn render(depths: &[usize], indent: usize) -> String {
    let mut source = String::new();
    for (i, depth) in depths.iter().enumerate() {
        let opens = depths.get(i + 1).is_some_and(|next| next > depth);
        source.push_str(&" ".repeat(depth * indent));
        source.push('x');
        if opens {
            source.push(':');
        }
        source.push('\n');
    }
    source
}

/// Host lexing of one line's item. Returns `true` if it opens a block.
fn lex_item(cursor: &mut SourceCursor<'_>) -> bool {
    while cursor.lookahead().is_some_and(char::is_whitespace) {
        cursor.skip();
    }
    let mut opens = false;
    while let Some(c) = cursor.lookahead() {
        if c == '\n' {
            break;
        }
        opens = c == ':';
        cursor.advance();
    }
    cursor.finish();
    opens
}

#[derive(Debug, Default, PartialEq)]
struct Session {
    pushes: usize,
    dedents: usize,
    eq_cols: usize,
}

/// Drive a whole layout session the way a host parser would.
fn run_session(source: &str) -> Session {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();
    let mut session = Session::default();
    let mut expect_block = true;

    for _ in 0..source.len() * 4 + 8 {
        let valid = if expect_block {
            ValidTokens::PUSH_COL
        } else {
            ValidTokens::DEDENT | ValidTokens::EQ_COL_START | ValidTokens::EOF
        };
        let kind = scanner.scan(&mut cursor, valid);
        cursor.finish();
        match kind {
            Some(ExternalToken::PushCol) => {
                session.pushes += 1;
                expect_block = lex_item(&mut cursor);
            }
            Some(ExternalToken::EqColStart) => {
                session.eq_cols += 1;
                expect_block = lex_item(&mut cursor);
            }
            Some(ExternalToken::Dedent) => session.dedents += 1,
            Some(ExternalToken::Eof) => {
                assert_eq!(scanner.state().depth(), 0);
                return session;
            }
            other => panic!("unexpected {other:?} at {:?}", cursor.rest()),
        }
    }
    panic!("session did not reach end of input")
}

// -- Raw strings --

/// Returns `true` if `content` contains a quote followed by `fence` hashes.
fn closes_early(content: &str, fence: usize) -> bool {
    let closer = format!("\"{}", "#".repeat(fence));
    content.contains(&closer)
}

/// Scan `r`, `fence` hashes, `"`, then content. Returns the content text.
fn scan_raw_content(literal: &str) -> Option<String> {
    let buf = SourceBuffer::new(literal);
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();

    scanner.scan(&mut cursor, ValidTokens::RAW_STR_START)?;
    cursor.finish();
    scanner.scan(&mut cursor, ValidTokens::RAW_STR_CONTENT)?;
    let span = cursor.finish();
    Some(cursor.slice(span).to_owned())
}

// -- Arbitrary acceptable sets --

fn valid_tokens_strategy() -> impl Strategy<Value = ValidTokens> {
    prop::collection::vec(any::<bool>(), ExternalToken::COUNT)
        .prop_map(|bools| ValidTokens::from_bools(&bools))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pushes_and_dedents_balance(depths in depths_strategy(), indent in 1usize..5) {
        let source = render(&depths, indent);
        let session = run_session(&source);
        prop_assert_eq!(session.pushes, session.dedents);
        prop_assert_eq!(session.pushes + session.eq_cols, depths.len());
    }

    #[test]
    fn raw_string_closes_at_matching_fence(
        fence in 0usize..4,
        content in "[a#\" ]{0,12}",
        extra in 0usize..3,
    ) {
        prop_assume!(!closes_early(&content, fence));
        let hashes = "#".repeat(fence);
        let literal = format!("r{hashes}\"{content}\"{hashes}{}", "#".repeat(extra));
        prop_assert_eq!(scan_raw_content(&literal), Some(content));
    }

    #[test]
    fn short_fence_never_closes(fence in 1usize..4, content in "[a ]{0,8}") {
        let hashes = "#".repeat(fence);
        let short = "#".repeat(fence - 1);
        let literal = format!("r{hashes}\"{content}\"{short}");
        prop_assert_eq!(scan_raw_content(&literal), None);
    }

    #[test]
    fn any_scan_moves_stack_by_at_most_one(
        snapshot in prop::collection::vec(any::<u8>(), 0..16),
        source in "[ \n\tx|=>()⟨⟩{}\\[\\],r#\"e/-]{0,24}",
        valid in valid_tokens_strategy(),
    ) {
        let mut scanner = Scanner::new();
        scanner.deserialize(&snapshot);
        let before = scanner.state().depth();

        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        let kind = scanner.scan(&mut cursor, valid);
        let after = scanner.state().depth();

        prop_assert!(before.abs_diff(after) <= 1);
        if kind.is_none() {
            prop_assert_eq!(after, before);
        }
        if let Some(kind) = kind {
            prop_assert!(valid.accepts(kind));
        }
    }

    #[test]
    fn snapshot_survives_host_round_trip(
        snapshot in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let mut scanner = Scanner::new();
        scanner.deserialize(&snapshot);
        let mut buf = [0u8; lean_scanner::SERIALIZATION_BUFFER_SIZE];
        let written = scanner.serialize(&mut buf);
        prop_assert_eq!(&buf[..written], snapshot.as_slice());
        let restored = ScannerState::from_snapshot(&buf[..written]);
        prop_assert_eq!(restored.as_ref(), Ok(scanner.state()));
    }
}
