use lean_lexer_core::{ExternalToken, SourceBuffer, ValidTokens};
use pretty_assertions::assert_eq;

use crate::state::Frame;
use crate::test_support::{recovering, scan_once, scanner_with};
use crate::Scanner;

use ExternalToken::{MatchAltStart, MatchAltsStart};

#[test]
fn first_bar_opens_block_at_its_column() {
    let buf = SourceBuffer::new("\n  | x => e");
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltsStart.into()),
        Some((MatchAltsStart, ""))
    );
    assert_eq!(scanner.state().frames(), &[Frame::Indent(2)]);
    assert_eq!(cursor.rest(), "\n  | x => e", "the bar is left for the grammar");
}

#[test]
fn single_equals_and_gt_do_not_count() {
    let buf = SourceBuffer::new("| x = 1 > 0 => e");
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltsStart.into()),
        Some((MatchAltsStart, ""))
    );
}

#[test]
fn arrow_after_equals_run() {
    let buf = SourceBuffer::new("| x ==> e");
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltsStart.into()),
        Some((MatchAltsStart, ""))
    );
}

#[test]
fn bar_without_arrow_fails() {
    let buf = SourceBuffer::new("| x = 1 >");
    let mut cursor = buf.cursor();
    let mut scanner = Scanner::new();

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltsStart.into()),
        None
    );
    assert_eq!(scanner.state().depth(), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn later_bar_continues_block() {
    let buf = SourceBuffer::new("\n  | y => f");
    let mut cursor = buf.cursor();
    let mut scanner = scanner_with(&[Frame::Indent(2)]);
    let valid = ValidTokens::MATCH_ALTS_START | ValidTokens::MATCH_ALT_START;

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, valid),
        Some((MatchAltStart, ""))
    );
    assert_eq!(scanner.state().frames(), &[Frame::Indent(2)]);
}

#[test]
fn bar_on_same_line_continues_block() {
    let buf = SourceBuffer::new(" | y => f");
    let mut cursor = buf.cursor();
    let mut scanner = scanner_with(&[Frame::Indent(0)]);

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltStart.into()),
        Some((MatchAltStart, ""))
    );
}

#[test]
fn bar_left_of_block_does_not_continue_it() {
    let buf = SourceBuffer::new("\n| y => f");
    let mut cursor = buf.cursor();
    let mut scanner = scanner_with(&[Frame::Indent(2)]);

    assert_eq!(
        scan_once(&mut scanner, &mut cursor, MatchAltStart.into()),
        None
    );
}

#[test]
fn continuation_needs_an_indentation_frame() {
    for frames in [&[][..], &[Frame::Bracket][..]] {
        let buf = SourceBuffer::new("| y => f");
        let mut cursor = buf.cursor();
        let mut scanner = scanner_with(frames);

        assert_eq!(
            scan_once(&mut scanner, &mut cursor, MatchAltStart.into()),
            None,
            "{frames:?}"
        );
    }
}

#[test]
fn suppressed_during_recovery() {
    let buf = SourceBuffer::new("| x => e");
    let mut cursor = buf.cursor();
    let mut scanner = scanner_with(&[Frame::Indent(0)]);

    assert_eq!(
        scan_once(
            &mut scanner,
            &mut cursor,
            recovering(&[MatchAltsStart, MatchAltStart])
        ),
        None
    );
    assert_eq!(scanner.state().depth(), 1);
}
