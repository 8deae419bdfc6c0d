//! Screen model tests: cursor addressing, erase operations, newline flags.

use crate::helpers::{screen_of, window_of};

#[test]
fn plain_text_passes_through() {
    let screen = screen_of("hello world");
    assert_eq!(screen.as_plain_text(), "hello world");
    assert_eq!(screen.cursor(), (11, 0));
}

#[test]
fn leading_newline_leaves_a_flagged_blank_line() {
    let screen = screen_of("\n1234");
    assert_eq!(
        window_of(&screen),
        vec![(String::new(), true), ("1234".to_string(), false)]
    );
}

#[test]
fn double_newlines_keep_their_blank_lines() {
    let screen = screen_of("\n\n12\n\n34\n");
    assert_eq!(
        window_of(&screen),
        vec![
            (String::new(), true),
            (String::new(), true),
            ("12".to_string(), true),
            (String::new(), true),
            ("34".to_string(), true),
            (String::new(), false),
        ]
    );
}

#[test]
fn carriage_return_rewrites_the_line_start() {
    let screen = screen_of("abc\rX");
    assert_eq!(screen.as_plain_text(), "Xbc");
}

#[test]
fn backspace_rewrites_the_previous_cell() {
    let screen = screen_of("abc\x08X");
    assert_eq!(screen.as_plain_text(), "abX");
}

#[test]
fn cursor_up_and_rewrite() {
    let screen = screen_of("one\ntwo\x1b[A\rONE");
    assert_eq!(screen.as_plain_text(), "ONE\ntwo");
}

#[test]
fn cursor_forward_skips_cells() {
    let screen = screen_of("a\x1b[2Cb");
    assert_eq!(screen.as_plain_text(), "a  b");
}

#[test]
fn cursor_down_extends_lazily() {
    let screen = screen_of("a\x1b[2Bb");
    assert_eq!(screen.as_plain_text(), "a\n\n b");
}

#[test]
fn erase_display_discards_and_homes() {
    let screen = screen_of("abc\x1b[2Jxy");
    assert_eq!(screen.as_plain_text(), "xy");
    assert_eq!(screen.cursor(), (2, 0));
    assert_eq!(screen.lines().len(), 1);
}

#[test]
fn erase_display_to_end_drops_lower_rows() {
    let screen = screen_of("aaa\nbbb\nccc\x1b[2A\x1b[1D\x1b[0J");
    assert_eq!(screen.as_plain_text(), "aa");
    assert_eq!(screen.lines().len(), 1);
}

#[test]
fn erase_line_to_end() {
    let screen = screen_of("abcdef\x1b[3D\x1b[K");
    assert_eq!(screen.as_plain_text(), "abc");
}

#[test]
fn erase_line_from_start() {
    let screen = screen_of("abcdef\x1b[3D\x1b[1K");
    assert_eq!(screen.as_plain_text(), "    ef");
}

#[test]
fn erase_whole_line_keeps_the_row() {
    let screen = screen_of("abc\ndef\x1b[2K");
    assert_eq!(screen.as_plain_text(), "abc\n");
    assert_eq!(screen.lines().len(), 2);
}

#[test]
fn overwrite_keeps_longer_tail() {
    let screen = screen_of("longest\rab");
    assert_eq!(screen.as_plain_text(), "abngest");
}

#[test]
fn reverse_index_moves_up_without_scrolling() {
    let screen = screen_of("one\ntwo\x1bM\rX");
    assert_eq!(screen.as_plain_text(), "Xne\ntwo");
}

#[test]
fn tabs_are_literal_cells() {
    let screen = screen_of("a\tb");
    assert_eq!(screen.as_plain_text(), "a\tb");
    assert_eq!(screen.cursor(), (3, 0));
}

#[test]
fn column_absolute_returns_to_line_start() {
    let screen = screen_of("abcdef\x1b[3GX");
    assert_eq!(screen.as_plain_text(), "Xbcdef");
}
