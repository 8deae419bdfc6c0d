//! End-to-end HTML rendering tests.

use logscreen::{ElementHandle, TerminalStream};

use crate::helpers::screen_of;

#[test]
fn basic_sgr_color() {
    let screen = screen_of("\x1b[31mhello\x1b[0m");
    assert_eq!(screen.as_html(), "<span class=\"term-fg31\">hello</span>");
}

#[test]
fn color_runs_share_a_span() {
    let screen = screen_of("\x1b[32mgreen words here\x1b[0m plain");
    assert_eq!(
        screen.as_html(),
        "<span class=\"term-fg32\">green words here</span> plain"
    );
}

#[test]
fn attribute_classes_accumulate() {
    let screen = screen_of("\x1b[1;4;31mx\x1b[0m");
    assert_eq!(
        screen.as_html(),
        "<span class=\"term-fg31 term-fg1 term-fg4\">x</span>"
    );
}

#[test]
fn bright_and_indexed_colors_use_their_schemes() {
    let screen = screen_of("\x1b[91ma\x1b[0m\x1b[38;5;196mb\x1b[0m\x1b[48;5;17mc\x1b[0m");
    assert_eq!(
        screen.as_html(),
        "<span class=\"term-fgi91\">a</span><span class=\"term-fgx196\">b</span><span class=\"term-bgx17\">c</span>"
    );
}

#[test]
fn twenty_four_bit_color_opens_a_classless_span() {
    let screen = screen_of("\x1b[38;2;10;20;30mZ\x1b[0m");
    assert_eq!(screen.as_html(), "<span class=\"\">Z</span>");
}

#[test]
fn text_content_is_escaped() {
    let screen = screen_of("<script>alert(\"x\" & 'y')</script>");
    let html = screen.as_html();
    assert_eq!(
        html,
        "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;&#47;script&gt;"
    );
}

#[test]
fn lines_join_with_newlines_and_blank_lines_are_empty() {
    let screen = screen_of("one\n\ntwo");
    assert_eq!(screen.as_html(), "one\n\ntwo");
}

#[test]
fn trailing_whitespace_is_trimmed_per_line() {
    let screen = screen_of("padded   \nnext\t\n");
    assert_eq!(screen.as_html(), "padded\nnext\n");
}

#[test]
fn metadata_renders_as_sorted_processing_instruction() {
    let screen = screen_of("\x1b]bk;t=1;s=2\x07content");
    assert_eq!(screen.as_html(), "<?bk s=\"2\" t=\"1\"?>content");
}

#[test]
fn metadata_set_if_absent_keeps_first_value() {
    let screen = screen_of("\x1b]bk;t=1\x07\x1b]bk;t=9;s=2\x07content");
    assert_eq!(screen.as_html(), "<?bk s=\"2\" t=\"1\"?>content");
}

#[test]
fn metadata_values_escape_double_quotes() {
    let screen = screen_of("\x1b]bk;msg=a\"b\x07x");
    assert_eq!(screen.as_html(), "<?bk msg=\"a&quot;b\"?>x");
}

#[test]
fn foreign_osc_namespaces_are_ignored() {
    let screen = screen_of("\x1b]other;t=1\x07x");
    assert_eq!(screen.as_html(), "x");
}

#[test]
fn elements_render_through_the_renderer() {
    let mut stream = TerminalStream::new();
    stream.process(b"before ");
    stream.append_element(ElementHandle(7));
    stream.process(b" after");
    let renderer = |handle: ElementHandle| format!("<img data-ref=\"{}\"/>", handle.0);
    assert_eq!(
        stream.screen().as_html_with_elements(&renderer),
        "before <img data-ref=\"7\"/> after"
    );
}

#[test]
fn elements_are_dropped_without_a_renderer() {
    let mut stream = TerminalStream::new();
    stream.process(b"a");
    stream.append_element(ElementHandle(7));
    stream.process(b"b");
    assert_eq!(stream.screen().as_html(), "ab");
}

#[test]
fn rewritten_progress_line_renders_once() {
    let screen = screen_of("progress: 1%\rprogress: 99%");
    assert_eq!(screen.as_html(), "progress: 99%");
}

#[test]
fn no_raw_metacharacters_outside_markup() {
    let screen = screen_of("\x1b[31m<&>\"\x1b[0m");
    let html = screen.as_html();
    let inner = html
        .strip_prefix("<span class=\"term-fg31\">")
        .and_then(|rest| rest.strip_suffix("</span>"))
        .unwrap();
    assert!(!inner.contains('<'));
    assert!(!inner.contains('>'));
    assert!(!inner.contains('&') || inner.contains("&amp;") || inner.contains("&lt;"));
    assert!(!inner.contains('"'));
}
