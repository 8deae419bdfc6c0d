//! Stream driver tests: tokenizer integration, OSC handling, configuration.

use logscreen::{Screen, ScreenConfig, ScreenError, ScrollOutFormat, TerminalStream};

use crate::helpers::screen_of;

#[test]
fn dec_private_modes_are_ignored() {
    let screen = screen_of("\x1b[?25lhidden cursor\x1b[?25h");
    assert_eq!(screen.as_plain_text(), "hidden cursor");
}

#[test]
fn mouse_tracking_sequences_are_ignored() {
    let screen = screen_of("a\x1b[<35;10;20Mb");
    assert_eq!(screen.as_plain_text(), "ab");
}

#[test]
fn unknown_csi_finals_are_ignored() {
    let screen = screen_of("a\x1b[5Zb\x1b[2qc");
    assert_eq!(screen.as_plain_text(), "abc");
}

#[test]
fn malformed_sgr_params_are_skipped() {
    let screen = screen_of("\x1b[999mx");
    let cell = screen.lines()[0].nodes()[0];
    assert!(cell.style.is_plain());
}

#[test]
fn osc8_link_sets_the_hyperlink_bit() {
    let screen = screen_of("\x1b]8;;https://example.com\x07link\x1b]8;;\x07plain");
    let nodes = screen.lines()[0].nodes();
    assert!(nodes[0].style.hyperlink());
    assert!(nodes[3].style.hyperlink());
    assert!(!nodes[4].style.hyperlink());
}

#[test]
fn osc8_link_target_is_tracked() {
    let mut stream = TerminalStream::new();
    stream.process(b"\x1b]8;;https://example.com\x07");
    assert_eq!(stream.screen().link(), Some("https://example.com"));
    stream.process(b"\x1b]8;;\x07");
    assert_eq!(stream.screen().link(), None);
}

#[test]
fn hyperlink_bit_does_not_split_spans() {
    let screen = screen_of("ab\x1b]8;;https://example.com\x07cd\x1b]8;;\x07ef");
    assert_eq!(screen.as_html(), "abcdef");
}

#[test]
fn links_survive_sgr_resets() {
    let screen = screen_of("\x1b]8;;https://example.com\x07\x1b[31mx\x1b[0my\x1b]8;;\x07");
    let nodes = screen.lines()[0].nodes();
    assert!(nodes[0].style.hyperlink());
    assert!(nodes[1].style.hyperlink());
    assert!(nodes[1].style.is_plain());
}

#[test]
fn metadata_namespace_is_configurable() {
    let config = ScreenConfig {
        metadata_namespace: "ci".to_string(),
        ..ScreenConfig::default()
    };
    let mut stream = TerminalStream::with_config(config).unwrap();
    stream.process(b"\x1b]ci;step=build\x07x\x1b]bk;t=1\x07");
    assert_eq!(stream.screen().as_html(), "<?ci step=\"build\"?>x");
}

#[test]
fn config_rejects_negative_bounds() {
    let config = ScreenConfig {
        max_rows: -1,
        ..ScreenConfig::default()
    };
    let err = Screen::with_config(config).unwrap_err();
    assert!(matches!(err, ScreenError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("max_rows"));
}

#[test]
fn config_deserializes_from_json() {
    let config: ScreenConfig = serde_json::from_str(
        r#"{"max_cols": 160, "max_rows": 300, "scroll_out_format": "html"}"#,
    )
    .unwrap();
    assert_eq!(config.max_cols, 160);
    assert_eq!(config.max_rows, 300);
    assert_eq!(config.scroll_out_format, ScrollOutFormat::Html);
    assert_eq!(config.metadata_namespace, "bk");
    assert!(Screen::with_config(config).is_ok());
}

#[test]
fn interleaved_writes_accumulate() {
    let mut stream = TerminalStream::new();
    for chunk in [&b"build: "[..], b"\x1b[32m", b"ok", b"\x1b[0m", b"\n"] {
        stream.process(chunk);
    }
    assert_eq!(stream.screen().as_plain_text(), "build: ok\n");
    assert_eq!(
        stream.screen().as_html(),
        "build: <span class=\"term-fg32\">ok</span>\n"
    );
}

#[test]
fn crlf_line_discipline() {
    let screen = screen_of("one\r\ntwo\r\n");
    assert_eq!(screen.as_plain_text(), "one\ntwo\n");
}
