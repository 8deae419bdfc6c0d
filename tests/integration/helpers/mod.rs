//! Shared test helpers.

use std::cell::RefCell;
use std::rc::Rc;

use logscreen::{Screen, ScreenConfig, ScrollOutFormat, TerminalStream};

/// Parses `input` on an unbounded screen and returns it.
pub fn screen_of(input: &str) -> Screen {
    let mut stream = TerminalStream::new();
    stream.process(input.as_bytes());
    stream.into_screen()
}

/// A stream over a bounded window plus a log of every scroll-out callback,
/// in delivery order.
pub fn bounded_stream(
    max_cols: i32,
    max_rows: i32,
    format: ScrollOutFormat,
) -> (TerminalStream, Rc<RefCell<Vec<String>>>) {
    let config = ScreenConfig {
        max_cols,
        max_rows,
        scroll_out_format: format,
        ..ScreenConfig::default()
    };
    let mut stream = TerminalStream::with_config(config).unwrap();
    let flushed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&flushed);
    stream
        .screen_mut()
        .on_scroll_out(move |line| sink.borrow_mut().push(line));
    (stream, flushed)
}

/// The plain-text content of each retained line, with newline flags.
pub fn window_of(screen: &Screen) -> Vec<(String, bool)> {
    screen
        .lines()
        .iter()
        .map(|line| {
            let text: String = line.nodes().iter().filter_map(|n| n.as_rune()).collect();
            (text, line.has_newline())
        })
        .collect()
}
