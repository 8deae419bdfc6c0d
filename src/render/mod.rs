//! Line renderers.
//!
//! Rendering never mutates the screen; each entry point walks retained
//! lines and builds a fresh output buffer. Per-line output is right-trimmed
//! of spaces and tabs, and lines are joined with `\n`.

mod ansi;
mod html;

pub(crate) use ansi::line_as_ansi;
pub(crate) use html::line_as_html;

use crate::line::ScreenLine;
use crate::node::{ElementHandle, ElementRenderer, Node};
use crate::screen::ScrollOutFormat;

/// Element renderer that drops elements from the output.
pub(crate) struct NoElements;

impl ElementRenderer for NoElements {
    fn render(&self, _handle: ElementHandle) -> String {
        String::new()
    }
}

pub(crate) fn as_html(lines: &[ScreenLine], elements: &dyn ElementRenderer) -> String {
    let rendered: Vec<String> = lines
        .iter()
        .map(|line| line_as_html(line, elements))
        .collect();
    rendered.join("\n")
}

pub(crate) fn as_ansi(lines: &[ScreenLine]) -> String {
    let rendered: Vec<String> = lines.iter().map(line_as_ansi).collect();
    rendered.join("\n")
}

/// All rune cells, styling stripped; elements are skipped. Trailing spaces
/// and tabs are trimmed from the end of the whole output.
pub(crate) fn as_plain_text(lines: &[ScreenLine]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.extend(line.nodes().iter().filter_map(Node::as_rune));
        if i < lines.len() - 1 {
            out.push('\n');
        }
    }
    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
    out
}

/// Renders a line leaving a bounded window. The trailing `\n` mirrors the
/// line's newline flag, so re-concatenated scroll-out output reproduces the
/// original line structure.
pub(crate) fn scrolled_out_line(line: &ScreenLine, format: ScrollOutFormat) -> String {
    let mut out = match format {
        ScrollOutFormat::Ansi => line_as_ansi(line),
        ScrollOutFormat::Html => {
            let html = line_as_html(line, &NoElements);
            if html.is_empty() {
                "&nbsp;".to_string()
            } else {
                html
            }
        }
    };
    if line.has_newline() {
        out.push('\n');
    }
    out
}
