//! Canonical ANSI line renderer.
//!
//! Walks a line computing the minimal SGR transition between adjacent
//! cells, so repeated styles cost nothing and a style change costs one
//! sequence. A line that ends styled is closed with a full reset.

use crate::line::ScreenLine;
use crate::node::NodeContent;
use crate::style::Style;

pub(crate) fn line_as_ansi(line: &ScreenLine) -> String {
    let mut out = String::new();
    let mut current = Style::default();

    for node in line.nodes() {
        let params = node.style.ansi_transition(current);
        if !params.is_empty() {
            out.push_str("\x1b[");
            out.push_str(&params.join(";"));
            out.push('m');
        }
        current = node.style;

        // Elements have no ANSI representation.
        if let NodeContent::Rune(ch) = node.content {
            out.push(ch);
        }
    }
    if !current.is_plain() {
        out.push_str("\x1b[0m");
    }

    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
    out
}
