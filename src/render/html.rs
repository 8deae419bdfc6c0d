//! HTML line renderer.
//!
//! Each line becomes a run of `<span class="…">` segments: a span opens on
//! the first non-plain cell, closes when the masked style changes, and
//! reopens if the new style is non-plain. Line metadata renders ahead of
//! the cells as processing instructions, one per namespace.

use std::collections::BTreeMap;

use crate::line::ScreenLine;
use crate::node::{ElementRenderer, NodeContent};

pub(crate) fn line_as_html(line: &ScreenLine, elements: &dyn ElementRenderer) -> String {
    let mut out = String::new();

    for (namespace, data) in line.metadata() {
        append_meta(&mut out, namespace, data);
    }

    let mut span_open = false;
    let nodes = line.nodes();
    for (idx, node) in nodes.iter().enumerate() {
        let style_changed = idx == 0 || !node.same_style(&nodes[idx - 1]);
        if style_changed {
            if span_open {
                out.push_str("</span>");
                span_open = false;
            }
            if !node.style.is_plain() {
                append_span_open(&mut out, node.style);
                span_open = true;
            }
        }

        match node.content {
            NodeContent::Element(handle) => out.push_str(&elements.render(handle)),
            NodeContent::Rune(ch) => append_char(&mut out, ch),
        }
    }
    if span_open {
        out.push_str("</span>");
    }

    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
    out
}

fn append_span_open(out: &mut String, style: crate::style::Style) {
    out.push_str("<span class=\"");
    for (idx, class) in style.as_classes().iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(class);
    }
    out.push_str("\">");
}

/// `<?ns k1="v1" k2="v2"?>` — keys arrive in ascending order from the
/// BTreeMap; only `"` needs escaping inside attribute values.
fn append_meta(out: &mut String, namespace: &str, data: &BTreeMap<String, String>) {
    out.push_str("<?");
    out.push_str(namespace);
    for (key, value) in data {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&value.replace('"', "&quot;"));
        out.push('"');
    }
    out.push_str("?>");
}

fn append_char(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '\'' => out.push_str("&#39;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '/' => out.push_str("&#47;"),
        _ => out.push(ch),
    }
}
