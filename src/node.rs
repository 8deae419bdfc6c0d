//! Cell data types.
//!
//! A [`Node`] is one column of one row: either a rune with its style, or a
//! reference to an external element (image thumbnail, timestamp) that the
//! caller's [`ElementRenderer`] expands at HTML render time.

use crate::style::Style;

/// Opaque key for an external element embedded in the screen.
///
/// The screen never interprets the key; it is handed back to the caller's
/// [`ElementRenderer`] when the line is rendered to HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub u64);

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeContent {
    Rune(char),
    Element(ElementHandle),
}

/// A single cell: content plus packed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub style: Style,
    pub content: NodeContent,
}

impl Node {
    /// The blank cell: a space with the plain style.
    pub const EMPTY: Node = Node {
        style: Style::PLAIN,
        content: NodeContent::Rune(' '),
    };

    pub fn rune(style: Style, ch: char) -> Node {
        Node {
            style,
            content: NodeContent::Rune(ch),
        }
    }

    pub fn element(style: Style, handle: ElementHandle) -> Node {
        let mut style = style;
        style.set_element(true);
        Node {
            style,
            content: NodeContent::Element(handle),
        }
    }

    /// The cell's rune, or `None` for element cells.
    pub fn as_rune(&self) -> Option<char> {
        match self.content {
            NodeContent::Rune(ch) => Some(ch),
            NodeContent::Element(_) => None,
        }
    }

    /// Reports whether this cell renders with the same appearance as
    /// `other` (element and hyperlink markers ignored).
    pub fn same_style(&self, other: &Node) -> bool {
        self.style.same_appearance(other.style)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::EMPTY
    }
}

/// Expands element handles into HTML fragments.
///
/// The returned fragment is trusted and emitted verbatim by the HTML
/// renderer; implementations are responsible for their own escaping.
pub trait ElementRenderer {
    fn render(&self, handle: ElementHandle) -> String;
}

impl<F> ElementRenderer for F
where
    F: Fn(ElementHandle) -> String,
{
    fn render(&self, handle: ElementHandle) -> String {
        self(handle)
    }
}
