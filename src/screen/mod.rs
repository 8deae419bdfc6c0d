//! The screen model: a cursor-addressable grid of styled cells.
//!
//! A [`Screen`] grows lazily as the cursor moves: rows materialize when
//! written to and columns pad out to the write position. With a bounded
//! window configured, lines that overflow the bottom are rendered and
//! handed to the scroll-out callback in age order, so a consumer can stream
//! finished lines while the window keeps tracking cursor rewrites.

mod csi;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::line::ScreenLine;
use crate::node::{ElementHandle, ElementRenderer, Node};
use crate::render;
use crate::style::Style;

/// How flushed lines are rendered before delivery to the scroll-out
/// callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollOutFormat {
    /// Canonical ANSI with minimal SGR transitions.
    #[default]
    Ansi,
    /// Per-line HTML; a line that renders empty becomes `&nbsp;` so blank
    /// lines stay visible in line-oriented consumers.
    Html,
}

/// Screen construction parameters.
///
/// `max_cols`/`max_rows` of 0 mean unbounded; negative values are rejected
/// at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub max_cols: i32,
    pub max_rows: i32,
    pub scroll_out_format: ScrollOutFormat,
    /// OSC namespace accepted for line metadata.
    pub metadata_namespace: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            max_cols: 0,
            max_rows: 0,
            scroll_out_format: ScrollOutFormat::Ansi,
            metadata_namespace: "bk".to_string(),
        }
    }
}

/// A terminal screen: retained lines, cursor position, and current style.
pub struct Screen {
    x: usize,
    y: usize,
    lines: Vec<ScreenLine>,
    style: Style,
    /// Target of the currently open OSC 8 hyperlink, if any.
    link: Option<String>,
    max_cols: usize,
    max_rows: usize,
    scroll_out_format: ScrollOutFormat,
    scroll_out: Option<Box<dyn FnMut(String)>>,
    metadata_namespace: String,
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("lines", &self.lines)
            .field("style", &self.style)
            .field("link", &self.link)
            .field("max_cols", &self.max_cols)
            .field("max_rows", &self.max_rows)
            .field("scroll_out_format", &self.scroll_out_format)
            .field("scroll_out", &self.scroll_out.as_ref().map(|_| "<fn>"))
            .field("metadata_namespace", &self.metadata_namespace)
            .finish()
    }
}

impl Screen {
    /// An unbounded screen with default configuration.
    pub fn new() -> Screen {
        Screen::build(ScreenConfig::default())
    }

    /// Builds a screen from `config`, validating the window bounds.
    pub fn with_config(config: ScreenConfig) -> Result<Screen, ScreenError> {
        if config.max_cols < 0 {
            return Err(ScreenError::InvalidConfiguration {
                reason: format!("max_cols must be non-negative, got {}", config.max_cols),
            });
        }
        if config.max_rows < 0 {
            return Err(ScreenError::InvalidConfiguration {
                reason: format!("max_rows must be non-negative, got {}", config.max_rows),
            });
        }
        Ok(Screen::build(config))
    }

    fn build(config: ScreenConfig) -> Screen {
        Screen {
            x: 0,
            y: 0,
            lines: Vec::new(),
            style: Style::default(),
            link: None,
            max_cols: config.max_cols as usize,
            max_rows: config.max_rows as usize,
            scroll_out_format: config.scroll_out_format,
            scroll_out: None,
            metadata_namespace: config.metadata_namespace,
        }
    }

    /// Registers the callback invoked with each line that scrolls out of a
    /// bounded window. Lines arrive oldest first, rendered per the
    /// configured [`ScrollOutFormat`], with a trailing `\n` iff the line
    /// ended with an explicit newline.
    pub fn on_scroll_out<F>(&mut self, callback: F)
    where
        F: FnMut(String) + 'static,
    {
        self.scroll_out = Some(Box::new(callback));
    }

    /// Cursor position as `(x, y)`, 0-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The retained lines, oldest first.
    pub fn lines(&self) -> &[ScreenLine] {
        &self.lines
    }

    /// The style applied to subsequently written cells.
    pub fn style(&self) -> Style {
        self.style
    }

    /// The target of the currently open OSC 8 hyperlink.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub(crate) fn set_link(&mut self, link: Option<String>) {
        self.style.set_hyperlink(link.is_some());
        self.link = link;
    }

    pub(crate) fn metadata_namespace(&self) -> &str {
        &self.metadata_namespace
    }

    /// Places a rune at the cursor with the current style, materializing
    /// rows and columns as needed. The cursor does not move.
    pub fn write(&mut self, ch: char) {
        let x = self.x;
        let node = Node::rune(self.style, ch);
        self.current_line().put(x, node);
    }

    /// Writes a rune and advances the cursor, soft-wrapping first when a
    /// column bound is configured and reached.
    pub fn append(&mut self, ch: char) {
        if self.max_cols > 0 && self.x >= self.max_cols {
            self.soft_wrap();
        }
        self.write(ch);
        self.x += 1;
    }

    /// Places an element cell at the cursor and advances.
    pub fn append_element(&mut self, handle: ElementHandle) {
        let x = self.x;
        let node = Node::element(self.style, handle);
        self.current_line().put(x, node);
        self.x += 1;
    }

    /// Explicit newline: flags the current line, moves to the start of the
    /// next row, and enforces the window bound.
    pub fn newline(&mut self) {
        self.current_line().set_newline(true);
        self.x = 0;
        self.y += 1;
        self.current_line();
    }

    /// Moves the cursor up one row without scrolling; no-op at the top.
    pub fn reverse_newline(&mut self) {
        if self.y > 0 {
            self.y -= 1;
        }
    }

    pub fn carriage_return(&mut self) {
        self.x = 0;
    }

    pub fn backspace(&mut self) {
        if self.x > 0 {
            self.x -= 1;
        }
    }

    pub fn up(&mut self, n: usize) {
        self.y = self.y.saturating_sub(n);
    }

    /// Moves down without clamping; rows materialize on the next write.
    pub fn down(&mut self, n: usize) {
        self.y += n;
    }

    /// Moves right without clamping; columns materialize on the next write.
    pub fn forward(&mut self, n: usize) {
        self.x += n;
    }

    pub fn backward(&mut self, n: usize) {
        self.x = self.x.saturating_sub(n);
    }

    /// Blanks cells of row `y` in `x_start..=x_end` (`None` = through the
    /// last existing column). Missing rows are a no-op.
    pub fn clear(&mut self, y: usize, x_start: usize, x_end: Option<usize>) {
        if let Some(line) = self.lines.get_mut(y) {
            line.clear_range(x_start, x_end);
        }
    }

    /// Folds an SGR parameter list into the current style.
    pub fn set_color<S: AsRef<str>>(&mut self, params: &[S]) {
        self.style = self.style.apply_sgr(params);
    }

    /// Merges metadata into the current line, keeping existing keys.
    pub fn set_line_metadata_nx(&mut self, namespace: &str, data: BTreeMap<String, String>) {
        self.current_line().set_metadata_nx(namespace, data);
    }

    /// Renders the retained lines as HTML; element cells render as empty.
    pub fn as_html(&self) -> String {
        render::as_html(&self.lines, &render::NoElements)
    }

    /// Renders the retained lines as HTML, expanding element cells through
    /// `elements`.
    pub fn as_html_with_elements(&self, elements: &dyn ElementRenderer) -> String {
        render::as_html(&self.lines, elements)
    }

    /// Renders the retained lines as canonical ANSI.
    pub fn as_ansi(&self) -> String {
        render::as_ansi(&self.lines)
    }

    /// Renders the retained lines with all styling stripped.
    pub fn as_plain_text(&self) -> String {
        render::as_plain_text(&self.lines)
    }

    /// The current row, materializing rows up to the cursor and enforcing
    /// the window bound. Blank rows materialize with zero columns; columns
    /// pad only on write.
    fn current_line(&mut self) -> &mut ScreenLine {
        if self.lines.len() <= self.y {
            self.lines.resize_with(self.y + 1, ScreenLine::new);
            self.trim_window();
        }
        let y = self.y;
        &mut self.lines[y]
    }

    /// Breaks the current line without flagging a newline.
    fn soft_wrap(&mut self) {
        self.x = 0;
        self.y += 1;
        self.current_line();
    }

    /// Flushes rows from the top until the window fits. The row holding the
    /// cursor is never flushed.
    fn trim_window(&mut self) {
        if self.max_rows == 0 {
            return;
        }
        while self.lines.len() > self.max_rows && self.y > 0 {
            let line = self.lines.remove(0);
            self.y -= 1;
            if let Some(callback) = self.scroll_out.as_mut() {
                callback(render::scrolled_out_line(&line, self.scroll_out_format));
            }
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new()
    }
}

impl fmt::Display for Screen {
    /// The plain-text view of the screen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_plain_text())
    }
}
