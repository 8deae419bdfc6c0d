//! logscreen
//!
//! Converts terminal output — ANSI/VT escape sequences as produced by
//! interactive shells, CI build logs, and curses-style programs — into a
//! structured in-memory screen, and renders that screen as styled HTML
//! fragments or as a canonicalized ANSI stream.
//!
//! The screen is cursor-addressable, so clears, moves, and rewrites behave
//! as they would in a real terminal, while the output stays deterministic,
//! per-line, and CSS-friendly. An optional bounded window streams finished
//! lines to a scroll-out callback, which keeps memory flat on
//! multi-gigabyte logs.
//!
//! ```
//! use logscreen::TerminalStream;
//!
//! let mut stream = TerminalStream::new();
//! stream.process(b"\x1b[31mhello\x1b[0m");
//! assert_eq!(
//!     stream.screen().as_html(),
//!     "<span class=\"term-fg31\">hello</span>"
//! );
//! ```

mod error;
mod line;
mod node;
mod performer;
mod render;
mod screen;
mod stream;
mod style;

pub use error::ScreenError;
pub use line::{LineMetadata, ScreenLine};
pub use node::{ElementHandle, ElementRenderer, Node, NodeContent};
pub use screen::{Screen, ScreenConfig, ScrollOutFormat};
pub use stream::TerminalStream;
pub use style::{ColorDepth, Style};
