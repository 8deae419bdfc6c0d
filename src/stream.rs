//! The stream driver: feeds byte chunks through the parser into a screen.

use std::io;

use vte::Parser;

use crate::error::ScreenError;
use crate::node::ElementHandle;
use crate::performer::ScreenPerformer;
use crate::screen::{Screen, ScreenConfig};

/// Couples a [`Screen`] with the escape-sequence parser that drives it.
///
/// Byte chunks may split escape sequences and UTF-8 runes anywhere; the
/// parser carries that state between calls. Processing never fails — every
/// chunk is consumed in full.
pub struct TerminalStream {
    screen: Screen,
    parser: Parser,
}

impl TerminalStream {
    /// A stream over an unbounded screen.
    pub fn new() -> TerminalStream {
        TerminalStream {
            screen: Screen::new(),
            parser: Parser::new(),
        }
    }

    /// A stream over a screen built from `config`.
    pub fn with_config(config: ScreenConfig) -> Result<TerminalStream, ScreenError> {
        Ok(TerminalStream {
            screen: Screen::with_config(config)?,
            parser: Parser::new(),
        })
    }

    /// Parses a chunk of output and applies it to the screen.
    pub fn process(&mut self, bytes: &[u8]) {
        let mut performer = ScreenPerformer {
            screen: &mut self.screen,
        };
        self.parser.advance(&mut performer, bytes);
    }

    /// Inserts an external element at the cursor. Elements arrive out of
    /// band (they have no byte-stream encoding); interleave calls with
    /// [`process`](Self::process) in stream order.
    pub fn append_element(&mut self, handle: ElementHandle) {
        self.screen.append_element(handle);
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Consumes the stream, yielding the screen.
    pub fn into_screen(self) -> Screen {
        self.screen
    }
}

impl Default for TerminalStream {
    fn default() -> Self {
        TerminalStream::new()
    }
}

impl io::Write for TerminalStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
