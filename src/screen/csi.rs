//! CSI dispatch: maps a final byte and parameter list to screen operations.
//!
//! Handles the sequence families a build log actually exercises:
//! - A/B/C/D: cursor movement
//! - G: cursor horizontal absolute
//! - J: erase in display
//! - K: erase in line
//! - m: SGR
//!
//! Everything else is ignored and logged at trace level.

use tracing::trace;

use super::Screen;

impl Screen {
    /// Applies one CSI sequence. Unknown final bytes are ignored.
    pub fn apply_csi(&mut self, action: char, params: &[String]) {
        let first = params.first().map(String::as_str).unwrap_or("");

        match action {
            'A' => self.up(motion(first)),
            'B' => self.down(motion(first)),
            'C' => self.forward(motion(first)),
            'D' => self.backward(motion(first)),
            // The column parameter is ignored; the cursor always goes to
            // column 0.
            'G' => self.carriage_return(),
            'J' => self.erase_in_display(first),
            'K' => self.erase_in_line(first),
            'm' => self.set_color(params),
            _ => log_unhandled_csi(action, params),
        }
    }

    fn erase_in_display(&mut self, mode: &str) {
        match mode {
            // Erase from the cursor to the end of the screen: clear the
            // rest of the line, then drop every row below.
            "0" | "" => {
                self.clear(self.y, self.x, None);
                if self.lines.len() > self.y {
                    self.lines.truncate(self.y + 1);
                }
            }
            // Erase from the start of the screen through the cursor: the
            // rows up to and including the cursor row are dropped.
            "1" => {
                self.clear(self.y, 0, Some(self.x));
                if self.lines.len() > self.y {
                    self.lines.drain(..=self.y);
                }
                self.y = 0;
            }
            // 2 erases the display, 3 additionally the scrollback; with no
            // scrollback of our own the two are equivalent.
            "2" | "3" => {
                self.lines.clear();
                self.x = 0;
                self.y = 0;
            }
            _ => {}
        }
    }

    fn erase_in_line(&mut self, mode: &str) {
        match mode {
            "0" | "" => self.clear(self.y, self.x, None),
            "1" => self.clear(self.y, 0, Some(self.x)),
            "2" => self.clear(self.y, 0, None),
            _ => {}
        }
    }
}

/// Cursor-motion parameter: default 1, minimum 1.
fn motion(param: &str) -> usize {
    ansi_int(param).max(1) as usize
}

/// Lenient decimal parse for CSI parameters: empty means 1, garbage means
/// 0, out-of-range values clamp to the 8-bit signed limit.
fn ansi_int(param: &str) -> i64 {
    if param.is_empty() {
        return 1;
    }
    match param.parse::<i64>() {
        Ok(value) => value.clamp(i8::MIN as i64, i8::MAX as i64),
        Err(_) => 0,
    }
}

fn log_unhandled_csi(action: char, params: &[String]) {
    trace!(
        action = %action,
        params = ?params,
        "Unhandled CSI sequence"
    );
}
