//! VTE performer: translates parser callbacks into screen operations.
//!
//! The performer is constructed per `process` call and borrows the screen;
//! all state lives on the [`Screen`] itself, so sequences split across
//! chunk boundaries are handled by the parser's own state machine.

use std::collections::BTreeMap;

use tracing::trace;
use vte::{Params, Perform};

use crate::screen::Screen;

pub(crate) struct ScreenPerformer<'a> {
    pub screen: &'a mut Screen,
}

impl ScreenPerformer<'_> {
    /// OSC 8 hyperlink: `8 ; params ; uri`. A non-empty uri opens a link,
    /// an empty one closes it.
    fn osc_hyperlink(&mut self, params: &[&[u8]]) {
        let uri = params
            .get(2)
            .map(|raw| String::from_utf8_lossy(raw).into_owned())
            .unwrap_or_default();
        if uri.is_empty() {
            self.screen.set_link(None);
        } else {
            self.screen.set_link(Some(uri));
        }
    }

    /// Metadata OSC: `namespace ; k=v ; k=v …`, merged into the current
    /// line with set-if-absent semantics. Items without `=` are skipped.
    fn osc_metadata(&mut self, namespace: &str, params: &[&[u8]]) {
        let mut data = BTreeMap::new();
        for item in &params[1..] {
            let item = String::from_utf8_lossy(item);
            if let Some((key, value)) = item.split_once('=') {
                data.insert(key.to_string(), value.to_string());
            }
        }
        if !data.is_empty() {
            self.screen.set_line_metadata_nx(namespace, data);
        }
    }
}

impl Perform for ScreenPerformer<'_> {
    fn print(&mut self, c: char) {
        self.screen.append(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => self.screen.newline(),
            b'\r' => self.screen.carriage_return(),
            b'\x08' => self.screen.backspace(),
            // Tabs are not expanded; they occupy one cell like any rune.
            b'\t' => self.screen.append('\t'),
            _ => {}
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        match params {
            [] => {}
            [b"8", ..] => self.osc_hyperlink(params),
            [first, ..] => {
                let namespace = String::from_utf8_lossy(first).into_owned();
                if namespace == self.screen.metadata_namespace() {
                    self.osc_metadata(&namespace, params);
                } else {
                    trace!(osc = %namespace, "Unhandled OSC sequence");
                }
            }
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        // DEC private modes (ESC[?...h/l) and mouse tracking (ESC[<...)
        // have no effect on retained text.
        if intermediates.contains(&b'?') || intermediates.contains(&b'<') || intermediates.contains(&b'>') {
            return;
        }

        let params: Vec<String> = params
            .iter()
            .map(|group| group.first().copied().unwrap_or(0).to_string())
            .collect();
        self.screen.apply_csi(action, &params);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        match byte {
            // RI - reverse index, without scroll-down at the top.
            b'M' => self.screen.reverse_newline(),
            _ => trace!(
                byte = byte,
                intermediates = ?intermediates,
                "Unhandled ESC sequence"
            ),
        }
    }
}
