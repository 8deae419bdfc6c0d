//! Bit-packed SGR style word.
//!
//! A [`Style`] packs the complete graphic-rendition state of a cell into a
//! single `u64` so that adjacent-cell comparisons (the hot loop of both
//! renderers) are one XOR and one mask:
//!
//! ```text
//! 0........23 24.......47 48.49 50.51 52........57   58      59    60..63
//! [fg value ] [bg value ] [fgd] [bgd] [attr flags] element link  (unused)
//! ```
//!
//! Color values are 24-bit RGB, an 8-bit palette index, or a raw SGR code,
//! disambiguated by the two-bit depth field. Attribute flags are bold,
//! faint, italic, underline, strike, blink.

mod sgr;

const FG_VALUE: u64 = 0x0000_0000_00ff_ffff;
const BG_VALUE: u64 = 0x0000_ffff_ff00_0000;

const FG_DEPTH_SHIFT: u32 = 48;
const BG_DEPTH_SHIFT: u32 = 50;
const FG_DEPTH: u64 = 0b11 << FG_DEPTH_SHIFT;
const BG_DEPTH: u64 = 0b11 << BG_DEPTH_SHIFT;

const BOLD: u64 = 1 << 52;
const FAINT: u64 = 1 << 53;
const ITALIC: u64 = 1 << 54;
const UNDERLINE: u64 = 1 << 55;
const STRIKE: u64 = 1 << 56;
const BLINK: u64 = 1 << 57;
const ELEMENT: u64 = 1 << 58;
const HYPERLINK: u64 = 1 << 59;

/// Everything except the element bit, link bit, and unused bits.
/// Two cells with equal masked words render identically.
const COMPARISON_MASK: u64 = 0x03ff_ffff_ffff_ffff;

/// Color depth of a foreground or background field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// No color set; the value bits are zero.
    None,
    /// The value is a raw SGR code (30-37, 90-97 / 40-47, 100-107).
    Sgr,
    /// The value is an index into the 256-color palette.
    EightBit,
    /// The value is a packed 24-bit RGB triple.
    TwentyFourBit,
}

impl ColorDepth {
    fn from_bits(bits: u64) -> Self {
        match bits {
            1 => ColorDepth::Sgr,
            2 => ColorDepth::EightBit,
            3 => ColorDepth::TwentyFourBit,
            _ => ColorDepth::None,
        }
    }

    fn bits(self) -> u64 {
        match self {
            ColorDepth::None => 0,
            ColorDepth::Sgr => 1,
            ColorDepth::EightBit => 2,
            ColorDepth::TwentyFourBit => 3,
        }
    }
}

/// The graphic-rendition state of a single cell, packed into 64 bits.
///
/// `Default` is the plain style: no colors, no attributes, no markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style(u64);

impl Style {
    /// The all-zero style.
    pub const PLAIN: Style = Style(0);

    /// Reports whether no renderable style information is set. Element and
    /// hyperlink markers are not style information for this purpose.
    pub fn is_plain(self) -> bool {
        self.0 & COMPARISON_MASK == 0
    }

    /// Reports whether this style and `other` render identically.
    pub fn same_appearance(self, other: Style) -> bool {
        (self.0 ^ other.0) & COMPARISON_MASK == 0
    }

    pub fn bold(self) -> bool {
        self.0 & BOLD != 0
    }

    pub fn faint(self) -> bool {
        self.0 & FAINT != 0
    }

    pub fn italic(self) -> bool {
        self.0 & ITALIC != 0
    }

    pub fn underline(self) -> bool {
        self.0 & UNDERLINE != 0
    }

    pub fn strike(self) -> bool {
        self.0 & STRIKE != 0
    }

    pub fn blink(self) -> bool {
        self.0 & BLINK != 0
    }

    /// Reports whether the cell carries an external element instead of a rune.
    pub fn element(self) -> bool {
        self.0 & ELEMENT != 0
    }

    /// Reports whether the cell sits inside an OSC 8 hyperlink.
    pub fn hyperlink(self) -> bool {
        self.0 & HYPERLINK != 0
    }

    /// The foreground color value. Interpretation depends on
    /// [`fg_color_depth`](Self::fg_color_depth).
    pub fn fg_color(self) -> u32 {
        (self.0 & FG_VALUE) as u32
    }

    pub fn fg_color_depth(self) -> ColorDepth {
        ColorDepth::from_bits((self.0 & FG_DEPTH) >> FG_DEPTH_SHIFT)
    }

    /// The background color value. Interpretation depends on
    /// [`bg_color_depth`](Self::bg_color_depth).
    pub fn bg_color(self) -> u32 {
        ((self.0 & BG_VALUE) >> 24) as u32
    }

    pub fn bg_color_depth(self) -> ColorDepth {
        ColorDepth::from_bits((self.0 & BG_DEPTH) >> BG_DEPTH_SHIFT)
    }

    /// Sets or clears bold. Setting bold clears faint (SGR 1 and 2 are
    /// mutually exclusive).
    pub fn set_bold(&mut self, v: bool) {
        self.set_flag(BOLD, v);
        if v {
            self.set_flag(FAINT, false);
        }
    }

    /// Sets or clears faint. Setting faint clears bold.
    pub fn set_faint(&mut self, v: bool) {
        self.set_flag(FAINT, v);
        if v {
            self.set_flag(BOLD, false);
        }
    }

    pub fn set_italic(&mut self, v: bool) {
        self.set_flag(ITALIC, v);
    }

    pub fn set_underline(&mut self, v: bool) {
        self.set_flag(UNDERLINE, v);
    }

    pub fn set_strike(&mut self, v: bool) {
        self.set_flag(STRIKE, v);
    }

    pub fn set_blink(&mut self, v: bool) {
        self.set_flag(BLINK, v);
    }

    pub fn set_element(&mut self, v: bool) {
        self.set_flag(ELEMENT, v);
    }

    pub fn set_hyperlink(&mut self, v: bool) {
        self.set_flag(HYPERLINK, v);
    }

    /// Clears the foreground depth and value fields.
    pub fn reset_fg_color(&mut self) {
        self.0 &= !(FG_DEPTH | FG_VALUE);
    }

    /// Clears the background depth and value fields.
    pub fn reset_bg_color(&mut self) {
        self.0 &= !(BG_DEPTH | BG_VALUE);
    }

    /// Sets the foreground to a raw SGR code (30-37, 90-97).
    pub fn set_fg_color_sgr(&mut self, code: u8) {
        self.set_fg(ColorDepth::Sgr, code as u64);
    }

    /// Sets the foreground to a 256-color palette index.
    pub fn set_fg_color_8bit(&mut self, index: u8) {
        self.set_fg(ColorDepth::EightBit, index as u64);
    }

    /// Sets the foreground to a 24-bit RGB color.
    pub fn set_fg_color_24bit(&mut self, rgb: [u8; 3]) {
        let value = ((rgb[0] as u64) << 16) | ((rgb[1] as u64) << 8) | rgb[2] as u64;
        self.set_fg(ColorDepth::TwentyFourBit, value);
    }

    /// Sets the background to a raw SGR code (40-47, 100-107).
    pub fn set_bg_color_sgr(&mut self, code: u8) {
        self.set_bg(ColorDepth::Sgr, code as u64);
    }

    /// Sets the background to a 256-color palette index.
    pub fn set_bg_color_8bit(&mut self, index: u8) {
        self.set_bg(ColorDepth::EightBit, index as u64);
    }

    /// Sets the background to a 24-bit RGB color.
    pub fn set_bg_color_24bit(&mut self, rgb: [u8; 3]) {
        let value = ((rgb[0] as u64) << 16) | ((rgb[1] as u64) << 8) | rgb[2] as u64;
        self.set_bg(ColorDepth::TwentyFourBit, value);
    }

    fn set_flag(&mut self, flag: u64, v: bool) {
        if v {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    fn set_fg(&mut self, depth: ColorDepth, value: u64) {
        self.0 = (self.0 & !(FG_DEPTH | FG_VALUE)) | value | (depth.bits() << FG_DEPTH_SHIFT);
    }

    fn set_bg(&mut self, depth: ColorDepth, value: u64) {
        self.0 = (self.0 & !(BG_DEPTH | BG_VALUE)) | (value << 24) | (depth.bits() << BG_DEPTH_SHIFT);
    }

    /// Masks out all renderable style bits, keeping the element and
    /// hyperlink markers. This is the SGR 0 (full reset) operation.
    pub(crate) fn reset_appearance(self) -> Style {
        Style(self.0 & !COMPARISON_MASK)
    }

    /// CSS class names for this style, in foreground, background, attribute
    /// order. 24-bit colors produce no class.
    pub fn as_classes(self) -> Vec<String> {
        let mut classes = Vec::new();

        match self.fg_color_depth() {
            ColorDepth::Sgr => {
                let code = self.fg_color();
                if (30..38).contains(&code) {
                    classes.push(format!("term-fg{code}"));
                }
                if (90..98).contains(&code) {
                    classes.push(format!("term-fgi{code}"));
                }
            }
            ColorDepth::EightBit => classes.push(format!("term-fgx{}", self.fg_color())),
            // No class for 24-bit colors; consumers style those inline.
            ColorDepth::TwentyFourBit | ColorDepth::None => {}
        }

        match self.bg_color_depth() {
            ColorDepth::Sgr => {
                let code = self.bg_color();
                if (40..48).contains(&code) {
                    classes.push(format!("term-bg{code}"));
                }
                if (100..108).contains(&code) {
                    classes.push(format!("term-bgi{code}"));
                }
            }
            ColorDepth::EightBit => classes.push(format!("term-bgx{}", self.bg_color())),
            ColorDepth::TwentyFourBit | ColorDepth::None => {}
        }

        if self.bold() {
            classes.push("term-fg1".to_string());
        }
        if self.faint() {
            classes.push("term-fg2".to_string());
        }
        if self.italic() {
            classes.push("term-fg3".to_string());
        }
        if self.underline() {
            classes.push("term-fg4".to_string());
        }
        if self.blink() {
            classes.push("term-fg5".to_string());
        }
        if self.strike() {
            classes.push("term-fg9".to_string());
        }

        classes
    }

    /// The SGR parameters that move a renderer currently at `from` to this
    /// style. Empty when the two styles render identically. A transition to
    /// the all-zero style is the single empty parameter, which renders as
    /// `ESC [ m` (full reset). Otherwise each differing dimension emits its
    /// minimal parameters, in foreground, background, bold/faint, italic,
    /// underline, blink, strike order.
    pub fn ansi_transition(self, from: Style) -> Vec<String> {
        let diff = Style((self.0 ^ from.0) & COMPARISON_MASK);
        if diff.0 == 0 {
            return Vec::new();
        }
        if self.0 == 0 {
            return vec![String::new()];
        }

        let mut params = Vec::new();

        if diff.fg_color_depth() != ColorDepth::None || diff.fg_color() != 0 {
            match self.fg_color_depth() {
                ColorDepth::None => params.push("39".to_string()),
                ColorDepth::Sgr => params.push(format_param(self.fg_color() as u64)),
                ColorDepth::EightBit => {
                    params.push("38".to_string());
                    params.push("5".to_string());
                    params.push(format_param(self.fg_color() as u64));
                }
                ColorDepth::TwentyFourBit => {
                    let rgb = self.fg_color();
                    params.push("38".to_string());
                    params.push("2".to_string());
                    params.push(format_param((rgb >> 16) as u64 & 0xff));
                    params.push(format_param((rgb >> 8) as u64 & 0xff));
                    params.push(format_param(rgb as u64 & 0xff));
                }
            }
        }

        if diff.bg_color_depth() != ColorDepth::None || diff.bg_color() != 0 {
            match self.bg_color_depth() {
                ColorDepth::None => params.push("49".to_string()),
                ColorDepth::Sgr => params.push(format_param(self.bg_color() as u64)),
                ColorDepth::EightBit => {
                    params.push("48".to_string());
                    params.push("5".to_string());
                    params.push(format_param(self.bg_color() as u64));
                }
                ColorDepth::TwentyFourBit => {
                    let rgb = self.bg_color();
                    params.push("48".to_string());
                    params.push("2".to_string());
                    params.push(format_param((rgb >> 16) as u64 & 0xff));
                    params.push(format_param((rgb >> 8) as u64 & 0xff));
                    params.push(format_param(rgb as u64 & 0xff));
                }
            }
        }

        if diff.bold() || diff.faint() {
            if self.bold() {
                params.push("1".to_string());
            }
            if self.faint() {
                params.push("2".to_string());
            }
            if !self.bold() && !self.faint() {
                params.push("22".to_string());
            }
        }
        if diff.italic() {
            params.push(if self.italic() { "3" } else { "23" }.to_string());
        }
        if diff.underline() {
            params.push(if self.underline() { "4" } else { "24" }.to_string());
        }
        if diff.blink() {
            params.push(if self.blink() { "5" } else { "25" }.to_string());
        }
        if diff.strike() {
            params.push(if self.strike() { "9" } else { "29" }.to_string());
        }

        params
    }
}

// Zero formats as the empty parameter, which terminals read back as zero.
fn format_param(v: u64) -> String {
    if v == 0 {
        String::new()
    } else {
        v.to_string()
    }
}
