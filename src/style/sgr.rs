//! SGR parameter folding.
//!
//! Applies the parameter list of a `CSI … m` sequence to a [`Style`],
//! producing the style for subsequently written cells. Extended colors
//! (`38;5;n`, `38;2;r;g;b` and the `48` background forms) are tracked with
//! an explicit state machine rather than lookahead, so a truncated
//! sub-sequence degrades silently instead of consuming unrelated params.

use super::Style;

/// Parser state while walking an SGR parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SgrState {
    Normal,
    /// Saw 38; expecting a color-space selector.
    GotFg,
    /// Saw 38;5; expecting a palette index.
    GotFg8Bit,
    /// Saw 38;2; absorbing an RGB triple.
    GotFg24Bit,
    /// Saw 48; expecting a color-space selector.
    GotBg,
    /// Saw 48;5; expecting a palette index.
    GotBg8Bit,
    /// Saw 48;2; absorbing an RGB triple.
    GotBg24Bit,
}

impl Style {
    /// Folds an SGR parameter list into this style, returning the result.
    ///
    /// Parameters are decimal strings as split out of the CSI sequence. An
    /// empty list, or a sole `""`/`"0"`, resets every renderable attribute
    /// (the element and hyperlink markers survive). Parameters that do not
    /// parse as `u8` are skipped. A partially received extended-color
    /// sub-sequence is discarded at end of list.
    pub fn apply_sgr<S: AsRef<str>>(self, params: &[S]) -> Style {
        if params.is_empty()
            || (params.len() == 1 && matches!(params[0].as_ref(), "" | "0"))
        {
            return self.reset_appearance();
        }

        let mut style = self;
        let mut state = SgrState::Normal;
        let mut rgb = [0u8; 3];
        let mut rgb_index = 0;

        for param in params {
            let Ok(value) = param.as_ref().parse::<u8>() else {
                continue;
            };

            match state {
                SgrState::GotFg => {
                    state = match value {
                        5 => SgrState::GotFg8Bit,
                        2 => {
                            rgb_index = 0;
                            SgrState::GotFg24Bit
                        }
                        _ => SgrState::Normal,
                    };
                    continue;
                }
                SgrState::GotBg => {
                    state = match value {
                        5 => SgrState::GotBg8Bit,
                        2 => {
                            rgb_index = 0;
                            SgrState::GotBg24Bit
                        }
                        _ => SgrState::Normal,
                    };
                    continue;
                }
                SgrState::GotFg8Bit => {
                    style.set_fg_color_8bit(value);
                    state = SgrState::Normal;
                    continue;
                }
                SgrState::GotBg8Bit => {
                    style.set_bg_color_8bit(value);
                    state = SgrState::Normal;
                    continue;
                }
                SgrState::GotFg24Bit => {
                    rgb[rgb_index] = value;
                    if rgb_index == 2 {
                        style.set_fg_color_24bit(rgb);
                        state = SgrState::Normal;
                    } else {
                        rgb_index += 1;
                    }
                    continue;
                }
                SgrState::GotBg24Bit => {
                    rgb[rgb_index] = value;
                    if rgb_index == 2 {
                        style.set_bg_color_24bit(rgb);
                        state = SgrState::Normal;
                    } else {
                        rgb_index += 1;
                    }
                    continue;
                }
                SgrState::Normal => {}
            }

            match value {
                0 => style = style.reset_appearance(),
                1 => style.set_bold(true),
                2 => style.set_faint(true),
                3 => style.set_italic(true),
                4 => style.set_underline(true),
                5 | 6 => style.set_blink(true),
                9 => style.set_strike(true),
                21 | 22 => {
                    style.set_bold(false);
                    style.set_faint(false);
                }
                23 => style.set_italic(false),
                24 => style.set_underline(false),
                25 => style.set_blink(false),
                29 => style.set_strike(false),
                38 => state = SgrState::GotFg,
                39 => style.reset_fg_color(),
                48 => state = SgrState::GotBg,
                49 => style.reset_bg_color(),
                30..=37 | 90..=97 => style.set_fg_color_sgr(value),
                40..=47 | 100..=107 => style.set_bg_color_sgr(value),
                _ => {}
            }
        }

        style
    }
}
