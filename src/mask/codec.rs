//! Raw <-> formatted conversion

use super::token::{Mask, MaskToken};

/// Placeholder marker used when none is configured
pub const DEFAULT_MASK_CHAR: char = '_';

/// Result of applying a mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masked {
    /// Mask-shaped display text
    pub formatted: String,
    /// Input characters that landed in placeholder slots
    pub raw: String,
    /// Char index in `formatted` of each filled slot, in raw order
    pub slot_positions: Vec<usize>,
}

impl Masked {
    /// Caret position in `formatted` after `raw_cursor` raw characters
    pub fn formatted_cursor(&self, raw_cursor: usize) -> usize {
        match raw_cursor {
            0 => self.slot_positions.first().copied().unwrap_or(0),
            n => self
                .slot_positions
                .get(n - 1)
                .map(|p| p + 1)
                .unwrap_or_else(|| self.formatted.chars().count()),
        }
    }
}

/// Format `raw` against `tokens`
///
/// Literals are always emitted. Each slot takes the next raw character it
/// accepts, skipping rejected ones. Once the input runs out, either every
/// remaining slot shows `mask_char` (`show_placeholders`), or output stops at
/// the last filled slot so no dangling literals appear.
pub fn apply(raw: &str, tokens: &[MaskToken], mask_char: char, show_placeholders: bool) -> Masked {
    let mut input = raw.chars();
    let mut out = Masked::default();
    // (byte length, char count) of `formatted` at the last filled slot
    let mut filled_end = (0, 0);
    let mut len = 0;

    for token in tokens {
        match token {
            MaskToken::Literal(c) => {
                out.formatted.push(*c);
                len += 1;
            }
            MaskToken::Slot(placeholder) => match input.find(|c| placeholder.accepts(*c)) {
                Some(c) => {
                    out.formatted.push(c);
                    out.raw.push(c);
                    out.slot_positions.push(len);
                    len += 1;
                    filled_end = (out.formatted.len(), len);
                }
                None if show_placeholders => {
                    out.formatted.push(mask_char);
                    len += 1;
                }
                None => {
                    out.formatted.truncate(filled_end.0);
                    break;
                }
            },
        }
    }

    out
}

/// Recover the raw value from formatted text
///
/// Tokens and characters are walked in lockstep. A slot contributes its
/// aligned character only if that character passes the slot's test; literal
/// positions never contribute. Stops at the end of either sequence.
pub fn extract_raw(formatted: &str, tokens: &[MaskToken]) -> String {
    tokens
        .iter()
        .zip(formatted.chars())
        .filter_map(|(token, c)| match token {
            MaskToken::Slot(placeholder) if placeholder.accepts(c) => Some(c),
            _ => None,
        })
        .collect()
}

impl Mask {
    /// Format `raw` through this mask, see [`apply`]
    pub fn apply(&self, raw: &str, mask_char: char, show_placeholders: bool) -> Masked {
        apply(raw, self.tokens(), mask_char, show_placeholders)
    }

    /// Recover accepted input characters from display text
    pub fn extract_raw(&self, formatted: &str) -> String {
        extract_raw(formatted, self.tokens())
    }

    /// Whether `raw` fills every slot
    pub fn is_complete(&self, raw: &str) -> bool {
        self.apply(raw, DEFAULT_MASK_CHAR, false).raw.chars().count() == self.slot_count()
    }
}
