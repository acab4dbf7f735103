//! Masked text field state
//!
//! Provides the editing half of a masked input:
//! - Raw buffer with a caret measured in raw characters
//! - Insert, backspace and delete that re-run the mask
//! - Caret movement (left, right, home, end)
//! - Paste and wholesale replacement from formatted text
//!
//! The field never stores formatted text; it is derived from the raw buffer
//! every time, so the two can't drift apart.

use super::codec::{Masked, DEFAULT_MASK_CHAR};
use super::token::Mask;
use crate::event::{Event, EventHandler, Key};
use tracing::{debug, trace};

/// Editable value constrained by a mask
#[derive(Debug, Clone)]
pub struct MaskedInput {
    mask: Mask,
    /// Accepted characters, one per filled slot
    raw: Vec<char>,
    /// Caret position in raw characters
    cursor: usize,
    mask_char: char,
    show_placeholders: bool,
    focused: bool,
}

impl MaskedInput {
    /// Create an empty input for `mask`
    pub fn new(mask: Mask) -> Self {
        MaskedInput {
            mask,
            raw: Vec::new(),
            cursor: 0,
            mask_char: DEFAULT_MASK_CHAR,
            show_placeholders: false,
            focused: false,
        }
    }

    /// Set the character shown in empty slots
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Show every slot, empty ones as the mask character
    pub fn with_placeholders(mut self, show: bool) -> Self {
        self.show_placeholders = show;
        self
    }

    /// Get the mask
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Current raw value
    pub fn raw(&self) -> String {
        self.raw.iter().collect()
    }

    /// Current mask output
    pub fn masked(&self) -> Masked {
        self.mask
            .apply(&self.raw(), self.mask_char, self.show_placeholders)
    }

    /// Current display text
    pub fn formatted(&self) -> String {
        self.masked().formatted
    }

    /// Caret position in raw characters
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Caret position in display characters
    pub fn formatted_cursor(&self) -> usize {
        self.masked().formatted_cursor(self.cursor)
    }

    /// No characters entered
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Every slot has a character
    pub fn is_complete(&self) -> bool {
        self.raw.len() == self.mask.slot_count()
    }

    /// Replace the raw value, dropping anything the mask rejects
    pub fn set_raw(&mut self, raw: &str) {
        self.raw = self
            .mask
            .apply(raw, self.mask_char, false)
            .raw
            .chars()
            .collect();
        self.cursor = self.raw.len();
    }

    /// Replace the value from display text, e.g. a controlled value
    pub fn set_formatted(&mut self, formatted: &str) {
        let raw = self.mask.extract_raw(formatted);
        self.set_raw(&raw);
    }

    /// Remove all input
    pub fn clear(&mut self) {
        self.raw.clear();
        self.cursor = 0;
    }

    /// Re-run the mask over a candidate raw buffer and keep what it accepts
    ///
    /// Returns false if the candidate lost characters, i.e. an edit was
    /// rejected.
    fn commit(&mut self, candidate: Vec<char>, cursor: usize) -> bool {
        let text: String = candidate.iter().collect();
        let accepted: Vec<char> = self
            .mask
            .apply(&text, self.mask_char, false)
            .raw
            .chars()
            .collect();
        if accepted != candidate {
            debug!(input = %text, "mask rejected edit");
            return false;
        }
        self.raw = accepted;
        self.cursor = cursor.min(self.raw.len());
        trace!(raw = %text, cursor = self.cursor, "masked input updated");
        true
    }

    /// Insert a character at the caret. Returns false if the mask refuses it.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.raw.len() >= self.mask.slot_count() {
            debug!(%c, "mask is full");
            return false;
        }
        let mut candidate = self.raw.clone();
        candidate.insert(self.cursor, c);
        self.commit(candidate, self.cursor + 1)
    }

    /// Delete the character before the caret
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut candidate = self.raw.clone();
        candidate.remove(self.cursor - 1);
        self.commit(candidate, self.cursor - 1)
    }

    /// Delete the character at the caret
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.raw.len() {
            return false;
        }
        let mut candidate = self.raw.clone();
        candidate.remove(self.cursor);
        self.commit(candidate, self.cursor)
    }

    /// Insert accepted characters from pasted text, skipping the rest
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            if self.raw.len() >= self.mask.slot_count() {
                break;
            }
            self.insert_char(c);
        }
    }

    /// Move the caret one character left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the caret one character right
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.raw.len());
    }

    /// Move the caret before the first character
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the caret after the last character
    pub fn move_to_end(&mut self) {
        self.cursor = self.raw.len();
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) => {
                self.insert_char(*c);
                true
            }
            Key::Backspace => {
                self.backspace();
                true
            }
            Key::Delete => {
                self.delete();
                true
            }
            Key::Ctrl('u') => {
                self.clear();
                true
            }
            Key::Left => {
                self.move_left();
                true
            }
            Key::Right => {
                self.move_right();
                true
            }
            Key::Home | Key::Ctrl('a') => {
                self.move_to_start();
                true
            }
            Key::End | Key::Ctrl('e') => {
                self.move_to_end();
                true
            }
            _ => false,
        }
    }
}

impl EventHandler for MaskedInput {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                self.paste(text);
                true
            }
            _ => false,
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
