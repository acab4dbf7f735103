//! Event system - keyboard and paste input for widget state
//!
//! Widgets consume a small backend-neutral event model. With the `tui`
//! feature, crossterm events convert into it directly.

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    F(u8),
    Ctrl(char),
    Alt(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Enter,
    Tab,
    Esc,
    Null,
}

/// Input events delivered to widget state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(Key),
    /// Focus gained
    FocusGained,
    /// Focus lost
    FocusLost,
    /// Paste event
    Paste(String),
}

/// Event handler trait for widget state
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Called when the widget gains focus
    fn on_focus(&mut self) {}

    /// Called when the widget loses focus
    fn on_blur(&mut self) {}
}

/// Offer an event to each handler in turn until one consumes it
pub fn propagate_event(handlers: &mut [&mut dyn EventHandler], event: &Event) -> bool {
    for handler in handlers.iter_mut() {
        if handler.handle_event(event) {
            return true;
        }
    }
    false
}

#[cfg(feature = "tui")]
mod crossterm_input {
    use super::{Event, Key};
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    impl From<KeyEvent> for Key {
        fn from(event: KeyEvent) -> Self {
            convert_key(event.code, event.modifiers)
        }
    }

    impl Event {
        /// Convert a crossterm event
        ///
        /// Key releases, mouse and resize events have no widget meaning and
        /// map to `None`.
        pub fn from_crossterm(event: CEvent) -> Option<Event> {
            match event {
                CEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Some(Event::Key(key.into()))
                }
                CEvent::FocusGained => Some(Event::FocusGained),
                CEvent::FocusLost => Some(Event::FocusLost),
                CEvent::Paste(data) => Some(Event::Paste(data)),
                _ => None,
            }
        }
    }

    /// Convert crossterm key code to our Key type
    fn convert_key(code: KeyCode, mods: KeyModifiers) -> Key {
        // Handle Ctrl modifier
        if mods.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = code {
                return Key::Ctrl(c);
            }
        }

        // Handle Alt modifier
        if mods.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = code {
                return Key::Alt(c);
            }
        }

        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Insert => Key::Insert,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Esc,
            _ => Key::Null,
        }
    }

}
