//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into [`InputKey`] so the key map in
//! `handler::keys` can be exercised by tests and the headless runner
//! without a terminal.

/// A key press the NTMapper key map understands.
///
/// Anything else is dropped at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including space (form input, shortcuts)
    Char(char),
    /// Character with Ctrl held (only Ctrl+C is bound)
    CharCtrl(char),

    /// Cursor movement in port and device lists, field focus in the form
    Up,
    Down,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// F1-F3 switch views
    F(u8),
}

impl InputKey {
    /// Plain digit key, used for the `1`/`2`/`3` view shortcuts
    pub fn digit(&self) -> Option<u32> {
        match self {
            InputKey::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}
