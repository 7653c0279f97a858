//! Key event handlers for each view

use crate::input_key::InputKey;
use crate::message::Message;
use crate::register_form::FormField;
use crate::state::{ActiveView, AppState};

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.active_view {
        ActiveView::Scan => handle_key_scan(key),
        ActiveView::Collect => handle_key_collect(state, key),
        ActiveView::Update => handle_key_update(key),
    }
}

/// `1`-`3` and `F1`-`F3`, in tab order
fn view_shortcut(n: u32) -> Option<Message> {
    let index = usize::try_from(n).ok()?.checked_sub(1)?;
    ActiveView::ALL.get(index).copied().map(Message::SwitchView)
}

/// Keys shared by the scan and update views
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('1'..='3') => key.digit().and_then(view_shortcut),
        InputKey::F(n) => view_shortcut(u32::from(n)),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),

        _ => None,
    }
}

fn handle_key_scan(key: InputKey) -> Option<Message> {
    match key {
        // "Start Scanning"
        InputKey::Char(' ' | 's') => Some(Message::StartScan),

        InputKey::Up | InputKey::Char('k') => Some(Message::PortCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PortCursorDown),
        InputKey::Enter | InputKey::Char('t') => Some(Message::ToggleSelectedPort),

        _ => handle_key_global(key),
    }
}

fn handle_key_update(key: InputKey) -> Option<Message> {
    match key {
        // "Scan Device QR"
        InputKey::Char(' ' | 's') => Some(Message::StartScan),

        InputKey::Up | InputKey::Char('k') => Some(Message::DeviceCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::DeviceCursorDown),
        InputKey::Enter => Some(Message::SelectDeviceAtCursor),

        _ => handle_key_global(key),
    }
}

/// Text entry: printable keys go to the focused field, so only function keys
/// and Esc navigate away.
fn handle_key_collect(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::SwitchView(ActiveView::Scan)),

        InputKey::F(n) => view_shortcut(u32::from(n)),

        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),

        InputKey::Enter => match state.register_form.focus {
            FormField::Submit => Some(Message::FormSubmit),
            _ => Some(Message::FormNextField),
        },

        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),

        _ => None,
    }
}
