use crate::navigation::NavCommand;
use crate::ui::layout::{NavBarLayout, NavTarget};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Action to take after translating a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Event has no meaning for the presenter.
    None,
    Quit,
    Navigate(NavCommand),
}

/// Map a key press onto a presenter action.
///
/// `total` is the deck length; digit jumps past the last slide are ignored
/// here so they never reach the navigator.
pub fn translate_key(key: KeyEvent, total: usize) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char(' ')
        | KeyCode::PageDown
        | KeyCode::Enter => InputAction::Navigate(NavCommand::Next),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp | KeyCode::Backspace => {
            InputAction::Navigate(NavCommand::Previous)
        }
        KeyCode::Home => jump(0, total),
        KeyCode::End => jump(total.saturating_sub(1), total),
        KeyCode::Char(ch @ '1'..='9') => {
            let digit = ch as usize - '0' as usize;
            jump(digit - 1, total)
        }
        _ => InputAction::None,
    }
}

/// Map a mouse event onto a presenter action using the bar's hit regions.
pub fn translate_mouse(mouse: MouseEvent, layout: &NavBarLayout, total: usize) -> InputAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }
    match layout.hit(mouse.column, mouse.row) {
        Some(NavTarget::Previous) => InputAction::Navigate(NavCommand::Previous),
        Some(NavTarget::Next) => InputAction::Navigate(NavCommand::Next),
        Some(NavTarget::Indicator(index)) => jump(index, total),
        None => InputAction::None,
    }
}

fn jump(index: usize, total: usize) -> InputAction {
    if index < total {
        InputAction::Navigate(NavCommand::JumpTo(index))
    } else {
        InputAction::None
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
