use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use slidedeck::navigation::NavCommand;
use slidedeck::ui::input::{translate_key, translate_mouse, InputAction};
use slidedeck::ui::layout::{footer_rect, NavBarLayout};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn nav_bar(total: usize, current: usize) -> NavBarLayout {
    NavBarLayout::compute(footer_rect(Rect::new(0, 0, 80, 24)), total, current)
}

#[test]
fn forward_keys_map_to_next() {
    for code in [
        KeyCode::Right,
        KeyCode::Char('l'),
        KeyCode::Char(' '),
        KeyCode::PageDown,
        KeyCode::Enter,
    ] {
        assert_eq!(
            translate_key(key(code), 11),
            InputAction::Navigate(NavCommand::Next),
            "{code:?}"
        );
    }
}

#[test]
fn backward_keys_map_to_previous() {
    for code in [
        KeyCode::Left,
        KeyCode::Char('h'),
        KeyCode::PageUp,
        KeyCode::Backspace,
    ] {
        assert_eq!(
            translate_key(key(code), 11),
            InputAction::Navigate(NavCommand::Previous),
            "{code:?}"
        );
    }
}

#[test]
fn home_end_and_digits_jump() {
    assert_eq!(
        translate_key(key(KeyCode::Home), 11),
        InputAction::Navigate(NavCommand::JumpTo(0))
    );
    assert_eq!(
        translate_key(key(KeyCode::End), 11),
        InputAction::Navigate(NavCommand::JumpTo(10))
    );
    assert_eq!(
        translate_key(key(KeyCode::Char('1')), 11),
        InputAction::Navigate(NavCommand::JumpTo(0))
    );
    assert_eq!(
        translate_key(key(KeyCode::Char('9')), 11),
        InputAction::Navigate(NavCommand::JumpTo(8))
    );
    assert_eq!(translate_key(key(KeyCode::Char('0')), 11), InputAction::None);
}

#[test]
fn quit_keys() {
    assert_eq!(translate_key(key(KeyCode::Char('q')), 3), InputAction::Quit);
    assert_eq!(translate_key(key(KeyCode::Esc), 3), InputAction::Quit);
}

#[test]
fn key_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(translate_key(release, 3), InputAction::None);
}

#[test]
fn clicking_buttons_navigates() {
    let layout = nav_bar(11, 0);
    assert_eq!(
        translate_mouse(click(layout.prev.x, layout.prev.y), &layout, 11),
        InputAction::Navigate(NavCommand::Previous)
    );
    assert_eq!(
        translate_mouse(click(layout.next.x + 1, layout.next.y), &layout, 11),
        InputAction::Navigate(NavCommand::Next)
    );
}

#[test]
fn clicking_indicator_jumps_to_its_slide() {
    let layout = nav_bar(11, 0);
    assert_eq!(layout.indicators.len(), 11);
    let target = layout.indicators[6];
    assert_eq!(
        translate_mouse(click(target.x, target.y), &layout, 11),
        InputAction::Navigate(NavCommand::JumpTo(6))
    );
}

#[test]
fn other_mouse_events_are_ignored() {
    let layout = nav_bar(11, 0);
    let mut right_click = click(layout.next.x, layout.next.y);
    right_click.kind = MouseEventKind::Down(MouseButton::Right);
    assert_eq!(translate_mouse(right_click, &layout, 11), InputAction::None);
    assert_eq!(translate_mouse(click(40, 5), &layout, 11), InputAction::None);
}
