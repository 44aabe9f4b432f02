//! Maps terminal key and mouse events to game commands.

use crate::core::session::InputEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Game(InputEvent),
}

pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Command::Game(InputEvent::Flap)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Game(InputEvent::Start)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Game(InputEvent::Restart)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::Game(InputEvent::Flap)),
        _ => None,
    }
}

pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => None,
    }
}
