use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::EditEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into a lifegrid event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            convert_key(key_event)
        }
        CrossTermEvent::Resize(cols, rows) => {
            Some(Event::AppEvent(AppEvent::Resize { cols, rows }))
        }
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Event::AppEvent(AppEvent::Exit),

        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Event::EngineEvent(EngineEvent::TogglePause),
        KeyEvent {
            code: KeyCode::Char('n'),
            ..
        } => Event::EngineEvent(EngineEvent::Step),
        KeyEvent {
            code: KeyCode::Char('r'),
            ..
        } => Event::EngineEvent(EngineEvent::Randomize),
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => Event::EngineEvent(EngineEvent::Clear),

        KeyEvent {
            code: KeyCode::Char('e'),
            ..
        } => Event::EditEvent(EditEvent::Begin),
        KeyEvent {
            code: KeyCode::Char('t') | KeyCode::Enter,
            ..
        } => Event::EditEvent(EditEvent::Toggle),
        KeyEvent {
            code: KeyCode::Char('s'),
            ..
        } => Event::EditEvent(EditEvent::Commit),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => Event::EditEvent(EditEvent::Rollback),

        // movements
        KeyEvent {
            code: KeyCode::Char('h') | KeyCode::Left,
            ..
        } => Event::EditEvent(EditEvent::Move(-1, 0)),
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => Event::EditEvent(EditEvent::Move(0, 1)),
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => Event::EditEvent(EditEvent::Move(0, -1)),
        KeyEvent {
            code: KeyCode::Char('l') | KeyCode::Right,
            ..
        } => Event::EditEvent(EditEvent::Move(1, 0)),

        _ => return None,
    };

    Some(event)
}
