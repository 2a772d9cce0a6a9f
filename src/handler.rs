//! Translates crossterm input events into application actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::Action;

/// Handles a crossterm event and returns an optional Action.
///
/// The dashboard is display-only, so the only recognized input is a
/// request to quit.
pub fn handle_event(event: Event) -> Option<Action> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            return handle_key_press(key);
        }
    }
    None
}

fn handle_key_press(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(handle_event(press(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key)), None);
    }
}
