//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    // Ctrl+C always quits, raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => Action::Pick,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('a') => Action::ToggleAvoidRepeat,
        KeyCode::Char('h') => Action::ToggleHistory,

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = test_app(&["A", "B"]);

        assert_eq!(handle_key_event(&app, press(KeyCode::Char(' '))), Action::Pick);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::Pick);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('p'))), Action::Pick);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('r'))), Action::Reset);
        assert_eq!(
            handle_key_event(&app, press(KeyCode::Char('a'))),
            Action::ToggleAvoidRepeat
        );
        assert_eq!(
            handle_key_event(&app, press(KeyCode::Char('h'))),
            Action::ToggleHistory
        );
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('?'))), Action::OpenHelp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_help_mode_only_closes() {
        let mut app = test_app(&["A"]);
        app.input_mode = InputMode::Help;

        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::CloseHelp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::CloseHelp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char(' '))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = test_app(&["A"]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
        app.input_mode = InputMode::Help;
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
