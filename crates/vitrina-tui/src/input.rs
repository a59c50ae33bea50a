use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextAnchor,
    PrevAnchor,
    Activate, // Enter: click the selected anchor
    EditUsername,
    EditPassword,
    Submit,
    DismissNotice,
    Help,
    ExitMode,
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Handle insert mode (field editing)
    if app.is_input_mode() {
        return handle_input_mode(key);
    }

    // The login notice holds input until dismissed
    if app.modal_open() {
        return handle_notice_mode(key);
    }

    // Any key exits help
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    // Normal mode keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Anchor navigation
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextAnchor,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevAnchor,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Activate,

        // Login form
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EditUsername,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::EditPassword,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Submit,

        // Help overlay
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::Help,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Handle key events in insert mode (field editing)
fn handle_input_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Handle key events while the login notice is up
fn handle_notice_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
            Action::DismissNotice
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormField;
    use vitrina_core::page::markup::parse_page;
    use vitrina_core::{AppConfig, PageEngine};

    fn test_app() -> App {
        let page = parse_page(
            r##"<body>
  <a id="nav-acceso" href="#acceso">Acceso</a>
  <section id="acceso" top="900" height="400">
    <form class="login-form" top="950" height="260">
      <input id="username" value=""/>
      <input id="password" value=""/>
    </form>
  </section>
</body>"##,
        )
        .unwrap();
        let engine = PageEngine::new(page, AppConfig::default()).unwrap();
        App::new(engine)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = test_app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('k')), &app),
            Action::ScrollUp
        );
        assert_eq!(
            handle_key_event(key_with(KeyCode::Char('d'), KeyModifiers::CONTROL), &app),
            Action::ScrollHalfPageDown
        );
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::NextAnchor);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Activate);
        assert_eq!(
            handle_key_event(key_with(KeyCode::Char('G'), KeyModifiers::SHIFT), &app),
            Action::JumpToBottom
        );
        assert_eq!(handle_key_event(key(KeyCode::F(5)), &app), Action::None);
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = test_app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_help_mode_swallows_any_key() {
        let mut app = test_app();
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::ExitMode
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::ExitMode);
    }

    #[test]
    fn test_notice_holds_input_until_dismissed() {
        let mut app = test_app();
        app.submit();
        assert!(app.modal_open());

        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::None
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &app),
            Action::DismissNotice
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app),
            Action::DismissNotice
        );
    }

    #[test]
    fn test_insert_mode_routes_characters() {
        let mut app = test_app();
        app.start_editing(FormField::Username);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('a')), &app),
            Action::InputChar('a')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &app),
            Action::Backspace
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Confirm);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Cancel);
    }
}
