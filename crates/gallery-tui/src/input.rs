use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousSlide,
    NextSlide,
    FirstSlide,
    LastSlide,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PreviousSlide,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PreviousSlide,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextSlide,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextSlide,

        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::FirstSlide,
        (KeyCode::Home, _) => Action::FirstSlide,
        (KeyCode::Char('G'), _) => Action::LastSlide,
        (KeyCode::End, _) => Action::LastSlide,

        _ => Action::None,
    }
}
