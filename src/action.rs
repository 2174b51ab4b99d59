use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Delete,
  Insert(char),
  Language,
  Mode,
  Quit,
  Reset,
  Start,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
        KeyCode::Backspace => Some(Self::Delete),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
          Some(Self::Insert(c))
        }
        KeyCode::Enter => Some(Self::Start),
        KeyCode::Esc => Some(Self::Reset),
        KeyCode::F(2) => Some(Self::Language),
        KeyCode::F(3) => Some(Self::Mode),
        _ => None,
      },
      _ => None,
    }
  }
}
