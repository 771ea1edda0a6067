use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::editor::{Command, Direction, Field};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) const fn handle_mouse(mouse: MouseEvent) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_ROWS)),
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_ROWS)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let field = model.session.document().cursor().field;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let command = match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                's' => Command::Save,
                'z' => Command::Undo,
                'r' => Command::Reload,
                'q' | 'c' => Command::Quit,
                other => {
                    let key = other.to_ascii_uppercase();
                    return Some(Message::Hint(format!("Ctrl+{key} is not bound")));
                }
            },
            KeyCode::Backspace if alt => Command::MergeWithPrevious,
            KeyCode::Char(c) if alt => {
                return Some(Message::Hint(format!("Alt+{c} is not bound")));
            }

            KeyCode::Up => Command::MoveCursor(Direction::Up),
            KeyCode::Down => Command::MoveCursor(Direction::Down),
            KeyCode::Left => Command::MoveCursor(Direction::Left),
            KeyCode::Right => Command::MoveCursor(Direction::Right),
            KeyCode::Tab | KeyCode::BackTab => Command::ToggleField,
            KeyCode::Home => Command::Home,
            KeyCode::End if field == Field::Content => Command::End,
            KeyCode::End => return None,
            KeyCode::PageUp => Command::MoveEntryUp,
            KeyCode::PageDown => Command::MoveEntryDown,
            KeyCode::Backspace => Command::DeleteBackward,
            KeyCode::Delete => Command::Undo,
            KeyCode::Enter if field == Field::Content => Command::Split,
            KeyCode::Enter => {
                return Some(Message::Hint(
                    "Enter splits entries from the content field".to_string(),
                ));
            }

            KeyCode::Char('`') => Command::Save,
            KeyCode::Char('~') => Command::Quit,
            KeyCode::Char('\\') if field == Field::Speaker => Command::ClearSpeaker,
            KeyCode::Char('\\') => return None,
            KeyCode::Char(c) => Command::InsertChar(c),

            KeyCode::Esc => return Some(Message::Hint("Esc is not bound".to_string())),
            _ => return None,
        };
        Some(Message::Edit(command))
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
