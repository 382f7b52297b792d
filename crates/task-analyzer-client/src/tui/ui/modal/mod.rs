/*
[INPUT]:  Modal state, fields, key events, and bracketed paste text
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding field kinds or changing modal key bindings
*/

mod add_task;
mod confirm_clear;
mod load_json;

pub(in crate::tui) use add_task::AddTaskModal;
pub(in crate::tui) use confirm_clear::ConfirmClearModal;
pub(in crate::tui) use load_json::LoadJsonModal;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
    },
    /// Multi-line input; Enter inserts a newline instead of submitting
    TextArea {
        label: String,
        value: String,
    },
    Button {
        label: String,
        action: ModalAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

impl Modal {
    pub(super) fn new(title: &str, fields: Vec<Field>) -> Self {
        Self {
            title: title.to_string(),
            focus_index: 0,
            fields,
        }
    }

    /// Current text of the input at `index`, empty for buttons
    pub(super) fn text(&self, index: usize) -> &str {
        match self.fields.get(index) {
            Some(Field::TextInput { value, .. }) | Some(Field::TextArea { value, .. }) => {
                value.as_str()
            }
            _ => "",
        }
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus_index = (self.focus_index + 1) % self.fields.len();
        }
    }

    fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus_index = (self.focus_index + self.fields.len() - 1) % self.fields.len();
        }
    }
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in modal.fields.iter().enumerate() {
        let style = if index == modal.focus_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        match field {
            Field::TextInput { label, value } => {
                lines.push(Line::from(Span::styled(format!("{label}: {value}"), style)));
            }
            Field::TextArea { label, value } => {
                lines.push(Line::from(Span::styled(format!("{label}:"), style)));
                if value.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "  (type or paste here)",
                        Style::default().fg(Color::DarkGray),
                    )));
                } else {
                    lines.extend(value.split('\n').map(|text| Line::from(format!("  {text}"))));
                }
            }
            Field::Button { label, .. } => {
                lines.push(Line::from(Span::styled(format!("[{label}]"), style)));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            modal.focus_next();
            ModalAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            modal.focus_prev();
            ModalAction::None
        }
        KeyCode::Backspace => {
            match modal.fields.get_mut(modal.focus_index) {
                Some(Field::TextInput { value, .. }) | Some(Field::TextArea { value, .. }) => {
                    value.pop();
                }
                _ => {}
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            match modal.fields.get_mut(modal.focus_index) {
                Some(Field::TextInput { value, .. }) | Some(Field::TextArea { value, .. }) => {
                    value.push(ch);
                }
                _ => {}
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get_mut(modal.focus_index) {
            Some(Field::Button { action, .. }) => *action,
            Some(Field::TextArea { value, .. }) => {
                value.push('\n');
                ModalAction::None
            }
            Some(Field::TextInput { .. }) => {
                modal.focus_next();
                ModalAction::None
            }
            None => ModalAction::None,
        },
        _ => ModalAction::None,
    }
}

/// Insert pasted text into the focused input. Single-line inputs keep only
/// the first line.
pub(in crate::tui) fn handle_modal_paste(modal: &mut Modal, text: &str) {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    match modal.fields.get_mut(modal.focus_index) {
        Some(Field::TextArea { value, .. }) => value.push_str(&normalized),
        Some(Field::TextInput { value, .. }) => {
            value.push_str(normalized.lines().next().unwrap_or_default());
        }
        _ => {}
    }
}
