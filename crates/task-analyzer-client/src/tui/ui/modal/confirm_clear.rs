/*
[INPUT]:  Clear-all confirmation keys
[OUTPUT]: Submit or cancel action
[POS]:    TUI UI modal - clear confirmation
[UPDATE]: When the clear confirmation wording changes
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct ConfirmClearModal {
    modal: Modal,
}

impl ConfirmClearModal {
    /// Focus starts on Cancel.
    pub(in crate::tui) fn new(task_count: usize) -> Self {
        let mut modal = Modal::new(
            &format!("Clear all {task_count} tasks?"),
            vec![
                Field::Button {
                    label: String::from("Clear all"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        );
        modal.focus_index = 1;
        Self { modal }
    }

    pub(in crate::tui) fn modal(&self) -> &Modal {
        &self.modal
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Char('y') => ModalAction::Submit,
            KeyCode::Char('n') => ModalAction::Cancel,
            other => handle_modal_key(&mut self.modal, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_cancel() {
        let mut modal = ConfirmClearModal::new(3);
        assert_eq!(modal.modal().title, "Clear all 3 tasks?");
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::Cancel);
        modal.handle_key(KeyCode::Tab);
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::Submit);
        assert_eq!(modal.handle_key(KeyCode::Char('y')), ModalAction::Submit);
    }
}
