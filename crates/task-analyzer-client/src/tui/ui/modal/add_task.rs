/*
[INPUT]:  Single-task form input
[OUTPUT]: TaskForm for session validation
[POS]:    TUI UI modal - add task
[UPDATE]: When task form fields change
*/

use crossterm::event::KeyCode;

use task_analyzer_client::validate::TaskForm;

use super::{Field, Modal, ModalAction, handle_modal_key, handle_modal_paste};

const TITLE: usize = 0;
const DUE_DATE: usize = 1;
const ESTIMATED_HOURS: usize = 2;
const IMPORTANCE: usize = 3;

pub(in crate::tui) struct AddTaskModal {
    modal: Modal,
}

impl AddTaskModal {
    pub(in crate::tui) fn new() -> Self {
        let input = |label: &str| Field::TextInput {
            label: label.to_string(),
            value: String::new(),
        };
        Self {
            modal: Modal::new(
                "Add Task",
                vec![
                    input("Title"),
                    input("Due date (YYYY-MM-DD)"),
                    input("Estimated hours"),
                    input("Importance (1-10)"),
                    Field::Button {
                        label: String::from("Add"),
                        action: ModalAction::Submit,
                    },
                    Field::Button {
                        label: String::from("Cancel"),
                        action: ModalAction::Cancel,
                    },
                ],
            ),
        }
    }

    pub(in crate::tui) fn modal(&self) -> &Modal {
        &self.modal
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        handle_modal_key(&mut self.modal, key)
    }

    pub(in crate::tui) fn handle_paste(&mut self, text: &str) {
        handle_modal_paste(&mut self.modal, text);
    }

    pub(in crate::tui) fn form(&self) -> TaskForm {
        TaskForm {
            title: self.modal.text(TITLE).to_string(),
            due_date: self.modal.text(DUE_DATE).to_string(),
            estimated_hours: self.modal.text(ESTIMATED_HOURS).to_string(),
            importance: self.modal.text(IMPORTANCE).to_string(),
        }
    }
}
