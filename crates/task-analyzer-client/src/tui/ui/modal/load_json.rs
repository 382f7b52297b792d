/*
[INPUT]:  Pasted or typed JSON task array
[OUTPUT]: Raw bulk text for session loading
[POS]:    TUI UI modal - bulk JSON load
[UPDATE]: When the bulk input surface changes
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key, handle_modal_paste};

const JSON_INPUT: usize = 0;

pub(in crate::tui) struct LoadJsonModal {
    modal: Modal,
}

impl LoadJsonModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            modal: Modal::new(
                "Load Tasks From JSON",
                vec![
                    Field::TextArea {
                        label: String::from("JSON array"),
                        value: String::new(),
                    },
                    Field::Button {
                        label: String::from("Load"),
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

    pub(in crate::tui) fn text(&self) -> &str {
        self.modal.text(JSON_INPUT)
    }
}
