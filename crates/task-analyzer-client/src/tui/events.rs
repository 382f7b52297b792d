/*
[INPUT]:  Crossterm key and paste events
[OUTPUT]: TUI event routing to AppState actions
[POS]:    TUI event handling
[UPDATE]: When changing key bindings or modal submission
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveModal, AppState, Tab};
use super::ui::modal::ModalAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.active_modal.is_some() {
        handle_modal_key_event(app, key.code);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => app.open_add_task(),
        KeyCode::Char('j') => app.open_load_json(),
        KeyCode::Char('c') => app.open_confirm_clear(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Enter => app.start_analysis(),
        KeyCode::Char('s') => app.cycle_strategy(true),
        KeyCode::Char('S') => app.cycle_strategy(false),
        KeyCode::Esc => app.session.dismiss_notice(),
        KeyCode::Tab | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Char('1') => app.set_tab(Tab::Tasks),
        KeyCode::Char('2') => app.set_tab(Tab::Results),
        KeyCode::Char('3') => app.set_tab(Tab::Logs),
        KeyCode::Up if app.current_tab == Tab::Results => app.scroll_results(-1),
        KeyCode::Down if app.current_tab == Tab::Results => app.scroll_results(1),
        KeyCode::PageUp => app.scroll_results(-10),
        KeyCode::PageDown => app.scroll_results(10),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => {}
    }
    false
}

/// Bracketed paste goes to the focused modal input; ignored otherwise.
pub(super) fn handle_paste_event(app: &mut AppState, text: &str) {
    match app.active_modal.as_mut() {
        Some(ActiveModal::AddTask(modal)) => modal.handle_paste(text),
        Some(ActiveModal::LoadJson(modal)) => modal.handle_paste(text),
        Some(ActiveModal::ConfirmClear(_)) | None => {}
    }
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let Some(modal) = app.active_modal.as_mut() else {
        return;
    };
    let action = match modal {
        ActiveModal::AddTask(modal) => modal.handle_key(key),
        ActiveModal::LoadJson(modal) => modal.handle_key(key),
        ActiveModal::ConfirmClear(modal) => modal.handle_key(key),
    };

    match action {
        ModalAction::Cancel => app.close_modal(),
        ModalAction::Submit => match app.active_modal {
            Some(ActiveModal::AddTask(_)) => app.submit_add_task(),
            Some(ActiveModal::LoadJson(_)) => app.submit_load_json(),
            Some(ActiveModal::ConfirmClear(_)) => app.submit_clear(),
            None => {}
        },
        ModalAction::None => {}
    }
}
