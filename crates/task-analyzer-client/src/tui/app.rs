/*
[INPUT]:  Analyzer session, analysis service handle, log buffer, UI event sender
[OUTPUT]: AppState helpers for TUI rendering and session actions
[POS]:    TUI app state
[UPDATE]: When adding tabs, modals, or session actions
*/

use std::sync::Arc;

use crossterm::event::Event as CrosstermEvent;
use ratatui::widgets::ListState;
use task_analyzer_adapter::{AnalysisService, AnalyzeResponse, AnalyzerError};
use task_analyzer_client::session::{AnalyzerSession, PendingAnalysis};
use tokio::sync::mpsc;
use tracing::info;

use crate::tui::LogBufferHandle;
use crate::tui::ui::modal::{AddTaskModal, ConfirmClearModal, LoadJsonModal};

pub(super) enum UiEvent {
    Input(CrosstermEvent),
    AnalysisFinished {
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzerError>,
    },
}

pub(super) enum ActiveModal {
    AddTask(AddTaskModal),
    LoadJson(LoadJsonModal),
    ConfirmClear(ConfirmClearModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Tasks,
    Results,
    Logs,
}

pub(super) struct AppState {
    pub(super) session: AnalyzerSession,
    pub(super) service: Arc<dyn AnalysisService>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) list_state: ListState,
    pub(super) current_tab: Tab,
    pub(super) results_scroll: u16,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
    events: mpsc::UnboundedSender<UiEvent>,
}

impl AppState {
    pub(super) fn new(
        session: AnalyzerSession,
        service: Arc<dyn AnalysisService>,
        log_buffer: LogBufferHandle,
        events: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            session,
            service,
            log_buffer,
            list_state: ListState::default(),
            current_tab: Tab::Tasks,
            results_scroll: 0,
            status_message: "Ready".to_string(),
            active_modal: None,
            events,
        }
    }

    pub(super) fn open_add_task(&mut self) {
        self.active_modal = Some(ActiveModal::AddTask(AddTaskModal::new()));
    }

    pub(super) fn open_load_json(&mut self) {
        self.active_modal = Some(ActiveModal::LoadJson(LoadJsonModal::new()));
    }

    pub(super) fn open_confirm_clear(&mut self) {
        if self.session.request_clear() {
            let count = self.session.tasks().len();
            self.active_modal = Some(ActiveModal::ConfirmClear(ConfirmClearModal::new(count)));
        } else {
            self.status_message = "nothing to clear".to_string();
        }
    }

    pub(super) fn close_modal(&mut self) {
        if matches!(self.active_modal, Some(ActiveModal::ConfirmClear(_))) {
            self.session.cancel_clear();
        }
        self.active_modal = None;
    }

    pub(super) fn submit_add_task(&mut self) {
        let Some(ActiveModal::AddTask(modal)) = self.active_modal.as_ref() else {
            return;
        };
        let form = modal.form();
        match self.session.submit_form(&form) {
            Ok(id) => {
                self.status_message = format!("task added: #{id}");
                self.active_modal = None;
                self.select_last();
            }
            Err(err) => self.status_message = format!("add task failed: {err}"),
        }
    }

    pub(super) fn submit_load_json(&mut self) {
        let Some(ActiveModal::LoadJson(modal)) = self.active_modal.as_ref() else {
            return;
        };
        let text = modal.text().to_string();
        match self.session.load_json(&text) {
            Ok(count) => {
                self.status_message = format!("loaded {count} tasks");
                self.active_modal = None;
                self.select_last();
            }
            Err(err) => self.status_message = format!("load failed: {err}"),
        }
    }

    pub(super) fn submit_clear(&mut self) {
        self.session.confirm_clear();
        self.active_modal = None;
        self.list_state.select(None);
        self.results_scroll = 0;
        self.status_message = "all tasks cleared".to_string();
    }

    pub(super) fn remove_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        if let Some(task) = self.session.remove_task(index) {
            self.status_message = format!("task removed: #{} {}", task.id, task.title);
            self.clamp_selection();
        }
    }

    /// Spawn the request off the UI loop; the outcome comes back as a UiEvent.
    pub(super) fn start_analysis(&mut self) {
        if self.session.is_loading() {
            self.status_message = "analysis already running".to_string();
            return;
        }
        let Some(PendingAnalysis {
            generation,
            request,
        }) = self.session.begin_analysis()
        else {
            self.status_message = "add at least one task first".to_string();
            return;
        };

        info!(
            generation,
            tasks = request.tasks.len(),
            strategy = %request.strategy,
            "submitting analysis"
        );
        self.status_message = format!(
            "analyzing {} tasks with {}",
            request.tasks.len(),
            request.strategy.display_label()
        );

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = service.analyze(&request).await;
            let _ = events.send(UiEvent::AnalysisFinished {
                generation,
                outcome,
            });
        });
    }

    pub(super) fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzerError>,
    ) {
        if !self.session.finish_analysis(generation, outcome) {
            return;
        }
        if self.session.take_result_focus() {
            self.current_tab = Tab::Results;
            self.results_scroll = 0;
            self.status_message = "analysis complete".to_string();
        } else {
            self.status_message = "analysis failed".to_string();
        }
    }

    pub(super) fn cycle_strategy(&mut self, forward: bool) {
        self.session.cycle_strategy(forward);
        self.status_message = format!("strategy: {}", self.session.strategy().display_label());
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Results,
            Tab::Results => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn scroll_results(&mut self, delta: i32) {
        let next = (i32::from(self.results_scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.results_scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.session.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn select_last(&mut self) {
        let len = self.session.tasks().len();
        self.list_state.select(len.checked_sub(1));
    }

    fn clamp_selection(&mut self) {
        let len = self.session.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::LogBuffer;
    use std::sync::Mutex;
    use task_analyzer_adapter::MockAnalysisService;

    fn app() -> (AppState, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let response = AnalyzeResponse {
            strategy_used: "smart_balance".to_string(),
            total_tasks: 0,
            tasks: Vec::new(),
        };
        let app = AppState::new(
            AnalyzerSession::default(),
            Arc::new(MockAnalysisService::succeeding(response)),
            Arc::new(Mutex::new(LogBuffer::new(16))),
            tx,
        );
        (app, rx)
    }

    fn load_two(app: &mut AppState) {
        app.open_load_json();
        if let Some(ActiveModal::LoadJson(modal)) = app.active_modal.as_mut() {
            modal.handle_paste(
                r#"[{"title":"a","due_date":"2024-06-15","estimated_hours":1,"importance":5},
                    {"title":"b","due_date":"2024-06-16","estimated_hours":2,"importance":6}]"#,
            );
        }
        app.submit_load_json();
    }

    #[test]
    fn test_load_json_selects_last_and_closes() {
        let (mut app, _rx) = app();
        load_two(&mut app);
        assert!(app.active_modal.is_none());
        assert_eq!(app.session.tasks().len(), 2);
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.status_message, "loaded 2 tasks");
    }

    #[test]
    fn test_remove_selected_clamps() {
        let (mut app, _rx) = app();
        load_two(&mut app);
        app.remove_selected();
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
        app.remove_selected();
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_cancelled_clear_keeps_tasks() {
        let (mut app, _rx) = app();
        load_two(&mut app);
        app.open_confirm_clear();
        assert!(app.session.is_confirming_clear());
        app.close_modal();
        assert!(!app.session.is_confirming_clear());
        assert_eq!(app.session.tasks().len(), 2);

        app.open_confirm_clear();
        app.submit_clear();
        assert!(app.session.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_round_trip_focuses_results() {
        let (mut app, mut rx) = app();
        load_two(&mut app);
        app.start_analysis();
        assert!(app.session.is_loading());

        match rx.recv().await {
            Some(UiEvent::AnalysisFinished {
                generation,
                outcome,
            }) => app.finish_analysis(generation, outcome),
            _ => panic!("expected analysis outcome"),
        }
        assert!(!app.session.is_loading());
        assert_eq!(app.current_tab, Tab::Results);
        assert!(app.session.result().is_some());
    }
}
