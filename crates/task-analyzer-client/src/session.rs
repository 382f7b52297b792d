/*
[INPUT]:  User actions (form submit, bulk load, remove, clear, analyze) and service outcomes
[OUTPUT]: Session state: store, strategy, loading flag, result, notice
[POS]:    Session controller - single owner of all client state
[UPDATE]: When adding user actions or changing the request lifecycle
*/

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use task_analyzer_adapter::{
    AnalysisService, AnalyzeRequest, AnalyzeResponse, AnalyzerError, Strategy, TaskEntry,
};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::render::{ResultView, TaskListView, render_results, render_task_list};
use crate::store::TaskStore;
use crate::validate::{TaskForm, parse_bulk, validate_form};

/// How long a notice stays on screen
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Transient error surface
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub detail: Option<String>,
    raised_at: Instant,
}

impl Notice {
    fn from_error(err: &ClientError, now: Instant) -> Self {
        Self {
            message: err.to_string(),
            detail: err.detail(),
            raised_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

/// A request that has been started but not yet applied
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnalysis {
    pub generation: u64,
    pub request: AnalyzeRequest,
}

#[derive(Debug)]
pub struct AnalyzerSession {
    store: TaskStore,
    strategy: Strategy,
    loading: bool,
    generation: u64,
    result: Option<AnalyzeResponse>,
    result_focus: bool,
    notice: Option<Notice>,
    notice_ttl: Duration,
    confirm_clear: bool,
}

impl Default for AnalyzerSession {
    fn default() -> Self {
        Self::new(Strategy::default(), DEFAULT_NOTICE_TTL)
    }
}

impl AnalyzerSession {
    pub fn new(strategy: Strategy, notice_ttl: Duration) -> Self {
        Self {
            store: TaskStore::new(),
            strategy,
            loading: false,
            generation: 0,
            result: None,
            result_focus: false,
            notice: None,
            notice_ttl,
            confirm_clear: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[TaskEntry] {
        self.store.tasks()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Step through the known strategies; an unknown label restarts at the first.
    pub fn cycle_strategy(&mut self, forward: bool) {
        let known = Strategy::known();
        let next = match known.iter().position(|s| *s == self.strategy) {
            Some(current) if forward => (current + 1) % known.len(),
            Some(current) => (current + known.len() - 1) % known.len(),
            None => 0,
        };
        self.strategy = known[next].clone();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalyzeResponse> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear
    }

    pub fn task_list_view(&self) -> TaskListView {
        render_task_list(self.store.tasks())
    }

    pub fn result_view(&self, today: NaiveDate) -> Option<ResultView> {
        self.result
            .as_ref()
            .map(|response| render_results(response, today))
    }

    /// Returns `true` once after a result arrives, so the view can focus it.
    pub fn take_result_focus(&mut self) -> bool {
        std::mem::take(&mut self.result_focus)
    }

    /// Single-task path. On failure the store is untouched and a notice is raised.
    pub fn submit_form(&mut self, form: &TaskForm) -> Result<i64, ClientError> {
        match validate_form(form) {
            Ok(task) => {
                let id = self.store.add_task(task);
                self.notice = None;
                Ok(id)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Bulk path. All-or-nothing; returns the number of tasks appended.
    pub fn load_json(&mut self, text: &str) -> Result<usize, ClientError> {
        let loaded = parse_bulk(text).and_then(|records| self.store.load_tasks(records));
        match loaded {
            Ok(count) => {
                self.notice = None;
                Ok(count)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    pub fn remove_task(&mut self, index: usize) -> Option<TaskEntry> {
        self.store.remove_task(index)
    }

    /// Arm the clear confirmation. Nothing to confirm on an empty store.
    pub fn request_clear(&mut self) -> bool {
        self.confirm_clear = !self.store.is_empty();
        self.confirm_clear
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_clear = false;
    }

    /// Clear tasks, ids and result. Any in-flight request becomes stale.
    pub fn confirm_clear(&mut self) {
        if !self.confirm_clear {
            return;
        }
        self.confirm_clear = false;
        self.store.clear();
        self.result = None;
        self.result_focus = false;
        self.loading = false;
        self.generation += 1;
        info!("session cleared");
    }

    /// Start a request from the current snapshot. Returns `None` when the store
    /// is empty or a request is already outstanding.
    pub fn begin_analysis(&mut self) -> Option<PendingAnalysis> {
        if self.store.is_empty() || self.loading {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.result = None;
        self.result_focus = false;
        self.notice = None;
        debug!(generation = self.generation, tasks = self.store.len(), "analysis started");

        Some(PendingAnalysis {
            generation: self.generation,
            request: AnalyzeRequest {
                tasks: self.store.snapshot(),
                strategy: self.strategy.clone(),
            },
        })
    }

    /// Apply a finished request. Stale generations are dropped; returns whether
    /// the outcome was applied.
    pub fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzerError>,
    ) -> bool {
        self.apply_outcome(generation, outcome).is_some()
    }

    /// Run a full request against `service`. A no-op when nothing can be sent.
    pub async fn analyze<S>(&mut self, service: &S) -> Result<(), ClientError>
    where
        S: AnalysisService + ?Sized,
    {
        let Some(pending) = self.begin_analysis() else {
            return Ok(());
        };
        let outcome = service.analyze(&pending.request).await;
        self.apply_outcome(pending.generation, outcome)
            .unwrap_or(Ok(()))
    }

    fn apply_outcome(
        &mut self,
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzerError>,
    ) -> Option<Result<(), ClientError>> {
        if generation != self.generation || !self.loading {
            debug!(generation, current = self.generation, "dropping stale analysis outcome");
            return None;
        }
        self.loading = false;

        match outcome {
            Ok(response) => {
                info!(
                    strategy_used = %response.strategy_used,
                    total_tasks = response.total_tasks,
                    "analysis complete"
                );
                self.result = Some(response);
                self.result_focus = true;
                Some(Ok(()))
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                let err = ClientError::from(err);
                self.raise(&err);
                Some(Err(err))
            }
        }
    }

    /// Hide the notice once its interval has passed. Returns `true` if hidden.
    pub fn dismiss_expired_notice(&mut self, now: Instant) -> bool {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now, self.notice_ttl));
        if expired {
            self.notice = None;
        }
        expired
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn reject(&mut self, err: ClientError) -> ClientError {
        debug!(error = %err, "input rejected");
        self.raise(&err);
        err
    }

    fn raise(&mut self, err: &ClientError) {
        self.notice = Some(Notice::from_error(err, Instant::now()));
    }
}
