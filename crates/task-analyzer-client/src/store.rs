/*
[INPUT]:  Validated form tasks and raw bulk records
[OUTPUT]: Ordered task collection with unique generated ids
[POS]:    Session state - task record store
[UPDATE]: When id assignment or load semantics change
*/

use std::collections::HashSet;

use task_analyzer_adapter::TaskEntry;
use tracing::debug;

use crate::error::ClientError;
use crate::validate::{CheckedRecord, NewTask, RawTaskRecord};

/// First id issued by a fresh (or freshly cleared) store
pub const FIRST_TASK_ID: i64 = 1;

/// Monotonic id counter that never hands out an id already in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: FIRST_TASK_ID,
        }
    }

    /// Issue the next id not contained in `used`
    pub fn next_unused(&mut self, used: &HashSet<i64>) -> i64 {
        while used.contains(&self.next) {
            self.next += 1;
        }
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn reset(&mut self) {
        self.next = FIRST_TASK_ID;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered, in-memory task collection. Insertion order is the order sent to
/// the service.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<TaskEntry>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[TaskEntry] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&TaskEntry> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Owned copy of the current tasks, in store order
    pub fn snapshot(&self) -> Vec<TaskEntry> {
        self.tasks.clone()
    }

    /// Append a validated task with a fresh id. Returns the id.
    pub fn add_task(&mut self, task: NewTask) -> i64 {
        let id = self.ids.next_unused(&self.used_ids());
        debug!(id, title = %task.title, "task added");
        self.tasks.push(TaskEntry {
            id,
            title: task.title,
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: Vec::new(),
        });
        id
    }

    /// Append a bulk batch. Either every record is admitted or none is; the
    /// id counter only moves when the batch is admitted.
    ///
    /// Supplied ids are kept but must not collide with the store or with an
    /// earlier record of the batch. Missing ids are generated past both.
    pub fn load_tasks(&mut self, records: Vec<RawTaskRecord>) -> Result<usize, ClientError> {
        let mut used = self.used_ids();
        let mut checked: Vec<CheckedRecord> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let record = record.check(index)?;
            if let Some(id) = record.id {
                if !used.insert(id) {
                    return Err(ClientError::validation(format!(
                        "Task at index {index} has duplicate id {id}"
                    )));
                }
            }
            checked.push(record);
        }

        let mut ids = self.ids.clone();
        let batch: Vec<TaskEntry> = checked
            .into_iter()
            .map(|record| TaskEntry {
                id: record.id.unwrap_or_else(|| ids.next_unused(&used)),
                title: record.title,
                due_date: record.due_date,
                estimated_hours: record.estimated_hours,
                importance: record.importance,
                dependencies: record.dependencies,
            })
            .collect();

        let count = batch.len();
        self.ids = ids;
        self.tasks.extend(batch);
        debug!(count, total = self.tasks.len(), "bulk tasks loaded");
        Ok(count)
    }

    /// Remove the task at `index`; out-of-range indices are a no-op.
    pub fn remove_task(&mut self, index: usize) -> Option<TaskEntry> {
        if index >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(index);
        debug!(id = removed.id, index, "task removed");
        Some(removed)
    }

    /// Drop every task and restart ids at [`FIRST_TASK_ID`]
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.ids.reset();
        debug!("task store cleared");
    }

    fn used_ids(&self) -> HashSet<i64> {
        self.tasks.iter().map(|task| task.id).collect()
    }
}
