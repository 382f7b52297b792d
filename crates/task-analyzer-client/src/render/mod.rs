/*
[INPUT]:  Store state and analysis responses
[OUTPUT]: Pure view models for the task list and the result panel
[POS]:    Render layer - module root
[UPDATE]: When adding new views
*/

pub mod results;
pub mod task_list;

pub use results::{
    PriorityTier, ResultCard, ResultSummary, ResultView, relative_due_phrase, render_results,
};
pub use task_list::{EMPTY_PLACEHOLDER, TaskListRow, TaskListView, describe_task, render_task_list};
