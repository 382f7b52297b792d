/*
[INPUT]:  Current store contents
[OUTPUT]: TaskListView rows, placeholder, and analyze availability
[POS]:    Render layer - pending task list
[UPDATE]: When the task list line format changes
*/

use task_analyzer_adapter::TaskEntry;

pub const EMPTY_PLACEHOLDER: &str = "No tasks added yet";

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListRow {
    /// Position in store order, used to address removal
    pub index: usize,
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
    pub count: usize,
    pub rows: Vec<TaskListRow>,
    pub analyze_enabled: bool,
}

impl TaskListView {
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_PLACEHOLDER)
    }
}

pub fn render_task_list(tasks: &[TaskEntry]) -> TaskListView {
    let rows = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| TaskListRow {
            index,
            id: task.id,
            text: describe_task(task),
        })
        .collect::<Vec<_>>();

    TaskListView {
        count: rows.len(),
        analyze_enabled: !rows.is_empty(),
        rows,
    }
}

/// `<title> - Due: <date> (<hours>h, Priority: <importance>/10)`
pub fn describe_task(task: &TaskEntry) -> String {
    format!(
        "{} - Due: {} ({}h, Priority: {}/10)",
        task.title, task.due_date, task.estimated_hours, task.importance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: i64, title: &str, hours: f64) -> TaskEntry {
        TaskEntry {
            id,
            title: title.to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            estimated_hours: hours,
            importance: 7,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn test_empty_list() {
        let view = render_task_list(&[]);
        assert_eq!(view.count, 0);
        assert_eq!(view.placeholder(), Some(EMPTY_PLACEHOLDER));
        assert!(!view.analyze_enabled);
    }

    #[test]
    fn test_rows_follow_store_order() {
        let view = render_task_list(&[task(4, "Review PR", 0.5), task(2, "Deploy", 3.0)]);
        assert_eq!(view.count, 2);
        assert!(view.analyze_enabled);
        assert_eq!(view.placeholder(), None);
        assert_eq!(view.rows[0].index, 0);
        assert_eq!(view.rows[0].id, 4);
        assert_eq!(
            view.rows[0].text,
            "Review PR - Due: 2024-06-15 (0.5h, Priority: 7/10)"
        );
        assert_eq!(view.rows[1].text, "Deploy - Due: 2024-06-15 (3h, Priority: 7/10)");
    }
}
