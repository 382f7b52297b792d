/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Task and scored task structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single task as held by the client and sent to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub id: i64,
    pub title: String,
    /// Serialized as `YYYY-MM-DD`
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i64,
    #[serde(default)]
    pub dependencies: Vec<i64>,
}

/// A task echoed back by the service with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i64,
    #[serde(default)]
    pub dependencies: Vec<i64>,
    pub priority_score: f64,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_entry_wire_format() {
        let task = TaskEntry {
            id: 7,
            title: "Write report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            estimated_hours: 2.5,
            importance: 6,
            dependencies: vec![1, 3],
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "Write report",
                "due_date": "2024-06-15",
                "estimated_hours": 2.5,
                "importance": 6,
                "dependencies": [1, 3]
            })
        );
    }

    #[test]
    fn test_scored_task_without_dependencies() {
        let json = r#"{
            "title": "Deploy",
            "due_date": "2024-06-11",
            "estimated_hours": 1,
            "importance": 9,
            "priority_score": 77.25,
            "explanation": "Due tomorrow"
        }"#;
        let task: ScoredTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, None);
        assert!(task.dependencies.is_empty());
        assert_eq!(task.estimated_hours, 1.0);
    }
}
