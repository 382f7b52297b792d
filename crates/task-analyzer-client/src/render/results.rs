/*
[INPUT]:  AnalyzeResponse and the current calendar date
[OUTPUT]: ResultView with summary and ranked cards in service order
[POS]:    Render layer - prioritized result panel
[UPDATE]: When card fields, tier thresholds, or date phrasing change
*/

use chrono::NaiveDate;
use task_analyzer_adapter::{AnalyzeResponse, ScoredTask, human_case};

const HIGH_TIER_MIN: f64 = 75.0;
const MEDIUM_TIER_MIN: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Thresholds are inclusive: 75 is high, 50 is medium.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_TIER_MIN {
            PriorityTier::High
        } else if score >= MEDIUM_TIER_MIN {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
            PriorityTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub strategy_label: String,
    pub total_tasks: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub rank: usize,
    pub title: String,
    pub tier: PriorityTier,
    pub score: String,
    pub due_phrase: String,
    pub estimated_hours: String,
    pub importance: String,
    pub explanation: String,
    pub dependencies: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub summary: ResultSummary,
    pub cards: Vec<ResultCard>,
}

/// Project a response into cards. Service order is kept as-is.
pub fn render_results(response: &AnalyzeResponse, today: NaiveDate) -> ResultView {
    ResultView {
        summary: ResultSummary {
            strategy_label: human_case(&response.strategy_used),
            total_tasks: response.total_tasks,
        },
        cards: response
            .tasks
            .iter()
            .enumerate()
            .map(|(position, task)| render_card(position + 1, task, today))
            .collect(),
    }
}

fn render_card(rank: usize, task: &ScoredTask, today: NaiveDate) -> ResultCard {
    let dependencies = (!task.dependencies.is_empty()).then(|| {
        let ids = task
            .dependencies
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Depends on tasks: {ids}")
    });

    ResultCard {
        rank,
        title: task.title.clone(),
        tier: PriorityTier::from_score(task.priority_score),
        score: format!("{:.2}", task.priority_score),
        due_phrase: relative_due_phrase(task.due_date, today),
        estimated_hours: format!("{}h", task.estimated_hours),
        importance: format!("{}/10", task.importance),
        explanation: task.explanation.clone(),
        dependencies,
    }
}

/// Day-granular distance from `today` to `due`
pub fn relative_due_phrase(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        d if d < 0 => format!("{} days overdue", d.abs()),
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d => format!("{d} days left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn scored(title: &str, score: f64, dependencies: Vec<i64>) -> ScoredTask {
        ScoredTask {
            id: None,
            title: title.to_string(),
            due_date: date("2024-06-11"),
            estimated_hours: 2.0,
            importance: 8,
            dependencies,
            priority_score: score,
            explanation: "Due soon".to_string(),
        }
    }

    #[rstest]
    #[case(100.0, PriorityTier::High)]
    #[case(75.0, PriorityTier::High)]
    #[case(74.99, PriorityTier::Medium)]
    #[case(50.0, PriorityTier::Medium)]
    #[case(49.999, PriorityTier::Low)]
    #[case(0.0, PriorityTier::Low)]
    fn test_priority_tier(#[case] score: f64, #[case] expected: PriorityTier) {
        assert_eq!(PriorityTier::from_score(score), expected);
    }

    #[rstest]
    #[case("2024-06-08", "2 days overdue")]
    #[case("2024-06-09", "1 days overdue")]
    #[case("2024-06-10", "Due today")]
    #[case("2024-06-11", "Due tomorrow")]
    #[case("2024-06-15", "5 days left")]
    fn test_relative_due_phrase(#[case] due: &str, #[case] expected: &str) {
        assert_eq!(relative_due_phrase(date(due), date("2024-06-10")), expected);
    }

    #[test]
    fn test_render_results_keeps_service_order() {
        let response = AnalyzeResponse {
            strategy_used: "deadline_driven".to_string(),
            total_tasks: 2,
            tasks: vec![scored("Low first", 12.0, vec![]), scored("High second", 91.456, vec![1, 3])],
        };

        let view = render_results(&response, date("2024-06-10"));
        assert_eq!(view.summary.strategy_label, "DEADLINE DRIVEN");
        assert_eq!(view.summary.total_tasks, 2);

        let first = &view.cards[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.title, "Low first");
        assert_eq!(first.tier, PriorityTier::Low);
        assert_eq!(first.dependencies, None);

        let second = &view.cards[1];
        assert_eq!(second.rank, 2);
        assert_eq!(second.tier, PriorityTier::High);
        assert_eq!(second.score, "91.46");
        assert_eq!(second.due_phrase, "Due tomorrow");
        assert_eq!(second.estimated_hours, "2h");
        assert_eq!(second.importance, "8/10");
        assert_eq!(second.dependencies.as_deref(), Some("Depends on tasks: 1, 3"));
    }
}
