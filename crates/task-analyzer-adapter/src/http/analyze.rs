/*
[INPUT]:  Task snapshot, strategy label
[OUTPUT]: Prioritized analysis results and service suggestions
[POS]:    HTTP layer - analysis endpoints
[UPDATE]: When adding new endpoints or changing response format
*/

use reqwest::Method;
use tracing::{debug, info};

use crate::http::{AnalyzerClient, Result};
use crate::types::{AnalyzeRequest, AnalyzeResponse, Strategy, SuggestResponse};

impl AnalyzerClient {
    /// Submit tasks for prioritization
    ///
    /// POST analyze/
    pub async fn analyze_tasks(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        info!(
            tasks = request.tasks.len(),
            strategy = %request.strategy,
            "submitting tasks for analysis"
        );
        let builder = self.request(Method::POST, "analyze/")?.json(request);
        let response: AnalyzeResponse = self.send_json(builder).await?;
        debug!(
            strategy_used = %response.strategy_used,
            total_tasks = response.total_tasks,
            "analysis received"
        );
        Ok(response)
    }

    /// Ask the service for its suggestion hint
    ///
    /// GET suggest/?strategy={strategy}
    pub async fn suggest_tasks(&self, strategy: &Strategy) -> Result<SuggestResponse> {
        let builder = self
            .request(Method::GET, "suggest/")?
            .query(&[("strategy", strategy.as_str())]);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AnalyzerClient, AnalyzerError, ClientConfig};
    use crate::types::{AnalyzeRequest, Strategy, TaskEntry};
    use chrono::NaiveDate;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AnalyzerClient {
        AnalyzerClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    fn sample_request() -> AnalyzeRequest {
        AnalyzeRequest {
            tasks: vec![TaskEntry {
                id: 1,
                title: "Fix login bug".to_string(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 12).expect("date"),
                estimated_hours: 3.0,
                importance: 8,
                dependencies: Vec::new(),
            }],
            strategy: Strategy::new("fastest_wins"),
        }
    }

    #[tokio::test]
    async fn test_analyze_tasks() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "strategy_used": "fastest_wins",
            "total_tasks": 1,
            "tasks": [
                {
                    "id": 1,
                    "title": "Fix login bug",
                    "due_date": "2024-06-12",
                    "estimated_hours": 3.0,
                    "importance": 8,
                    "dependencies": [],
                    "priority_score": 81.5,
                    "explanation": "Quick win"
                }
            ]
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/analyze/"))
            .and(body_json(serde_json::json!({
                "tasks": [{
                    "id": 1,
                    "title": "Fix login bug",
                    "due_date": "2024-06-12",
                    "estimated_hours": 3.0,
                    "importance": 8,
                    "dependencies": []
                }],
                "strategy": "fastest_wins"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .analyze_tasks(&sample_request())
            .await
            .expect("analyze_tasks failed");

        assert_eq!(response.strategy_used, "fastest_wins");
        assert_eq!(response.total_tasks, 1);
        assert_eq!(response.tasks[0].priority_score, 81.5);
        assert_eq!(response.tasks[0].explanation, "Quick win");
    }

    #[tokio::test]
    async fn test_analyze_tasks_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Circular dependencies detected",
                "cycles": [[1, 2, 1]]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .analyze_tasks(&sample_request())
            .await
            .expect_err("400 must fail");

        match err {
            AnalyzerError::Service {
                status,
                message,
                cycles,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Circular dependencies detected");
                assert_eq!(cycles, vec![vec![1, 2, 1]]);
            }
            other => panic!("Expected Service error variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze_tasks_field_errors_fall_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "strategy": ["\"slowest\" is not a valid choice."]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .analyze_tasks(&sample_request())
            .await
            .expect_err("400 must fail");
        assert_eq!(err.to_string(), "Failed to analyze tasks");
    }

    #[tokio::test]
    async fn test_analyze_tasks_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .analyze_tasks(&sample_request())
            .await
            .expect_err("html body must fail");
        assert!(matches!(err, AnalyzerError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_suggest_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest/"))
            .and(query_param("strategy", "high_impact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Submit tasks via POST to /api/tasks/analyze/ to get suggestions",
                "strategy": "high_impact"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .suggest_tasks(&Strategy::new("high_impact"))
            .await
            .expect("suggest_tasks failed");
        assert_eq!(response.strategy, "high_impact");
        assert!(response.message.contains("analyze"));
    }
}
