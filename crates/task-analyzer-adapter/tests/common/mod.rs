/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for task-analyzer-adapter tests

use chrono::NaiveDate;
use task_analyzer_adapter::{AnalyzerClient, ClientConfig, TaskEntry};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> AnalyzerClient {
    AnalyzerClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Deterministic task fixture
pub fn task(id: i64, title: &str, due_date: &str) -> TaskEntry {
    TaskEntry {
        id,
        title: title.to_string(),
        due_date: NaiveDate::parse_from_str(due_date, "%Y-%m-%d").expect("fixture date"),
        estimated_hours: 2.0,
        importance: 5,
        dependencies: Vec::new(),
    }
}
