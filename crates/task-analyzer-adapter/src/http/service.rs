/*
[INPUT]:  Analysis requests from the client session
[OUTPUT]: Analysis responses or service/transport errors
[POS]:    HTTP layer - service abstraction used by the client session
[UPDATE]: When the analysis contract changes
*/

use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{AnalyzerClient, AnalyzerError, Result};
use crate::types::{AnalyzeRequest, AnalyzeResponse};

/// Trait for anything able to analyze a task batch
///
/// The HTTP client is the production implementation; tests and headless
/// runs can substitute their own.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit the tasks and strategy, returning the prioritized result
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse>;
}

#[async_trait]
impl AnalysisService for AnalyzerClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.analyze_tasks(request).await
    }
}

/// Mock analysis service for testing
///
/// Replays a predetermined outcome and records every request it receives.
#[derive(Debug)]
pub struct MockAnalysisService {
    outcome: MockOutcome,
    requests: Mutex<Vec<AnalyzeRequest>>,
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Success(AnalyzeResponse),
    ServiceFailure { status: u16, message: String },
    TransportFailure(String),
}

impl MockAnalysisService {
    /// Always answer with the given response
    pub fn succeeding(response: AnalyzeResponse) -> Self {
        Self::with_outcome(MockOutcome::Success(response))
    }

    /// Always answer with a service failure
    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_outcome(MockOutcome::ServiceFailure {
            status,
            message: message.to_string(),
        })
    }

    /// Always fail before any response is received
    pub fn unreachable(message: &str) -> Self {
        Self::with_outcome(MockOutcome::TransportFailure(message.to_string()))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<AnalyzeRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }
        match &self.outcome {
            MockOutcome::Success(response) => Ok(response.clone()),
            MockOutcome::ServiceFailure { status, message } => Err(AnalyzerError::Service {
                status: *status,
                message: message.clone(),
                cycles: Vec::new(),
            }),
            MockOutcome::TransportFailure(message) => {
                Err(AnalyzerError::InvalidResponse(message.clone()))
            }
        }
    }
}
