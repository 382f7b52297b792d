/*
[INPUT]:  Local validation/parse failures and adapter errors
[OUTPUT]: ClientError with the exact text shown on the error surface
[POS]:    Error handling layer - client-side taxonomy
[UPDATE]: When adding new error sources or changing surfaced messages
*/

use task_analyzer_adapter::AnalyzerError;
use thiserror::Error;

/// Every failure the client surfaces to the user. `Display` is the surfaced text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Missing or out-of-range field, or an incomplete bulk batch
    #[error("{0}")]
    Validation(String),

    /// Bulk input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// Service answered with a failure status
    #[error("Error: {message}")]
    Service {
        message: String,
        cycles: Vec<Vec<i64>>,
    },

    /// Request could not complete or the response was unusable
    #[error("Error: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// Secondary line for the error surface, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            ClientError::Service { cycles, .. } if !cycles.is_empty() => {
                let rendered = cycles
                    .iter()
                    .map(|cycle| {
                        cycle
                            .iter()
                            .map(|id| id.to_string())
                            .collect::<Vec<_>>()
                            .join(" -> ")
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                Some(format!("Cycles: {rendered}"))
            }
            _ => None,
        }
    }
}

impl From<AnalyzerError> for ClientError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::Service {
                message, cycles, ..
            } => ClientError::Service { message, cycles },
            other => ClientError::Transport(other.to_string()),
        }
    }
}
