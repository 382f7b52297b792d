/*
[INPUT]:  HTTP client configuration and analysis service endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod analyze;
pub mod client;
pub mod error;
pub mod service;

pub use error::{AnalyzerError, Result};
pub use service::{AnalysisService, MockAnalysisService};

pub use client::{AnalyzerClient, ClientConfig, DEFAULT_BASE_URL};
