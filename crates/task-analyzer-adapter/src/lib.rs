/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task analyzer adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AnalysisService,
    AnalyzerClient,
    AnalyzerError,
    ClientConfig,
    DEFAULT_BASE_URL,
    MockAnalysisService,
    Result,
};

// Re-export all types
pub use types::*;
