/*
[INPUT]:  Public API exports for task-analyzer-client crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod store;
pub mod validate;

// Re-export main types for convenience
pub use config::AppConfig;
pub use error::ClientError;
pub use session::{AnalyzerSession, Notice, PendingAnalysis};
pub use store::TaskStore;
pub use validate::{TaskForm, parse_bulk, validate_form};
