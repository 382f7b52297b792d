/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::TaskEntry;
use super::strategy::Strategy;

/// Body of `POST analyze/`; task order is store insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub tasks: Vec<TaskEntry>,
    pub strategy: Strategy,
}
