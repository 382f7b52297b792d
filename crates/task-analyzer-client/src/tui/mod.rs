/*
[INPUT]:  Analyzer session, analysis service, and log buffer
[OUTPUT]: Ratatui-based TUI for building task lists and reviewing results
[POS]:    TUI module for the task-analyzer binary
[UPDATE]: When adding TUI submodules or public exports
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};
pub(crate) use runtime::LOG_BUFFER_CAPACITY;
