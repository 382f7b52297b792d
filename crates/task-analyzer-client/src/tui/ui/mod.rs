/*
[INPUT]:  TUI app state and session view models
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels
*/

mod layout;
mod logs;
mod results;
mod task_list;

pub mod modal;

pub(in crate::tui) use layout::{draw_header, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use results::draw_results;
pub(in crate::tui) use task_list::draw_task_list;
