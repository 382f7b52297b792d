/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Log panel with the newest lines, coloured by level
[POS]:    TUI UI logs panel rendering
[UPDATE]: When log panel presentation changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    // A poisoned lock still holds usable lines.
    let lines = match buffer.lock() {
        Ok(guard) => guard.snapshot(),
        Err(poisoned) => poisoned.into_inner().snapshot(),
    };
    let available = area.height.saturating_sub(2) as usize;
    let tail = visible_tail(&lines, available);

    let text = tail
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), level_style(line))))
        .collect::<Vec<_>>();
    let title = if lines.is_empty() {
        "Logs".to_string()
    } else {
        format!("Logs ({}/{})", tail.len(), lines.len())
    };
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    );
    frame.render_widget(log_widget, area);
}

fn visible_tail(lines: &[String], rows: usize) -> &[String] {
    &lines[lines.len().saturating_sub(rows)..]
}

/// Colour for a formatted tracing line, keyed on its level column
fn level_style(line: &str) -> Style {
    let level = line.split_whitespace().take(2).find(|word| {
        matches!(*word, "ERROR" | "WARN" | "INFO" | "DEBUG" | "TRACE")
    });
    match level {
        Some("ERROR") => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some("WARN") => Style::default().fg(Color::Yellow),
        Some("DEBUG") | Some("TRACE") => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_style_from_level_column() {
        let warn = "2026-10-19T08:00:00.000000Z  WARN task_analyzer_client::session: analysis failed";
        assert_eq!(level_style(warn).fg, Some(Color::Yellow));

        let error = "2026-10-19T08:00:00.000000Z ERROR task_analyzer_client: boom";
        assert_eq!(level_style(error).fg, Some(Color::Red));

        let debug = "2026-10-19T08:00:00.000000Z DEBUG task_analyzer_client::store: task added";
        assert_eq!(level_style(debug).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_level_word_in_message_is_ignored() {
        let info = "2026-10-19T08:00:00.000000Z  INFO task_analyzer_client: saw ERROR in payload";
        assert_eq!(level_style(info), Style::default());
    }

    #[test]
    fn test_visible_tail_keeps_newest() {
        let lines: Vec<String> = (0..5).map(|i| format!("line {i}")).collect();
        assert_eq!(visible_tail(&lines, 2), &lines[3..]);
        assert_eq!(visible_tail(&lines, 10).len(), 5);
        assert!(visible_tail(&lines, 0).is_empty());
    }
}
