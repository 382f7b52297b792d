/*
[INPUT]:  Session task list view and selection state
[OUTPUT]: Pending task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When task list presentation changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let view = app.session.task_list_view();
    let items = match view.placeholder() {
        Some(placeholder) => vec![ListItem::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))],
        None => view
            .rows
            .iter()
            .map(|row| ListItem::new(format!("#{} {}", row.id, row.text)))
            .collect(),
    };

    let analyze_hint = if view.analyze_enabled && !app.session.is_loading() {
        "[Enter] Analyze"
    } else {
        "Analyze unavailable"
    };
    let title = format!("Tasks ({}) | {analyze_hint}", view.count);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
