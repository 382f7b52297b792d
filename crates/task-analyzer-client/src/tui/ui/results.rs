/*
[INPUT]:  Session result view, loading flag, and scroll offset
[OUTPUT]: Prioritized result panel rendered into Ratatui frame
[POS]:    TUI UI results panel rendering
[UPDATE]: When result card presentation changes
*/

use chrono::Local;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use task_analyzer_client::render::{PriorityTier, ResultCard};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_results(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Results");

    let text = if app.session.is_loading() {
        Text::from(Line::from(Span::styled(
            "Analyzing tasks...",
            Style::default().fg(Color::Yellow),
        )))
    } else {
        match app.session.result_view(Local::now().date_naive()) {
            Some(view) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::raw("Strategy: "),
                        Span::styled(
                            view.summary.strategy_label,
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  |  Total tasks: {}", view.summary.total_tasks)),
                    ]),
                    Line::default(),
                ];
                for card in &view.cards {
                    lines.extend(card_lines(card));
                }
                Text::from(lines)
            }
            None => Text::from(Line::from(Span::styled(
                "No analysis yet. Press [Enter] on the Tasks tab.",
                Style::default().fg(Color::DarkGray),
            ))),
        }
    };

    let widget = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0));
    frame.render_widget(widget, area);
}

fn card_lines(card: &ResultCard) -> Vec<Line<'static>> {
    let tier_style = tier_style(card.tier);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}. ", card.rank), tier_style),
            Span::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("[{}] {}", card.tier.as_str().to_uppercase(), card.score),
                tier_style,
            ),
        ]),
        Line::from(format!(
            "   {} | {} | Importance {}",
            card.due_phrase, card.estimated_hours, card.importance
        )),
        Line::from(Span::styled(
            format!("   {}", card.explanation),
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Some(dependencies) = &card.dependencies {
        lines.push(Line::from(format!("   {dependencies}")));
    }
    lines.push(Line::default());
    lines
}

fn tier_style(tier: PriorityTier) -> Style {
    let color = match tier {
        PriorityTier::High => Color::LightRed,
        PriorityTier::Medium => Color::Yellow,
        PriorityTier::Low => Color::LightGreen,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
