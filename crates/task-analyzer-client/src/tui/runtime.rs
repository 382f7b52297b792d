/*
[INPUT]:  Analyzer session, analysis service, log buffer, terminal input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use task_analyzer_adapter::AnalysisService;
use task_analyzer_client::session::AnalyzerSession;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

use super::app::{ActiveModal, AppState, Tab, UiEvent};
use super::events::{handle_key_event, handle_paste_event};
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub(crate) const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// `MakeWriter` that feeds formatted log lines into a [`LogBuffer`]
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        match self.buffer.lock() {
            Ok(mut guard) => guard.push_line(line),
            Err(poisoned) => poisoned.into_inner().push_line(line),
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[a]", key_style),
        Span::raw(" Add  "),
        Span::styled("[j]", key_style),
        Span::raw(" Load JSON  "),
        Span::styled("[d]", key_style),
        Span::raw(" Remove  "),
        Span::styled("[c]", key_style),
        Span::raw(" Clear  "),
        Span::styled("[s/S]", key_style),
        Span::raw(" Strategy  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Analyze  "),
        Span::styled("[Tab/1/2/3]", key_style),
        Span::raw(" Tabs  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit"),
    ]);

    let line2 = match app.session.notice() {
        Some(notice) => {
            let error_style = Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD);
            let mut spans = vec![Span::styled(notice.message.clone(), error_style)];
            if let Some(detail) = &notice.detail {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(detail.clone(), Style::default().fg(Color::LightRed)));
            }
            Line::from(spans)
        }
        None => Line::from(format!("Status: {}", app.status_message)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub async fn run_tui_with_log(
    session: AnalyzerSession,
    service: Arc<dyn AnalysisService>,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(session, service, log_buffer, event_tx);
    info!(strategy = %app.session.strategy(), "task analyzer ready");

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {
                app.session.dismiss_expired_notice(Instant::now());
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind != KeyEventKind::Release => {
                        should_quit = handle_key_event(&mut app, key);
                    }
                    Some(UiEvent::Input(CrosstermEvent::Paste(text))) => {
                        handle_paste_event(&mut app, &text);
                    }
                    Some(UiEvent::AnalysisFinished { generation, outcome }) => {
                        app.finish_analysis(generation, outcome);
                    }
                    Some(UiEvent::Input(_)) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0], app);

    match app.current_tab {
        Tab::Tasks => draw_task_list(frame, layout[1], app),
        Tab::Results => draw_results(frame, layout[1], app),
        Tab::Logs => draw_logs(frame, layout[1], &app.log_buffer),
    }

    draw_tabs(frame, layout[2], app.current_tab);
    draw_footer(frame, layout[3], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = match active_modal {
            ActiveModal::AddTask(modal) => modal.modal(),
            ActiveModal::LoadJson(modal) => modal.modal(),
            ActiveModal::ConfirmClear(modal) => modal.modal(),
        };
        let modal_area = centered_rect(area, 70, 70);
        draw_modal(frame, modal_area, modal);
    }
}

fn centered_rect(
    area: ratatui::layout::Rect,
    percent_x: u16,
    percent_y: u16,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
