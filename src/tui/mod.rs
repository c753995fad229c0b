// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Renders the session's section/topic tree (ratatui + crossterm) and lets
//! the user walk it; activating a topic row selects its start time, which
//! the caller receives once the navigator exits.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::{SessionDoc, StartTime};
use crate::query::{topics, Section, LAST_MINUTE_PHASES};
use crate::render::{format_millis, format_start_time};


const FOCUS_COLOR: Color = Color::LightGreen;
const SECTION_COLOR: Color = Color::Cyan;
const DIM_COLOR: Color = Color::DarkGray;
const UNNAMED_TOPIC_LABEL: &str = "(unnamed topic)";

/// Runs the navigator over an opened session document.
///
/// Returns the start time of the activated topic, or `None` when the user
/// quit without selecting one.
pub fn run(doc: &SessionDoc) -> Result<Option<i64>, Box<dyn std::error::Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(doc);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(app.selected_time)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    SectionHeader { label: String },
    Topic { label: String, start: StartTime },
}

#[derive(Debug)]
struct App {
    rows: Vec<Row>,
    list_state: ListState,
    selected_time: Option<i64>,
    should_quit: bool,
}

impl App {
    fn new(doc: &SessionDoc) -> Self {
        let rows = navigator_rows(doc);
        let mut list_state = ListState::default();
        if let Some(index) = first_topic_index(&rows) {
            list_state.select(Some(index));
        }

        Self {
            rows,
            list_state,
            selected_time: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter => self.activate_selected(),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: i64) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let last = (self.rows.len() - 1) as i64;
        let next = (current + delta).clamp(0, last) as usize;
        self.list_state.select(Some(next));
    }

    fn activate_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        if let Some(Row::Topic {
            start: StartTime::Anchored(ms),
            ..
        }) = self.rows.get(index)
        {
            self.selected_time = Some(*ms);
            self.should_quit = true;
        }
    }

    fn highlighted_start(&self) -> Option<&StartTime> {
        let index = self.list_state.selected()?;
        match self.rows.get(index)? {
            Row::Topic { start, .. } => Some(start),
            Row::SectionHeader { .. } => None,
        }
    }
}

/// Flattens the session into navigator rows: a header per non-empty section
/// followed by its topics, in document order. Empty and absent sections are
/// skipped entirely.
fn navigator_rows(doc: &SessionDoc) -> Vec<Row> {
    let mut rows = Vec::new();

    push_section(&mut rows, doc, "Greeting", Section::Greeting);
    push_section(&mut rows, doc, "Initial narrative", Section::InitialNarrative);
    for phase in LAST_MINUTE_PHASES {
        push_section(
            &mut rows,
            doc,
            &format!("Last minute, phase {phase}"),
            Section::LastMinutePhase(phase),
        );
    }
    push_section(&mut rows, doc, "Farewell", Section::Farewell);

    rows
}

fn push_section(rows: &mut Vec<Row>, doc: &SessionDoc, label: &str, section: Section) {
    let mut enumeration = topics(doc, section).peekable();
    if enumeration.peek().is_none() {
        return;
    }

    rows.push(Row::SectionHeader {
        label: label.to_owned(),
    });
    for record in enumeration {
        rows.push(Row::Topic {
            label: record
                .topic_id()
                .unwrap_or(UNNAMED_TOPIC_LABEL)
                .to_owned(),
            start: record.start().clone(),
        });
    }
}

fn first_topic_index(rows: &[Row]) -> Option<usize> {
    rows.iter()
        .position(|row| matches!(row, Row::Topic { .. }))
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    let items: Vec<ListItem<'_>> = app.rows.iter().map(row_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Session"))
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let status = match app.highlighted_start() {
        Some(StartTime::Unresolved(err)) => format!(" unresolved: {err}"),
        Some(start) => format!(" {}", format_start_time(start)),
        None => String::new(),
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(status, Style::default().fg(DIM_COLOR)),
        Span::styled(
            "   ↑/↓ move   Enter select   q quit",
            Style::default().fg(DIM_COLOR),
        ),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn row_item(row: &Row) -> ListItem<'_> {
    match row {
        Row::SectionHeader { label } => ListItem::new(Line::from(Span::styled(
            label.clone(),
            Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
        ))),
        Row::Topic { label, start } => {
            let time = match start {
                StartTime::Anchored(ms) => format_millis(*ms),
                StartTime::Unanchored | StartTime::Unresolved(_) => "-".to_owned(),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("  {label}  ")),
                Span::styled(time, Style::default().fg(DIM_COLOR)),
            ]))
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
