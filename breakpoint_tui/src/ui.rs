//! UI rendering

mod help_view;
mod stat_view;

use crate::app::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    if app.show_help {
        help_view::draw(f, app, chunks[1]);
    } else {
        stat_view::draw(f, app, chunks[1]);
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("?", "Help"), ("q", "Quit")];

    let mode_keys: Vec<(&str, &str)> = match app.input_mode {
        InputMode::Editing => vec![
            ("0-9 .", "Type"),
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
        ],
        InputMode::Normal => vec![
            ("Tab", "Next stat"),
            ("+/-", "Step"),
            ("Enter", "Edit"),
            ("r", "Reset"),
            ("↑/↓", "Scroll"),
        ],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in mode_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    // Typing would swallow these keys
    if app.input_mode == InputMode::Normal {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        for (i, (key, desc)) in common_keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tab_names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(name.to_string(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Substat Breakpoints "),
        )
        .select(app.current_tab)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:14}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
