//! Stat view: current value on the left, derived values on the right

use crate::app::{App, InputMode};
use breakpoint_core::report::{format_decimal, BreakpointRecord, DerivedRecord};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{section_header, stat_line};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    draw_input(f, app, chunks[0]);
    draw_derived(f, app, chunks[1]);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let Some(engine) = app.current_engine() else {
        let paragraph = Paragraph::new("No statistics in catalog")
            .block(Block::default().borders(Borders::ALL).title(" Stat "));
        f.render_widget(paragraph, area);
        return;
    };
    let stat = engine.statistic();

    let mut lines = vec![
        section_header(stat.name()),
        stat_line("Value", format_decimal(engine.current_value())),
        stat_line("Base", format_decimal(stat.base_value())),
        stat_line("Rate", format_decimal(stat.delta_rate())),
        stat_line("Extra", format_decimal(engine.extra())),
        Line::from(""),
    ];

    if engine.current_value() < stat.base_value() {
        lines.push(Line::from(Span::styled(
            "Below base: breakpoints hidden",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Editing {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}_", app.input),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stat "));

    f.render_widget(paragraph, area);
}

fn draw_derived(f: &mut Frame, app: &App, area: Rect) {
    let records = app.current_records();

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:28}{:>10}{:>10}{:>16}{:>16}",
            "Derived value", "Value", "%", "Lesser", "Greater"
        ),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    for record in records.iter().skip(app.table_scroll) {
        lines.push(format_record(record));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Derived Values "));

    f.render_widget(paragraph, area);
}

fn format_record(record: &DerivedRecord) -> Line<'static> {
    let (lesser, greater) = match (&record.lesser, &record.greater) {
        (Some(lesser), Some(greater)) => (format_breakpoint(lesser), format_breakpoint(greater)),
        _ if record.has_breakpoints => ("below base".to_string(), "below base".to_string()),
        _ => ("-".to_string(), "-".to_string()),
    };
    let breakpoint_color = if record.lesser.is_some() {
        Color::Green
    } else {
        Color::DarkGray
    };

    Line::from(vec![
        Span::styled(
            format!("{:28}", record.display_name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:>10}", record.formatted_value),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:>10}", record.percent.as_deref().unwrap_or("")),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:>16}", lesser),
            Style::default().fg(breakpoint_color),
        ),
        Span::styled(
            format!("{:>16}", greater),
            Style::default().fg(breakpoint_color),
        ),
    ])
}

fn format_breakpoint(breakpoint: &BreakpointRecord) -> String {
    let marker = if breakpoint.exhausted { "?" } else { "" };
    format!("{} ({}){}", breakpoint.value, breakpoint.delta, marker)
}
