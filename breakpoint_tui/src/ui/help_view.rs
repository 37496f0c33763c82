//! Help view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::section_header;

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-9", "Jump to stat"),
        key_line("Tab / Shift+Tab", "Next/previous stat"),
        key_line("↑/k  ↓/j", "Scroll derived values"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Editing"),
        key_line("+ / → / l", "Raise stat by 1"),
        key_line("- / ← / h", "Lower stat by 1"),
        key_line("Enter / e", "Type a value (Enter applies, Esc cancels)"),
        key_line("r", "Reset stat to base"),
        Line::from(""),
        section_header("Formulas"),
        Line::from(""),
        Line::from(Span::styled(
            "Extra:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  extra = floor(rate × (stat - base) / 3300)"),
        Line::from(""),
        Line::from(Span::styled(
            "Breakpoints:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Lesser: nearest stat value where the result drops"),
        Line::from("  Greater: nearest stat value where the result rises"),
        Line::from("  Recast and damage taken move opposite to the stat"),
        Line::from("  Not searched below base; '?' marks a search that hit its step cap"),
        Line::from(""),
        Line::from(Span::styled(
            "Recast:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  floor((1000 - extra) × base_ms / 1000) / 1000, rounded down to 0.01s"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
