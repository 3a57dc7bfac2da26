use crate::utils::{option_letter, ScoreBand};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn score_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

pub fn difficulty_color(difficulty: &str) -> Color {
    match difficulty.to_lowercase().as_str() {
        "hard" => Color::Red,
        "medium" => Color::Yellow,
        _ => Color::Green,
    }
}

pub fn correct_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// An option row such as `  B. Paris`, with an optional trailing tag.
pub fn option_line(index: usize, option: &str, style: Style, tag: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("  {}. {}", option_letter(index), option),
        style,
    )];
    if let Some(tag) = tag {
        spans.push(Span::styled(format!("  ({})", tag), style));
    }
    Line::from(spans)
}

/// One footer line of `key description` pairs.
pub fn help_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, key_style()));
        spans.push(Span::from(format!(" {}  ", description)));
    }
    Line::from(spans)
}

pub fn draw_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(title_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn draw_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let help = Paragraph::new(vec![help_line(hints)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
