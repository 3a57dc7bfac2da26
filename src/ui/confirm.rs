use crate::ui::layout::calculate_dialog_area;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn draw_confirmation(f: &mut Frame, title: &str, message: Vec<Line>, yes: &str, no: &str) {
    let area = calculate_dialog_area(f.area(), 60, 11);
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", yes)),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}", no)),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

pub fn draw_submit_confirmation(f: &mut Frame, answered: usize, total: usize) {
    draw_confirmation(
        f,
        "Submit Quiz",
        vec![
            Line::from("You haven't answered all questions. Submit anyway?"),
            Line::from(format!("{} / {} Answered", answered, total)),
        ],
        "Submit",
        "Keep Answering",
    );
}

pub fn draw_leave_confirmation(f: &mut Frame) {
    draw_confirmation(
        f,
        "Leave Quiz",
        vec![Line::from("Leave quiz? Progress will be lost.")],
        "Leave",
        "Stay",
    );
}
