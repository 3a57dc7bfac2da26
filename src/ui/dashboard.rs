use crate::dashboard::Dashboard;
use crate::models::AttemptSummary;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::widgets::{
    difficulty_color, draw_header, draw_help, error_style, muted_style, score_color,
};
use crate::utils::{format_attempt_date, score_band, truncate_string};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const TOPIC_WIDTH: usize = 32;

fn attempt_line(attempt: &AttemptSummary, selected: bool) -> Line<'static> {
    let band = score_band(attempt.score, attempt.total);
    let marker = if selected { "> " } else { "  " };
    let topic_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::from(marker),
        Span::styled(
            format!("{:<6}", attempt.difficulty.to_uppercase()),
            Style::default().fg(difficulty_color(&attempt.difficulty)),
        ),
        Span::from("  "),
        Span::styled(
            format!(
                "{:<width$}",
                truncate_string(&attempt.topic, TOPIC_WIDTH),
                width = TOPIC_WIDTH
            ),
            topic_style,
        ),
        Span::from("  "),
        Span::styled(
            format!("{:>3} / {:<3}", attempt.score, attempt.total),
            Style::default()
                .fg(score_color(band))
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("  "),
        Span::styled(
            format_attempt_date(attempt.completed_at.as_ref()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

pub fn draw_dashboard(f: &mut Frame, dashboard: &Dashboard, username: Option<&str>) {
    let layout = calculate_screen_chunks(f.area());

    let title = match username {
        Some(name) => format!("Quiz Dashboard - {}", name),
        None => "Quiz Dashboard".to_string(),
    };
    draw_header(f, layout.header_area, &title);

    let items: Vec<ListItem> = if dashboard.loading {
        vec![ListItem::new("Loading quiz history...").style(muted_style())]
    } else if let Some(error) = &dashboard.error {
        vec![ListItem::new(error.clone()).style(error_style())]
    } else if dashboard.attempts.is_empty() {
        vec![ListItem::new("Generate your first quiz to get started!").style(muted_style())]
    } else {
        dashboard
            .attempts
            .iter()
            .enumerate()
            .map(|(i, attempt)| ListItem::new(attempt_line(attempt, i == dashboard.selected)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("Quiz History ({})", dashboard.attempts.len())),
    );
    f.render_widget(list, layout.body_area);

    draw_help(
        f,
        layout.footer_area,
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Review"),
            ("n", "New Quiz"),
            ("r", "Quick Retake"),
            ("g", "Refresh"),
            ("o", "Logout"),
            ("q", "Quit"),
        ],
    );
}
