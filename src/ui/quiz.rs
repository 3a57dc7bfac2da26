use crate::forms::{QuizForm, QuizFormField, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::session::{QuestionReview, QuizSession, SessionPhase};
use crate::ui::layout::{calculate_dialog_area, calculate_screen_chunks};
use crate::ui::widgets::{
    correct_style, difficulty_color, draw_header, draw_help, error_style, muted_style,
    option_line, score_color,
};
use crate::utils::score_band;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_screen_chunks(f.area());

    let title = match session.phase {
        SessionPhase::Idle | SessionPhase::Loading => "Create a Quiz".to_string(),
        SessionPhase::RetakeUnavailable => "Retake Quiz".to_string(),
        SessionPhase::Active | SessionPhase::Submitted => {
            let mode = if session.is_retake() { " (Retake)" } else { "" };
            format!(
                "{} - {}{}",
                session.topic,
                session.difficulty.to_uppercase(),
                mode
            )
        }
    };
    draw_header(f, layout.header_area, &title);

    let hints: &[(&str, &str)] = match session.phase {
        SessionPhase::Idle => {
            draw_form(f, layout.body_area, &session.form, session.error.as_deref());
            &[
                ("Tab", "Next Field"),
                ("←/→", "Change"),
                ("Enter", "Generate Quiz"),
                ("Esc", "Dashboard"),
            ]
        }
        SessionPhase::Loading => {
            draw_message(
                f,
                layout.body_area,
                Line::from(Span::styled("Generating your quiz...", muted_style())),
            );
            &[("Esc", "Back to Dashboard"), ("Ctrl+C", "Exit App")]
        }
        SessionPhase::RetakeUnavailable => {
            let message = session
                .error
                .clone()
                .unwrap_or_else(|| "No retake quiz data found.".to_string());
            draw_message(
                f,
                layout.body_area,
                Line::from(Span::styled(message, error_style())),
            );
            &[("Esc", "Back to Dashboard")]
        }
        SessionPhase::Active => {
            draw_questions(f, layout.body_area, session);
            &[
                ("↑/↓", "Question"),
                ("←/→", "Highlight"),
                ("Space", "Select"),
                ("A-Z", "Choose"),
                ("Enter", "Submit"),
                ("Esc", "Leave"),
            ]
        }
        SessionPhase::Submitted => {
            draw_results(f, layout.body_area, session);
            &[
                ("↑/↓", "Review"),
                ("n", "New Quiz"),
                ("d", "Dashboard"),
            ]
        }
    };
    draw_help(f, layout.footer_area, hints);
}

fn draw_message(f: &mut Frame, area: Rect, line: Line) {
    let message = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

fn draw_form(f: &mut Frame, area: Rect, form: &QuizForm, error: Option<&str>) {
    let form_area = calculate_dialog_area(area, 50, 12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(form_area);

    let topic_focused = form.focus == QuizFormField::Topic;
    let topic = if form.topic.value.is_empty() && !topic_focused {
        Paragraph::new(Span::styled("e.g. World Geography", muted_style()))
    } else {
        Paragraph::new(form.topic.value.clone())
    };
    f.render_widget(topic.block(field_block("Topic", topic_focused)), chunks[0]);

    let difficulty = Paragraph::new(Line::from(vec![
        Span::from("< "),
        Span::styled(
            form.difficulty.label(),
            Style::default()
                .fg(difficulty_color(form.difficulty.as_str()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" >"),
    ]))
    .block(field_block(
        "Difficulty",
        form.focus == QuizFormField::Difficulty,
    ));
    f.render_widget(difficulty, chunks[1]);

    let questions = Paragraph::new(format!("< {} >", form.num_questions)).block(field_block(
        &format!("Questions ({}-{})", MIN_QUESTIONS, MAX_QUESTIONS),
        form.focus == QuizFormField::Questions,
    ));
    f.render_widget(questions, chunks[2]);

    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(Span::styled(error.to_string(), error_style()))
                .wrap(Wrap { trim: true }),
            chunks[3],
        );
    }

    if topic_focused {
        let before_cursor: String = form.topic.value.chars().take(form.topic.cursor).collect();
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let x = (chunks[0].x + 1 + before_cursor.width() as u16).min(max_x);
        f.set_cursor_position((x, chunks[0].y + 1));
    }
}

/// Progress label shown while answering, e.g. `2 / 3 Answered`.
pub fn progress_label(session: &QuizSession) -> String {
    format!(
        "{} / {} Answered",
        session.answered_count(),
        session.questions.len()
    )
}

fn active_question_lines(session: &QuizSession) -> Vec<Line<'static>> {
    let Some(question) = session.current_question() else {
        return vec![Line::from(Span::styled(
            "This quiz has no questions.",
            muted_style(),
        ))];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            question.question_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let selected = session.selections.get(&question.id);
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let mut style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if i == session.highlighted_option {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(option_line(
            i,
            option,
            style,
            is_selected.then_some("selected"),
        ));
    }
    lines
}

fn draw_questions(f: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let title = format!(
        "Question {} / {} - {}",
        (session.current_index + 1).min(session.questions.len()),
        session.questions.len(),
        progress_label(session)
    );
    let body = Paragraph::new(active_question_lines(session))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title),
        );
    f.render_widget(body, chunks[0]);

    let status = if session.submitting {
        Line::from(Span::styled("Submitting answers...", muted_style()))
    } else if let Some(error) = &session.error {
        Line::from(Span::styled(error.clone(), error_style()))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(status), chunks[1]);
}

fn review_lines(session: &QuizSession) -> Vec<Line<'static>> {
    let Some(question) = session.current_question() else {
        return Vec::new();
    };

    let review = session.review(question);
    let (verdict, verdict_style) = match review {
        QuestionReview::Correct => ("Correct", correct_style()),
        QuestionReview::Wrong => ("Wrong", error_style()),
        QuestionReview::Unanswered => ("Not Answered", muted_style()),
        QuestionReview::Unknown => ("Answered", Style::default().fg(Color::Yellow)),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(
                "Q{}. {}",
                session.current_index + 1,
                question.question_text
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("  "),
        Span::styled(verdict, verdict_style),
    ])];

    let selected = session.selections.get(&question.id);
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let is_correct_option =
            !question.correct_answer.is_empty() && *option == question.correct_answer;
        let line = if is_correct_option {
            option_line(i, option, correct_style(), is_selected.then_some("your answer"))
        } else if is_selected && review == QuestionReview::Wrong {
            option_line(i, option, error_style(), Some("your answer"))
        } else if is_selected {
            option_line(
                i,
                option,
                Style::default().fg(Color::Yellow),
                Some("your answer"),
            )
        } else {
            option_line(i, option, Style::default(), None)
        };
        lines.push(line);
    }
    lines
}

fn draw_results(f: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let (score, total) = session
        .result
        .map(|r| (r.score, r.total))
        .unwrap_or((0, 0));
    let banner = Paragraph::new(vec![
        Line::from(Span::styled("Quiz Completed!", correct_style())),
        Line::from(vec![
            Span::from("Score: "),
            Span::styled(
                format!("{} / {}", score, total),
                Style::default()
                    .fg(score_color(score_band(score, total)))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, chunks[0]);

    let title = if session.questions.is_empty() {
        "Review".to_string()
    } else {
        format!(
            "Review {} / {}",
            session.current_index + 1,
            session.questions.len()
        )
    };
    let review = Paragraph::new(review_lines(session))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(review, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuizDetail, QuizQuestion, QuizResult};
    use crate::retake::RetakePayload;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(session: &QuizSession) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_quiz(f, session)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn question(id: &str, text: &str, options: &[&str], answer: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question_text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: answer.to_string(),
        }
    }

    fn retake_session() -> QuizSession {
        QuizSession::from_retake(RetakePayload {
            topic: "Geography".to_string(),
            difficulty: "easy".to_string(),
            questions: vec![
                question("q1", "Capital of France?", &["Berlin", "Paris"], "Paris"),
                question("q2", "2 + 2?", &["4", "5"], "4"),
            ],
        })
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_form_rendered() {
        let content = render(&QuizSession::new());
        assert!(content.contains("Create a Quiz"));
        assert!(content.contains("Topic"));
        assert!(content.contains("< Easy >"));
        assert!(content.contains("Questions (5-20)"));
        assert!(content.contains("Generate Quiz"));
    }

    #[test]
    fn test_form_error_rendered() {
        let mut session = QuizSession::new();
        assert!(session.begin_create().is_none());
        assert!(render(&session).contains("Please enter a topic."));
    }

    #[test]
    fn test_loading_rendered() {
        let mut session = QuizSession::new();
        session.form.topic.value = "Rust".to_string();
        assert!(session.begin_create().is_some());
        let content = render(&session);
        assert!(content.contains("Generating your quiz..."));
        assert!(content.contains("Back to Dashboard"));
    }

    #[test]
    fn test_active_progress_and_options() {
        let mut session = retake_session();
        session.select_option("q1", "Paris");

        assert_eq!(progress_label(&session), "1 / 2 Answered");

        let content = render(&session);
        assert!(content.contains("Geography - EASY (Retake)"));
        assert!(content.contains("1 / 2 Answered"));
        assert!(content.contains("A. Berlin"));
        assert!(content.contains("B. Paris  (selected)"));
    }

    #[test]
    fn test_highlighted_option_reversed() {
        let mut session = retake_session();
        session.highlighted_option = 1;
        let lines = active_question_lines(&session);
        assert!(
            lines[3].spans[0]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
        assert!(
            !lines[2].spans[0]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn test_results_banner() {
        let mut session = retake_session();
        session.select_option("q1", "Paris");
        session.select_option("q2", "5");
        session.submit(false);

        let content = render(&session);
        assert!(content.contains("Quiz Completed!"));
        assert!(content.contains("Score: 1 / 2"));
        assert!(content.contains("New Quiz"));
    }

    #[test]
    fn test_review_marks_wrong_selection() {
        let mut session = retake_session();
        session.select_option("q1", "Berlin");
        session.submit(true);

        let lines = review_lines(&session);
        assert_eq!(text_of(&lines[0]), "Q1. Capital of France?  Wrong");
        assert_eq!(text_of(&lines[1]), "  A. Berlin  (your answer)");
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_review_without_known_answer() {
        let mut session = QuizSession::new();
        session.form.topic.value = "Rust".to_string();
        session.begin_create();
        session.apply_quiz_ready(QuizDetail {
            quiz_id: "quiz-1".to_string(),
            topic: "Rust".to_string(),
            difficulty: "easy".to_string(),
            questions: vec![question("q1", "Borrow?", &["yes", "no"], "")],
        });
        session.select_option("q1", "yes");
        session.submit(false);
        session.apply_remote_result("quiz-1", QuizResult { score: 1, total: 1 });

        let lines = review_lines(&session);
        assert_eq!(text_of(&lines[0]), "Q1. Borrow?  Answered");
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_retake_unavailable_rendered() {
        let session = QuizSession::load_retake(&crate::retake::HandoffChannel::new());
        let content = render(&session);
        assert!(content.contains("No retake quiz data found. Please select an attempt again."));
        assert!(!content.contains("Generate Quiz"));
    }
}
