use crate::dashboard::AttemptView;
use crate::models::{AttemptDetail, AttemptQuestion};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::widgets::{
    correct_style, difficulty_color, draw_header, draw_help, error_style, muted_style,
    option_line, score_color,
};
use crate::utils::{format_attempt_date, score_band};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn question_lines(number: usize, question: &AttemptQuestion) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let (verdict, verdict_style) = if question.is_correct {
        ("Correct", correct_style())
    } else {
        ("Wrong", error_style())
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("Q{}. {}", number, question.question_text),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("  "),
        Span::styled(verdict, verdict_style),
    ]));

    let selected = question.selected_answer.as_deref();
    for (i, option) in question.options.iter().enumerate() {
        let is_correct_option = *option == question.correct_answer;
        let is_selected = selected == Some(option.as_str());
        let line = if is_correct_option {
            option_line(i, option, correct_style(), is_selected.then_some("your answer"))
        } else if is_selected {
            option_line(i, option, error_style(), Some("your answer"))
        } else {
            option_line(i, option, Style::default(), None)
        };
        lines.push(line);
    }

    let your_answer = match selected {
        Some(answer) => Span::styled(
            answer.to_string(),
            if question.is_correct {
                correct_style()
            } else {
                error_style()
            },
        ),
        None => Span::styled("Not Answered", muted_style()),
    };
    lines.push(Line::from(vec![Span::from("  Your Answer: "), your_answer]));
    lines.push(Line::from(vec![
        Span::from("  Correct Answer: "),
        Span::styled(question.correct_answer.clone(), correct_style()),
    ]));
    lines.push(Line::from(""));
    lines
}

pub fn attempt_lines(detail: &AttemptDetail) -> Vec<Line<'static>> {
    let band = score_band(detail.score, detail.total);
    let mut lines = vec![
        Line::from(vec![
            Span::from("Difficulty: "),
            Span::styled(
                detail.difficulty.to_uppercase(),
                Style::default().fg(difficulty_color(&detail.difficulty)),
            ),
        ]),
        Line::from(format!(
            "Completed: {}",
            format_attempt_date(detail.completed_at.as_ref())
        )),
        Line::from(vec![
            Span::from("Score: "),
            Span::styled(
                format!("{} / {}", detail.score, detail.total),
                Style::default()
                    .fg(score_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (i, question) in detail.questions.iter().enumerate() {
        lines.extend(question_lines(i + 1, question));
    }
    lines
}

pub fn draw_attempt_detail(f: &mut Frame, view: &AttemptView) {
    let layout = calculate_screen_chunks(f.area());

    let title = match &view.detail {
        Some(detail) => format!("Attempt Review - {}", detail.topic),
        None => "Attempt Review".to_string(),
    };
    draw_header(f, layout.header_area, &title);

    let content = if let Some(detail) = &view.detail {
        attempt_lines(detail)
    } else if let Some(error) = &view.error {
        vec![Line::from(Span::styled(error.clone(), error_style()))]
    } else {
        vec![Line::from(Span::styled("Loading attempt...", muted_style()))]
    };

    let body = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(body, layout.body_area);

    let hints: &[(&str, &str)] = if view.detail.is_some() {
        &[
            ("↑/↓", "Scroll"),
            ("r", "Retake Same Questions"),
            ("Esc", "Back to Dashboard"),
        ]
    } else {
        &[("Esc", "Back to Dashboard")]
    };
    draw_help(f, layout.footer_area, hints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn question(selected: Option<&str>, is_correct: bool) -> AttemptQuestion {
        AttemptQuestion {
            id: "q1".to_string(),
            question_text: "Capital of France?".to_string(),
            options: vec!["Berlin".to_string(), "Paris".to_string()],
            correct_answer: "Paris".to_string(),
            selected_answer: selected.map(str::to_string),
            is_correct,
        }
    }

    fn detail(questions: Vec<AttemptQuestion>) -> AttemptDetail {
        AttemptDetail {
            attempt_id: "a1".to_string(),
            quiz_id: "quiz-1".to_string(),
            topic: "Geography".to_string(),
            difficulty: "hard".to_string(),
            score: 1,
            total: 1,
            completed_at: None,
            questions,
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrong_answer_lines() {
        let lines = question_lines(1, &question(Some("Berlin"), false));
        let texts: Vec<String> = lines.iter().map(text_of).collect();

        assert_eq!(texts[0], "Q1. Capital of France?  Wrong");
        assert_eq!(texts[1], "  A. Berlin  (your answer)");
        assert_eq!(texts[2], "  B. Paris");
        assert_eq!(texts[3], "  Your Answer: Berlin");
        assert_eq!(texts[4], "  Correct Answer: Paris");
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_unanswered_question() {
        let lines = question_lines(2, &question(None, false));
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts[3], "  Your Answer: Not Answered");
    }

    #[test]
    fn test_correct_selection_marked_green() {
        let lines = question_lines(1, &question(Some("Paris"), true));
        assert_eq!(text_of(&lines[0]), "Q1. Capital of France?  Correct");
        assert_eq!(text_of(&lines[2]), "  B. Paris  (your answer)");
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_draw_detail_with_retake_hint() {
        let mut view = AttemptView::default();
        view.begin_load("a1");
        view.apply_detail(detail(vec![question(Some("Paris"), true)]));

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_attempt_detail(f, &view)).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(content.contains("Attempt Review - Geography"));
        assert!(content.contains("Retake Same Questions"));
        assert!(content.contains("Score: 1 / 1"));
    }

    #[test]
    fn test_draw_loading() {
        let mut view = AttemptView::default();
        view.begin_load("a1");

        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_attempt_detail(f, &view)).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(content.contains("Loading attempt..."));
        assert!(!content.contains("Retake Same Questions"));
    }
}
