use crate::forms::{AuthField, AuthForm, TextField};
use crate::ui::layout::{calculate_dialog_area, calculate_screen_chunks};
use crate::ui::widgets::{draw_header, draw_help, error_style, muted_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Login,
    Register,
}

impl AuthScreen {
    fn title(&self) -> &'static str {
        match self {
            AuthScreen::Login => "Quiz Client - Login",
            AuthScreen::Register => "Quiz Client - Create Account",
        }
    }

    fn loading_text(&self) -> &'static str {
        match self {
            AuthScreen::Login => "Logging in...",
            AuthScreen::Register => "Creating account...",
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            AuthScreen::Login => &[
                ("Tab", "Switch Field"),
                ("Enter", "Login"),
                ("Ctrl+R", "Register"),
                ("Esc", "Quit"),
            ],
            AuthScreen::Register => &[
                ("Tab", "Switch Field"),
                ("Enter", "Create Account"),
                ("Esc", "Back to Login"),
            ],
        }
    }
}

pub fn draw_auth(f: &mut Frame, screen: AuthScreen, form: &AuthForm) {
    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area, screen.title());

    let form_area = calculate_dialog_area(layout.body_area, 50, 11);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(2),
        ])
        .split(form_area);

    let masked = "*".repeat(form.password.value.chars().count());
    draw_field(
        f,
        chunks[0],
        "Username",
        &form.username.value,
        form.focus == AuthField::Username,
    );
    draw_field(
        f,
        chunks[1],
        "Password",
        &masked,
        form.focus == AuthField::Password,
    );

    let status = if form.loading {
        Line::from(Span::styled(screen.loading_text(), muted_style()))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(error.as_str(), error_style()))
    } else if let Some(notice) = &form.notice {
        Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(
        Paragraph::new(status).wrap(Wrap { trim: true }),
        chunks[2],
    );

    if !form.loading {
        let (area, field) = match form.focus {
            AuthField::Username => (chunks[0], &form.username),
            AuthField::Password => (chunks[1], &form.password),
        };
        set_field_cursor(f, area, field, form.focus == AuthField::Password);
    }

    draw_help(f, layout.footer_area, screen.hints());
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let field = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string()),
    );
    f.render_widget(field, area);
}

fn set_field_cursor(f: &mut Frame, area: Rect, field: &TextField, masked: bool) {
    let before_cursor: String = field.value.chars().take(field.cursor).collect();
    let offset = if masked {
        before_cursor.chars().count()
    } else {
        before_cursor.width()
    };
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1 + offset as u16).min(max_x);
    f.set_cursor_position((x, area.y + 1));
}
