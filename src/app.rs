use crate::dashboard::{AttemptView, Dashboard};
use crate::db;
use crate::forms::{AuthForm, QuizForm};
use crate::logger;
use crate::models::{ApiRequest, ApiResponse, AppState, QuizEntry, RequestKind};
use crate::retake::{self, HandoffChannel};
use crate::session::{self, QuizCommand, QuizSession};
use crate::ui::{self, AuthScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use rusqlite::Connection;
use std::sync::mpsc::Sender;

const REGISTERED_NOTICE: &str = "Account created. Please log in.";
const WORKER_GONE: &str = "Backend worker is not running";

/// Every screen's state plus the plumbing shared between them.
pub struct App {
    pub state: AppState,
    pub login: AuthForm,
    pub register: AuthForm,
    pub dashboard: Dashboard,
    pub attempt: AttemptView,
    pub quiz: QuizSession,
    pub handoff: HandoffChannel,
    pub token: Option<String>,
    pub username: Option<String>,
    pub should_quit: bool,
    conn: Connection,
    api_tx: Sender<ApiRequest>,
}

impl App {
    /// Opens the dashboard when a stored token exists, otherwise the login screen.
    pub fn new(api_tx: Sender<ApiRequest>, conn: Connection) -> Self {
        let mut app = Self {
            state: AppState::Login,
            login: AuthForm::default(),
            register: AuthForm::default(),
            dashboard: Dashboard::default(),
            attempt: AttemptView::default(),
            quiz: QuizSession::new(),
            handoff: HandoffChannel::new(),
            token: None,
            username: None,
            should_quit: false,
            conn,
            api_tx,
        };

        match db::load_credentials(&app.conn) {
            Ok(Some(stored)) => {
                logger::log(&format!("Restored session for {}", stored.username));
                app.token = Some(stored.access_token);
                app.username = Some(stored.username);
                app.go_to_dashboard();
            }
            Ok(None) => {}
            Err(e) => logger::log(&format!("Failed to load credentials: {}", e)),
        }
        app
    }

    pub fn draw(&self, f: &mut Frame) {
        match self.state {
            AppState::Login => ui::draw_auth(f, AuthScreen::Login, &self.login),
            AppState::Register => ui::draw_auth(f, AuthScreen::Register, &self.register),
            AppState::Dashboard => {
                ui::draw_dashboard(f, &self.dashboard, self.username.as_deref())
            }
            AppState::AttemptDetail => ui::draw_attempt_detail(f, &self.attempt),
            AppState::Quiz => ui::draw_quiz(f, &self.quiz),
            AppState::QuizSubmitConfirm => {
                ui::draw_quiz(f, &self.quiz);
                ui::draw_submit_confirmation(
                    f,
                    self.quiz.answered_count(),
                    self.quiz.questions.len(),
                );
            }
            AppState::QuizLeaveConfirm => {
                ui::draw_quiz(f, &self.quiz);
                ui::draw_leave_confirmation(f);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Login => self.handle_login_key(key),
            AppState::Register => self.handle_register_key(key),
            AppState::Dashboard => self.handle_dashboard_key(key),
            AppState::AttemptDetail => self.handle_attempt_key(key),
            AppState::Quiz => {
                let command = session::handle_quiz_input(&mut self.quiz, key, &mut self.state);
                if let Some(command) = command {
                    self.run_quiz_command(command);
                }
            }
            AppState::QuizSubmitConfirm => {
                let command =
                    session::handle_submit_confirm_input(&mut self.quiz, key, &mut self.state);
                if let Some(command) = command {
                    self.run_quiz_command(command);
                }
            }
            AppState::QuizLeaveConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.leave_quiz(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state = AppState::Quiz
                }
                _ => {}
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.login.loading {
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.register.reset();
                self.state = AppState::Register;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus()
            }
            KeyCode::Enter => match self.login.validate() {
                Ok((username, password)) => {
                    self.login.error = None;
                    self.login.notice = None;
                    self.login.loading = true;
                    self.send(ApiRequest::Login { username, password });
                }
                Err(e) => self.login.error = Some(e.to_string()),
            },
            _ => {
                self.login.focused_field().handle_key(key);
            }
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        if self.register.loading {
            return;
        }
        match key.code {
            KeyCode::Esc => self.state = AppState::Login,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.register.toggle_focus()
            }
            KeyCode::Enter => match self.register.validate() {
                Ok((username, password)) => {
                    self.register.error = None;
                    self.register.loading = true;
                    self.send(ApiRequest::Register { username, password });
                }
                Err(e) => self.register.error = Some(e.to_string()),
            },
            _ => {
                self.register.focused_field().handle_key(key);
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dashboard.select_previous(),
            KeyCode::Down => self.dashboard.select_next(),
            KeyCode::Enter => {
                if let Some(attempt_id) = self
                    .dashboard
                    .selected_attempt()
                    .map(|a| a.attempt_id.clone())
                {
                    self.attempt.begin_load(&attempt_id);
                    self.state = AppState::AttemptDetail;
                    self.send(ApiRequest::FetchAttempt {
                        token: self.token.clone(),
                        attempt_id,
                    });
                }
            }
            KeyCode::Char('n') => self.enter_quiz(QuizEntry::Create),
            KeyCode::Char('r') => {
                if let Some(form) = self.dashboard.selected_attempt().map(|a| {
                    QuizForm::prefilled(&a.topic, &a.difficulty, a.total)
                }) {
                    self.enter_quiz(QuizEntry::Create);
                    self.quiz.form = form;
                }
            }
            KeyCode::Char('g') => self.refresh_history(),
            KeyCode::Char('o') => self.logout(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_attempt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::Dashboard,
            KeyCode::Up => self.attempt.scroll_up(),
            KeyCode::Down => self.attempt.scroll_down(),
            KeyCode::Char('r') => self.start_retake(),
            _ => {}
        }
    }

    /// Writes the viewed attempt into the hand-off channel and opens the quiz in retake mode.
    fn start_retake(&mut self) {
        let Some(detail) = &self.attempt.detail else {
            return;
        };
        if let Err(e) = retake::prepare_retake(&mut self.handoff, detail) {
            logger::log(&format!("Failed to prepare retake: {}", e));
            self.handoff.clear();
        }
        self.enter_quiz(QuizEntry::Retake);
    }

    fn enter_quiz(&mut self, entry: QuizEntry) {
        self.quiz = match entry {
            QuizEntry::Create => QuizSession::new(),
            QuizEntry::Retake => QuizSession::load_retake(&self.handoff),
        };
        self.state = AppState::Quiz;
    }

    fn run_quiz_command(&mut self, command: QuizCommand) {
        match command {
            QuizCommand::Create(params) => {
                logger::log(&format!(
                    "Requesting quiz: {} ({}, {} questions)",
                    params.topic,
                    params.difficulty.as_str(),
                    params.num_questions
                ));
                self.send(ApiRequest::CreateQuiz {
                    token: self.token.clone(),
                    params,
                });
            }
            QuizCommand::SubmitRemote { quiz_id, answers } => {
                self.send(ApiRequest::SubmitQuiz {
                    token: self.token.clone(),
                    quiz_id,
                    answers,
                });
            }
            QuizCommand::NewQuiz => self.enter_quiz(QuizEntry::Create),
            QuizCommand::ToDashboard => self.leave_quiz(),
        }
    }

    /// Drops the session so responses for an abandoned quiz are ignored.
    fn leave_quiz(&mut self) {
        self.quiz = QuizSession::new();
        self.go_to_dashboard();
    }

    fn go_to_dashboard(&mut self) {
        self.state = AppState::Dashboard;
        self.refresh_history();
    }

    fn refresh_history(&mut self) {
        self.dashboard.begin_load();
        self.send(ApiRequest::FetchHistory {
            token: self.token.clone(),
        });
    }

    /// Forgets the token, the stored credentials and any pending retake.
    fn logout(&mut self) {
        if let Err(e) = db::clear_credentials(&self.conn) {
            logger::log(&format!("Failed to clear credentials: {}", e));
        }
        logger::log("Logged out");
        self.token = None;
        self.username = None;
        self.handoff.clear();
        self.dashboard = Dashboard::default();
        self.attempt = AttemptView::default();
        self.quiz = QuizSession::new();
        self.login.reset();
        self.register.reset();
        self.state = AppState::Login;
    }

    fn send(&mut self, request: ApiRequest) {
        let kind = request.kind();
        if self.api_tx.send(request).is_err() {
            logger::log(&format!("Dropped {:?} request: worker channel closed", kind));
            self.handle_api_response(ApiResponse::Failed {
                request: kind,
                message: WORKER_GONE.to_string(),
            });
        }
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Registered => {
                self.register.reset();
                self.login.reset();
                self.login.notice = Some(REGISTERED_NOTICE.to_string());
                if self.state == AppState::Register {
                    self.state = AppState::Login;
                }
            }
            ApiResponse::LoggedIn { username, tokens } => {
                if let Err(e) = db::save_credentials(
                    &self.conn,
                    &username,
                    &tokens.access,
                    tokens.refresh.as_deref(),
                ) {
                    logger::log(&format!("Failed to save credentials: {}", e));
                }
                logger::log(&format!("Logged in as {}", username));
                self.token = Some(tokens.access);
                self.username = Some(username);
                self.login.reset();
                self.go_to_dashboard();
            }
            ApiResponse::QuizReady(quiz) => self.quiz.apply_quiz_ready(quiz),
            ApiResponse::QuizSubmitted { quiz_id, result } => {
                self.quiz.apply_remote_result(&quiz_id, result)
            }
            ApiResponse::History(attempts) => self.dashboard.apply_history(attempts),
            ApiResponse::Attempt(detail) => self.attempt.apply_detail(detail),
            ApiResponse::Failed { request, message } => match request {
                RequestKind::Register => {
                    self.register.loading = false;
                    self.register.error = Some(message);
                }
                RequestKind::Login => {
                    self.login.loading = false;
                    self.login.error = Some(message);
                }
                RequestKind::CreateQuiz => self.quiz.apply_create_failed(message),
                RequestKind::SubmitQuiz => self.quiz.apply_submit_failed(message),
                RequestKind::FetchHistory => self.dashboard.apply_error(message),
                RequestKind::FetchAttempt => self.attempt.apply_error(message),
            },
        }
    }
}
