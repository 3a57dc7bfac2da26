use crate::forms::QuizForm;
use crate::logger;
use crate::models::{AnswerSelection, AppState, QuizDetail, QuizParams, QuizQuestion, QuizResult};
use crate::retake::{self, HandoffChannel, RetakePayload};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Active,
    Submitted,
    /// Retake requested but the hand-off payload was missing or unreadable.
    RetakeUnavailable,
}

/// Where a session's questions came from, which decides how it is scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOrigin {
    Remote { quiz_id: String },
    LocalRetake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit, already submitted, or a remote submission is in flight.
    Ignored,
    NeedsConfirmation { answered: usize, total: usize },
    Scored(QuizResult),
    Remote {
        quiz_id: String,
        answers: AnswerSelection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionReview {
    Correct,
    Wrong,
    Unanswered,
    /// The backend did not reveal the correct answer.
    Unknown,
}

/// What the quiz screen asks the application shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    Create(QuizParams),
    SubmitRemote {
        quiz_id: String,
        answers: AnswerSelection,
    },
    NewQuiz,
    ToDashboard,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub phase: SessionPhase,
    pub form: QuizForm,
    pub topic: String,
    pub difficulty: String,
    pub questions: Vec<QuizQuestion>,
    pub selections: AnswerSelection,
    pub result: Option<QuizResult>,
    pub origin: Option<SessionOrigin>,
    pub error: Option<String>,
    pub current_index: usize,
    pub highlighted_option: usize,
    pub submitting: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_form(QuizForm::default())
    }

    pub fn with_form(form: QuizForm) -> Self {
        Self {
            phase: SessionPhase::Idle,
            form,
            topic: String::new(),
            difficulty: String::new(),
            questions: Vec::new(),
            selections: AnswerSelection::new(),
            result: None,
            origin: None,
            error: None,
            current_index: 0,
            highlighted_option: 0,
            submitting: false,
        }
    }

    /// A session replaying a retake payload; starts directly in `Active`.
    pub fn from_retake(payload: RetakePayload) -> Self {
        let mut session = Self::new();
        session.form = QuizForm::prefilled(
            &payload.topic,
            &payload.difficulty,
            payload.questions.len() as u32,
        );
        session.topic = payload.topic;
        session.difficulty = payload.difficulty;
        session.questions = payload.questions;
        session.origin = Some(SessionOrigin::LocalRetake);
        session.phase = SessionPhase::Active;
        session
    }

    /// Builds the session for a quiz screen entered in retake mode.
    pub fn load_retake(channel: &HandoffChannel) -> Self {
        match retake::load_retake_session(channel) {
            Ok(payload) => Self::from_retake(payload),
            Err(e) => {
                logger::log(&format!("Retake load failed: {}", e));
                let mut session = Self::new();
                session.phase = SessionPhase::RetakeUnavailable;
                session.error = Some(e.to_string());
                session
            }
        }
    }

    pub fn is_retake(&self) -> bool {
        self.origin == Some(SessionOrigin::LocalRetake)
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_fully_answered(&self) -> bool {
        self.answered_count() >= self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// Validates the form and moves to `Loading`. Returns the parameters to send.
    pub fn begin_create(&mut self) -> Option<QuizParams> {
        if self.phase != SessionPhase::Idle {
            return None;
        }
        match self.form.validate() {
            Ok(params) => {
                self.questions.clear();
                self.selections.clear();
                self.result = None;
                self.origin = None;
                self.error = None;
                self.current_index = 0;
                self.highlighted_option = 0;
                self.phase = SessionPhase::Loading;
                Some(params)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn apply_quiz_ready(&mut self, quiz: QuizDetail) {
        if self.phase != SessionPhase::Loading {
            return;
        }
        self.topic = if quiz.topic.is_empty() {
            self.form.topic.value.clone()
        } else {
            quiz.topic
        };
        self.difficulty = if quiz.difficulty.is_empty() {
            self.form.difficulty.as_str().to_string()
        } else {
            quiz.difficulty
        };
        self.questions = quiz.questions;
        self.origin = Some(SessionOrigin::Remote {
            quiz_id: quiz.quiz_id,
        });
        self.phase = SessionPhase::Active;
    }

    pub fn apply_create_failed(&mut self, message: String) {
        if self.phase == SessionPhase::Loading {
            self.phase = SessionPhase::Idle;
            self.error = Some(message);
        }
    }

    /// Returns whether the selection was recorded.
    pub fn select_option(&mut self, question_id: &str, option: &str) -> bool {
        if self.phase != SessionPhase::Active {
            return false;
        }
        if !self.questions.iter().any(|q| q.id == question_id) {
            return false;
        }
        self.selections.set(question_id, option);
        true
    }

    pub fn submit(&mut self, confirmed: bool) -> SubmitOutcome {
        if self.phase != SessionPhase::Active || self.submitting {
            return SubmitOutcome::Ignored;
        }

        let Some(origin) = self.origin.clone() else {
            return SubmitOutcome::Ignored;
        };

        if !confirmed && !self.is_fully_answered() {
            return SubmitOutcome::NeedsConfirmation {
                answered: self.answered_count(),
                total: self.questions.len(),
            };
        }

        self.error = None;
        match origin {
            SessionOrigin::LocalRetake => {
                let result = retake::score_locally(&self.questions, &self.selections);
                self.phase = SessionPhase::Submitted;
                self.result = Some(result);
                self.current_index = 0;
                logger::log(&format!(
                    "Retake scored locally: {}/{}",
                    result.score, result.total
                ));
                SubmitOutcome::Scored(result)
            }
            SessionOrigin::Remote { quiz_id } => {
                if self.questions.is_empty() {
                    return SubmitOutcome::Ignored;
                }
                self.submitting = true;
                SubmitOutcome::Remote {
                    quiz_id,
                    answers: self.selections.clone(),
                }
            }
        }
    }

    pub fn apply_remote_result(&mut self, quiz_id: &str, result: QuizResult) {
        let matches = matches!(&self.origin, Some(SessionOrigin::Remote { quiz_id: id }) if id == quiz_id);
        if !matches || self.phase != SessionPhase::Active {
            return;
        }
        self.submitting = false;
        self.phase = SessionPhase::Submitted;
        self.result = Some(result);
        self.current_index = 0;
    }

    pub fn apply_submit_failed(&mut self, message: String) {
        if self.submitting {
            self.submitting = false;
            self.error = Some(message);
        }
    }

    pub fn review(&self, question: &QuizQuestion) -> QuestionReview {
        match self.selections.get(&question.id) {
            None => QuestionReview::Unanswered,
            Some(_) if question.correct_answer.is_empty() => QuestionReview::Unknown,
            Some(selected) if selected == question.correct_answer => QuestionReview::Correct,
            Some(_) => QuestionReview::Wrong,
        }
    }

    fn move_question(&mut self, forward: bool) {
        if forward {
            if self.current_index < self.questions.len().saturating_sub(1) {
                self.current_index += 1;
            }
        } else if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.highlighted_option = self.selected_option_index().unwrap_or(0);
    }

    fn selected_option_index(&self) -> Option<usize> {
        let question = self.current_question()?;
        let selected = self.selections.get(&question.id)?;
        question.options.iter().position(|o| o == selected)
    }

    fn select_option_at(&mut self, index: usize) {
        let Some(question) = self.current_question() else {
            return;
        };
        let Some(option) = question.options.get(index) else {
            return;
        };
        let (id, option) = (question.id.clone(), option.clone());
        if self.select_option(&id, &option) {
            self.highlighted_option = index;
        }
    }
}

/// Key handling for the quiz screen in every phase.
pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<QuizCommand> {
    match session.phase {
        SessionPhase::Idle => match key.code {
            KeyCode::Esc => Some(QuizCommand::ToDashboard),
            KeyCode::Tab | KeyCode::Down => {
                session.form.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                session.form.previous_field();
                None
            }
            KeyCode::Enter => session.begin_create().map(QuizCommand::Create),
            _ => {
                session.form.handle_key(key);
                None
            }
        },
        SessionPhase::Loading => match key.code {
            KeyCode::Esc => Some(QuizCommand::ToDashboard),
            _ => None,
        },
        SessionPhase::RetakeUnavailable => match key.code {
            KeyCode::Esc | KeyCode::Char('d') => Some(QuizCommand::ToDashboard),
            _ => None,
        },
        SessionPhase::Active => match key.code {
            KeyCode::Esc => {
                if session.questions.is_empty() {
                    Some(QuizCommand::ToDashboard)
                } else {
                    *app_state = AppState::QuizLeaveConfirm;
                    None
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                session.move_question(true);
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                session.move_question(false);
                None
            }
            KeyCode::Left => {
                session.highlighted_option = session.highlighted_option.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                let option_count = session
                    .current_question()
                    .map(|q| q.options.len())
                    .unwrap_or(0);
                if session.highlighted_option + 1 < option_count {
                    session.highlighted_option += 1;
                }
                None
            }
            KeyCode::Char(' ') => {
                session.select_option_at(session.highlighted_option);
                None
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
                session.select_option_at(index);
                None
            }
            KeyCode::Enter => match session.submit(false) {
                SubmitOutcome::NeedsConfirmation { .. } => {
                    *app_state = AppState::QuizSubmitConfirm;
                    None
                }
                SubmitOutcome::Remote { quiz_id, answers } => {
                    Some(QuizCommand::SubmitRemote { quiz_id, answers })
                }
                SubmitOutcome::Scored(_) | SubmitOutcome::Ignored => None,
            },
            _ => None,
        },
        SessionPhase::Submitted => match key.code {
            KeyCode::Down | KeyCode::Tab => {
                session.move_question(true);
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                session.move_question(false);
                None
            }
            KeyCode::Char('n') => Some(QuizCommand::NewQuiz),
            KeyCode::Esc | KeyCode::Char('d') => Some(QuizCommand::ToDashboard),
            _ => None,
        },
    }
}

/// Key handling for the partial-submission confirmation dialog.
pub fn handle_submit_confirm_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<QuizCommand> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            *app_state = AppState::Quiz;
            match session.submit(true) {
                SubmitOutcome::Remote { quiz_id, answers } => {
                    Some(QuizCommand::SubmitRemote { quiz_id, answers })
                }
                _ => None,
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::TextField;
    use crate::models::{AttemptDetail, AttemptQuestion};
    use crate::retake::prepare_retake;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn question(id: &str, options: &[&str], correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question_text: format!("Question {}", id),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn retake_session() -> QuizSession {
        QuizSession::from_retake(RetakePayload {
            topic: "general".to_string(),
            difficulty: "easy".to_string(),
            questions: vec![
                question("q1", &["Paris", "Rome", "Madrid"], "Paris"),
                question("q2", &["3", "4", "5"], "4"),
                question("q3", &["O(n)", "O(log n)", "O(1)"], "O(log n)"),
            ],
        })
    }

    fn remote_session() -> QuizSession {
        let mut session = QuizSession::new();
        session.form.topic = TextField::with_value("rust");
        session.begin_create().unwrap();
        session.apply_quiz_ready(QuizDetail {
            quiz_id: "quiz-1".to_string(),
            topic: "rust".to_string(),
            difficulty: "easy".to_string(),
            questions: vec![
                question("q1", &["yes", "no"], "yes"),
                question("q2", &["yes", "no"], "no"),
            ],
        });
        session
    }

    #[test]
    fn test_retake_session_starts_active() {
        let session = retake_session();
        assert_eq!(session.phase, SessionPhase::Active);
        assert!(session.is_retake());
        assert!(session.selections.is_empty());
        assert!(session.result.is_none());
        assert_eq!(session.form.num_questions, 5);
    }

    #[test]
    fn test_local_scoring_scenario() {
        let mut session = retake_session();
        assert!(session.select_option("q1", "Paris"));
        assert!(session.select_option("q2", "5"));

        assert_eq!(
            session.submit(false),
            SubmitOutcome::NeedsConfirmation {
                answered: 2,
                total: 3
            }
        );
        assert_eq!(session.phase, SessionPhase::Active);

        let outcome = session.submit(true);
        assert_eq!(
            outcome,
            SubmitOutcome::Scored(QuizResult { score: 1, total: 3 })
        );
        assert_eq!(session.phase, SessionPhase::Submitted);
        assert_eq!(session.result, Some(QuizResult { score: 1, total: 3 }));
    }

    #[test]
    fn test_selection_overwrites_and_rejects_unknown_ids() {
        let mut session = retake_session();
        session.select_option("q1", "Rome");
        session.select_option("q1", "Paris");
        assert_eq!(session.selections.get("q1"), Some("Paris"));
        assert!(!session.select_option("missing", "Paris"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_selection_ignored_after_submit() {
        let mut session = retake_session();
        session.select_option("q1", "Paris");
        session.submit(true);
        assert!(!session.select_option("q1", "Rome"));
        assert_eq!(session.selections.get("q1"), Some("Paris"));
        assert_eq!(session.submit(true), SubmitOutcome::Ignored);
    }

    #[test]
    fn test_zero_question_retake_scores_empty() {
        let mut session = QuizSession::from_retake(RetakePayload {
            topic: String::new(),
            difficulty: "easy".to_string(),
            questions: Vec::new(),
        });
        assert_eq!(
            session.submit(false),
            SubmitOutcome::Scored(QuizResult { score: 0, total: 0 })
        );
    }

    #[test]
    fn test_review_marks_each_question() {
        let mut session = retake_session();
        session.select_option("q1", "Paris");
        session.select_option("q2", "5");
        session.submit(true);

        assert_eq!(session.review(&session.questions[0]), QuestionReview::Correct);
        assert_eq!(session.review(&session.questions[1]), QuestionReview::Wrong);
        assert_eq!(
            session.review(&session.questions[2]),
            QuestionReview::Unanswered
        );
    }

    #[test]
    fn test_load_retake_without_payload() {
        let channel = HandoffChannel::new();
        let session = QuizSession::load_retake(&channel);
        assert_eq!(session.phase, SessionPhase::RetakeUnavailable);
        assert!(session.questions.is_empty());
        assert_eq!(
            session.error.as_deref(),
            Some("No retake quiz data found. Please select an attempt again.")
        );
    }

    #[test]
    fn test_load_retake_malformed_payload() {
        let mut channel = HandoffChannel::new();
        channel.write("[1, 2".to_string());
        let mut session = QuizSession::load_retake(&channel);
        assert_eq!(session.phase, SessionPhase::RetakeUnavailable);
        assert_eq!(
            session.error.as_deref(),
            Some("Failed to load retake quiz data.")
        );
        assert_eq!(session.submit(true), SubmitOutcome::Ignored);
    }

    #[test]
    fn test_load_retake_from_prepared_attempt() {
        let mut channel = HandoffChannel::new();
        let attempt = AttemptDetail {
            attempt_id: "a1".to_string(),
            quiz_id: "z1".to_string(),
            topic: "math".to_string(),
            difficulty: "hard".to_string(),
            score: 1,
            total: 1,
            completed_at: None,
            questions: vec![AttemptQuestion {
                id: "q1".to_string(),
                question_text: "1+1?".to_string(),
                options: vec!["1".to_string(), "2".to_string()],
                correct_answer: "2".to_string(),
                selected_answer: Some("2".to_string()),
                is_correct: true,
            }],
        };
        prepare_retake(&mut channel, &attempt).unwrap();

        let first = QuizSession::load_retake(&channel);
        let second = QuizSession::load_retake(&channel);
        assert_eq!(first.questions, second.questions);
        assert_eq!(first.questions[0].correct_answer, "2");
        assert!(first.selections.is_empty());
        assert_eq!(first.topic, "math");
    }

    #[test]
    fn test_begin_create_requires_topic() {
        let mut session = QuizSession::new();
        assert!(session.begin_create().is_none());
        assert_eq!(session.error.as_deref(), Some("Please enter a topic."));
        assert_eq!(session.phase, SessionPhase::Idle);
    }

    #[test]
    fn test_create_flow_and_remote_submit() {
        let mut session = remote_session();
        assert_eq!(session.phase, SessionPhase::Active);
        assert_eq!(
            session.origin,
            Some(SessionOrigin::Remote {
                quiz_id: "quiz-1".to_string()
            })
        );

        session.select_option("q1", "yes");
        session.select_option("q2", "yes");
        let outcome = session.submit(false);
        assert!(matches!(outcome, SubmitOutcome::Remote { ref quiz_id, .. } if quiz_id == "quiz-1"));
        assert!(session.submitting);
        assert_eq!(session.submit(true), SubmitOutcome::Ignored);

        session.apply_remote_result("quiz-1", QuizResult { score: 1, total: 2 });
        assert_eq!(session.phase, SessionPhase::Submitted);
        assert!(!session.submitting);
        assert_eq!(session.result, Some(QuizResult { score: 1, total: 2 }));
    }

    #[test]
    fn test_remote_submit_failure_keeps_session_active() {
        let mut session = remote_session();
        session.submit(true);
        session.apply_submit_failed("Quiz not found".to_string());
        assert_eq!(session.phase, SessionPhase::Active);
        assert!(!session.submitting);
        assert_eq!(session.error.as_deref(), Some("Quiz not found"));
    }

    #[test]
    fn test_remote_result_for_other_quiz_is_ignored() {
        let mut session = remote_session();
        session.submit(true);
        session.apply_remote_result("quiz-2", QuizResult { score: 2, total: 2 });
        assert_eq!(session.phase, SessionPhase::Active);
    }

    #[test]
    fn test_create_failure_returns_to_form() {
        let mut session = QuizSession::new();
        session.form.topic = TextField::with_value("rust");
        session.begin_create();
        assert_eq!(session.phase, SessionPhase::Loading);
        session.apply_create_failed("AI returned empty response".to_string());
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.error.as_deref(), Some("AI returned empty response"));
        assert_eq!(session.form.topic.value, "rust");
    }

    #[test]
    fn test_letter_keys_select_options() {
        let mut session = retake_session();
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('b')), &mut state);
        assert_eq!(session.selections.get("q1"), Some("Rome"));
        assert_eq!(session.highlighted_option, 1);

        handle_quiz_input(&mut session, key(KeyCode::Char('z')), &mut state);
        assert_eq!(session.selections.get("q1"), Some("Rome"));
    }

    #[test]
    fn test_highlight_and_space_select() {
        let mut session = retake_session();
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        assert_eq!(session.highlighted_option, 2);
        handle_quiz_input(&mut session, key(KeyCode::Char(' ')), &mut state);
        assert_eq!(session.selections.get("q2"), Some("5"));
    }

    #[test]
    fn test_navigation_restores_highlight() {
        let mut session = retake_session();
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('c')), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut state);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.highlighted_option, 0);
        handle_quiz_input(&mut session, key(KeyCode::Up), &mut state);
        assert_eq!(session.highlighted_option, 2);
        handle_quiz_input(&mut session, key(KeyCode::Up), &mut state);
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_enter_with_partial_answers_asks_confirmation() {
        let mut session = retake_session();
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('a')), &mut state);
        let command = handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        assert!(command.is_none());
        assert_eq!(state, AppState::QuizSubmitConfirm);

        handle_submit_confirm_input(&mut session, key(KeyCode::Char('n')), &mut state);
        assert_eq!(state, AppState::Quiz);
        assert_eq!(session.phase, SessionPhase::Active);

        state = AppState::QuizSubmitConfirm;
        handle_submit_confirm_input(&mut session, key(KeyCode::Char('y')), &mut state);
        assert_eq!(state, AppState::Quiz);
        assert_eq!(session.phase, SessionPhase::Submitted);
        assert_eq!(session.result, Some(QuizResult { score: 1, total: 3 }));
    }

    #[test]
    fn test_enter_on_complete_remote_quiz_submits() {
        let mut session = remote_session();
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('a')), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Char('b')), &mut state);
        let command = handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        match command {
            Some(QuizCommand::SubmitRemote { quiz_id, answers }) => {
                assert_eq!(quiz_id, "quiz-1");
                assert_eq!(answers.get("q1"), Some("yes"));
                assert_eq!(answers.get("q2"), Some("no"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_escape_asks_before_leaving() {
        let mut session = retake_session();
        let mut state = AppState::Quiz;
        assert!(handle_quiz_input(&mut session, key(KeyCode::Esc), &mut state).is_none());
        assert_eq!(state, AppState::QuizLeaveConfirm);

        session.submit(true);
        state = AppState::Quiz;
        assert_eq!(
            handle_quiz_input(&mut session, key(KeyCode::Esc), &mut state),
            Some(QuizCommand::ToDashboard)
        );
    }

    #[test]
    fn test_form_keys_in_idle_phase() {
        let mut session = QuizSession::new();
        let mut state = AppState::Quiz;
        for c in "sql".chars() {
            handle_quiz_input(&mut session, key(KeyCode::Char(c)), &mut state);
        }
        handle_quiz_input(&mut session, key(KeyCode::Tab), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        let command = handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        match command {
            Some(QuizCommand::Create(params)) => {
                assert_eq!(params.topic, "sql");
                assert_eq!(params.difficulty, crate::models::Difficulty::Medium);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(session.phase, SessionPhase::Loading);
        assert!(handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state).is_none());
        assert_eq!(
            handle_quiz_input(&mut session, key(KeyCode::Esc), &mut state),
            Some(QuizCommand::ToDashboard)
        );
    }
}
