use crate::error::FormError;
use crate::models::{Difficulty, QuizParams};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const MIN_QUESTIONS: u32 = 5;
pub const MAX_QUESTIONS: u32 = 20;
pub const DEFAULT_QUESTIONS: u32 = 5;

/// Single-line text input with a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let idx = self.byte_index(self.cursor - 1);
            self.value.remove(idx);
            self.cursor -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Applies an editing key. Returns false when the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Password,
}

/// Shared by the login and register screens.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: AuthField,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub loading: bool,
}

impl AuthForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }

    /// Returns the credentials to send, or the inline error to show.
    pub fn validate(&self) -> Result<(String, String), FormError> {
        if self.username.value.is_empty() || self.password.value.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok((self.username.value.clone(), self.password.value.clone()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizFormField {
    #[default]
    Topic,
    Difficulty,
    Questions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizForm {
    pub topic: TextField,
    pub difficulty: Difficulty,
    pub num_questions: u32,
    pub focus: QuizFormField,
}

impl Default for QuizForm {
    fn default() -> Self {
        Self {
            topic: TextField::default(),
            difficulty: Difficulty::Easy,
            num_questions: DEFAULT_QUESTIONS,
            focus: QuizFormField::Topic,
        }
    }
}

impl QuizForm {
    /// Pre-filled form used by the dashboard's quick retake.
    pub fn prefilled(topic: &str, difficulty: &str, num_questions: u32) -> Self {
        Self {
            topic: TextField::with_value(topic),
            difficulty: Difficulty::parse(difficulty),
            num_questions: clamp_questions(num_questions),
            focus: QuizFormField::Topic,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            QuizFormField::Topic => QuizFormField::Difficulty,
            QuizFormField::Difficulty => QuizFormField::Questions,
            QuizFormField::Questions => QuizFormField::Topic,
        };
    }

    pub fn previous_field(&mut self) {
        self.focus = match self.focus {
            QuizFormField::Topic => QuizFormField::Questions,
            QuizFormField::Difficulty => QuizFormField::Topic,
            QuizFormField::Questions => QuizFormField::Difficulty,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            QuizFormField::Topic => {
                self.topic.handle_key(key);
            }
            QuizFormField::Difficulty => match key.code {
                KeyCode::Left => self.difficulty = self.difficulty.previous(),
                KeyCode::Right | KeyCode::Char(' ') => self.difficulty = self.difficulty.next(),
                _ => {}
            },
            QuizFormField::Questions => match key.code {
                KeyCode::Left | KeyCode::Char('-') => {
                    self.num_questions = clamp_questions(self.num_questions.saturating_sub(1))
                }
                KeyCode::Right | KeyCode::Char('+') => {
                    self.num_questions = clamp_questions(self.num_questions + 1)
                }
                _ => {}
            },
        }
    }

    pub fn validate(&self) -> Result<QuizParams, FormError> {
        if self.topic.is_blank() {
            return Err(FormError::MissingTopic);
        }
        Ok(QuizParams {
            topic: self.topic.value.clone(),
            difficulty: self.difficulty,
            num_questions: self.num_questions,
        })
    }
}

pub fn clamp_questions(n: u32) -> u32 {
    n.clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}
