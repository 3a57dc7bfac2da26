use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A question as the quiz-taking screen sees it, whatever endpoint it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub question_text: String,
    pub options: Vec<String>,
    /// Empty when the backend withholds the answer until submission.
    #[serde(rename = "answer", default)]
    pub correct_answer: String,
}

/// A question inside an attempt detail, carrying the backend's own field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub selected_answer: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub attempt_id: String,
    pub quiz_id: String,
    pub topic: String,
    pub difficulty: String,
    pub score: u32,
    pub total: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptDetail {
    pub attempt_id: String,
    pub quiz_id: String,
    pub topic: String,
    pub difficulty: String,
    pub score: u32,
    pub total: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<AttemptQuestion>,
}

/// A freshly generated quiz as returned by the fetch-quiz endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetail {
    pub quiz_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
}

/// Question id to the single option the user picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSelection(BTreeMap<String, String>);

impl AnswerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn set(&mut self, question_id: &str, option: &str) {
        self.0.insert(question_id.to_string(), option.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Unknown values fall back to easy.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizParams {
    pub topic: String,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// How the quiz screen was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEntry {
    Create,
    Retake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Login,
    Register,
    Dashboard,
    AttemptDetail,
    Quiz,
    QuizSubmitConfirm,
    QuizLeaveConfirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Register {
        username: String,
        password: String,
    },
    Login {
        username: String,
        password: String,
    },
    CreateQuiz {
        token: Option<String>,
        params: QuizParams,
    },
    SubmitQuiz {
        token: Option<String>,
        quiz_id: String,
        answers: AnswerSelection,
    },
    FetchHistory {
        token: Option<String>,
    },
    FetchAttempt {
        token: Option<String>,
        attempt_id: String,
    },
}

impl ApiRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            ApiRequest::Register { .. } => RequestKind::Register,
            ApiRequest::Login { .. } => RequestKind::Login,
            ApiRequest::CreateQuiz { .. } => RequestKind::CreateQuiz,
            ApiRequest::SubmitQuiz { .. } => RequestKind::SubmitQuiz,
            ApiRequest::FetchHistory { .. } => RequestKind::FetchHistory,
            ApiRequest::FetchAttempt { .. } => RequestKind::FetchAttempt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Register,
    Login,
    CreateQuiz,
    SubmitQuiz,
    FetchHistory,
    FetchAttempt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Registered,
    LoggedIn {
        username: String,
        tokens: TokenPair,
    },
    QuizReady(QuizDetail),
    QuizSubmitted {
        quiz_id: String,
        result: QuizResult,
    },
    History(Vec<AttemptSummary>),
    Attempt(AttemptDetail),
    Failed {
        request: RequestKind,
        message: String,
    },
}
