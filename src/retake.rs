//! Retake flow: snapshot a completed attempt into the hand-off channel, load it back as a
//! standalone session, and score it without the backend.

use crate::logger;
use crate::models::{AnswerSelection, AttemptDetail, AttemptQuestion, QuizQuestion, QuizResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetakeError {
    #[error("No retake quiz data found. Please select an attempt again.")]
    NoData,
    #[error("Failed to load retake quiz data.")]
    Malformed(#[source] serde_json::Error),
    #[error("Failed to store retake quiz data.")]
    Serialize(#[source] serde_json::Error),
}

fn default_difficulty() -> String {
    "easy".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetakePayload {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// Single-slot hand-off between the attempt review screen and the quiz screen.
///
/// Holds the JSON form of at most one [`RetakePayload`]. Writing replaces whatever was
/// there; reading leaves the slot untouched.
#[derive(Debug, Default)]
pub struct HandoffChannel {
    slot: Option<String>,
}

impl HandoffChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, serialized: String) {
        self.slot = Some(serialized);
    }

    pub fn read(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

/// The one place where the attempt's `correct_answer` becomes the session's answer field.
pub fn normalize_question(question: &AttemptQuestion) -> QuizQuestion {
    QuizQuestion {
        id: question.id.clone(),
        question_text: question.question_text.clone(),
        options: question.options.clone(),
        correct_answer: question.correct_answer.clone(),
    }
}

pub fn build_payload(attempt: &AttemptDetail) -> RetakePayload {
    RetakePayload {
        topic: attempt.topic.clone(),
        difficulty: attempt.difficulty.clone(),
        questions: attempt.questions.iter().map(normalize_question).collect(),
    }
}

pub fn prepare_retake(
    channel: &mut HandoffChannel,
    attempt: &AttemptDetail,
) -> Result<(), RetakeError> {
    let payload = build_payload(attempt);
    let serialized = serde_json::to_string(&payload).map_err(RetakeError::Serialize)?;
    channel.write(serialized);
    logger::log(&format!(
        "Prepared retake of attempt {} with {} questions",
        attempt.attempt_id,
        payload.questions.len()
    ));
    Ok(())
}

pub fn load_retake_session(channel: &HandoffChannel) -> Result<RetakePayload, RetakeError> {
    let stored = channel.read().ok_or(RetakeError::NoData)?;
    let payload: RetakePayload = serde_json::from_str(stored).map_err(RetakeError::Malformed)?;
    logger::log(&format!(
        "Loaded retake payload with {} questions",
        payload.questions.len()
    ));
    Ok(payload)
}

/// Counts a question only when a non-empty selection equals the correct answer.
pub fn score_locally(questions: &[QuizQuestion], answers: &AnswerSelection) -> QuizResult {
    let score = questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id)
                .filter(|selected| !selected.is_empty())
                .is_some_and(|selected| selected == q.correct_answer)
        })
        .count();

    QuizResult {
        score: score as u32,
        total: questions.len() as u32,
    }
}
