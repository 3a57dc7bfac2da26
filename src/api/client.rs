use crate::api::error::ApiError;
use crate::models::{
    AnswerSelection, AttemptDetail, AttemptSummary, QuizDetail, QuizParams, QuizResult,
    TokenPair,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The calls the client makes against the quiz backend.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError>;

    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// Returns the new quiz id.
    async fn create_quiz(&self, token: Option<&str>, params: &QuizParams)
    -> Result<String, ApiError>;

    async fn fetch_quiz(&self, token: Option<&str>, quiz_id: &str)
    -> Result<QuizDetail, ApiError>;

    async fn submit_quiz(
        &self,
        token: Option<&str>,
        quiz_id: &str,
        answers: &AnswerSelection,
    ) -> Result<QuizResult, ApiError>;

    async fn fetch_history(&self, token: Option<&str>) -> Result<Vec<AttemptSummary>, ApiError>;

    async fn fetch_attempt(
        &self,
        token: Option<&str>,
        attempt_id: &str,
    ) -> Result<AttemptDetail, ApiError>;
}

#[derive(Debug, Clone)]
pub struct QuizApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    answers: &'a AnswerSelection,
}

#[derive(Debug, Deserialize)]
struct CreateQuizResponse {
    quiz_id: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    score: u32,
    total: u32,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    attempts: Vec<AttemptSummary>,
}

#[derive(Debug, Deserialize)]
struct Ignored {}

impl QuizApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl QuizBackend for QuizApiClient {
    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/register/", None)
            .json(&Credentials { username, password });
        let _: Ignored = self.send(builder).await?;
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let builder = self
            .request(Method::POST, "/token/", None)
            .json(&Credentials { username, password });
        self.send(builder).await
    }

    async fn create_quiz(
        &self,
        token: Option<&str>,
        params: &QuizParams,
    ) -> Result<String, ApiError> {
        let builder = self
            .request(Method::POST, "/quiz/create/", token)
            .json(params);
        let created: CreateQuizResponse = self.send(builder).await?;
        Ok(created.quiz_id)
    }

    async fn fetch_quiz(
        &self,
        token: Option<&str>,
        quiz_id: &str,
    ) -> Result<QuizDetail, ApiError> {
        let builder = self.request(Method::GET, &format!("/quiz/{}/", quiz_id), token);
        self.send(builder).await
    }

    async fn submit_quiz(
        &self,
        token: Option<&str>,
        quiz_id: &str,
        answers: &AnswerSelection,
    ) -> Result<QuizResult, ApiError> {
        let builder = self
            .request(Method::POST, &format!("/quiz/{}/submit/", quiz_id), token)
            .json(&SubmitRequest { answers });
        let submitted: SubmitResponse = self.send(builder).await?;
        Ok(QuizResult {
            score: submitted.score,
            total: submitted.total,
        })
    }

    async fn fetch_history(&self, token: Option<&str>) -> Result<Vec<AttemptSummary>, ApiError> {
        let builder = self.request(Method::GET, "/quiz/history/", token);
        let history: HistoryResponse = self.send(builder).await?;
        Ok(history.attempts)
    }

    async fn fetch_attempt(
        &self,
        token: Option<&str>,
        attempt_id: &str,
    ) -> Result<AttemptDetail, ApiError> {
        let builder = self.request(Method::GET, &format!("/quiz/attempt/{}/", attempt_id), token);
        self.send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = QuizApiClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint("/quiz/history/"),
            "http://localhost:8000/api/quiz/history/"
        );
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let client = QuizApiClient::new("http://localhost:8000/api");

        let with_token = client
            .request(Method::GET, "/quiz/history/", Some("abc"))
            .build()
            .unwrap();
        assert_eq!(
            with_token.headers().get("authorization").unwrap(),
            "Bearer abc"
        );

        let without_token = client
            .request(Method::GET, "/quiz/history/", None)
            .build()
            .unwrap();
        assert!(without_token.headers().get("authorization").is_none());
    }

    #[test]
    fn test_submit_body_shape() {
        let mut answers = AnswerSelection::new();
        answers.set("q1", "Paris");
        let body = serde_json::to_value(SubmitRequest { answers: &answers }).unwrap();
        assert_eq!(body, serde_json::json!({"answers": {"q1": "Paris"}}));
    }

    #[test]
    fn test_history_response_without_attempts() {
        let history: HistoryResponse = serde_json::from_str("{}").unwrap();
        assert!(history.attempts.is_empty());
    }
}
