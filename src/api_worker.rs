use crate::api::QuizBackend;
use crate::logger;
use crate::models::{ApiRequest, ApiResponse};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

pub fn spawn_api_worker(
    backend: Arc<dyn QuizBackend>,
    api_tx: Sender<ApiResponse>,
    api_rx: Receiver<ApiRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("quiz-client::api_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Worker failed to start runtime: {}", e));
                    return;
                }
            };

            // Exits once the UI side drops its sender.
            while let Ok(request) = api_rx.recv() {
                logger::log(&format!("Worker received {:?} request", request.kind()));
                let response = rt.block_on(handle_request(backend.as_ref(), request));
                if api_tx.send(response).is_err() {
                    break;
                }
            }
            logger::log("Worker channel disconnected, exiting");
        })
}

pub async fn handle_request(backend: &dyn QuizBackend, request: ApiRequest) -> ApiResponse {
    let kind = request.kind();
    let outcome = match request {
        ApiRequest::Register { username, password } => backend
            .register(&username, &password)
            .await
            .map(|_| ApiResponse::Registered),
        ApiRequest::Login { username, password } => backend
            .login(&username, &password)
            .await
            .map(|tokens| ApiResponse::LoggedIn { username, tokens }),
        ApiRequest::CreateQuiz { token, params } => {
            let token = token.as_deref();
            match backend.create_quiz(token, &params).await {
                Ok(quiz_id) => backend
                    .fetch_quiz(token, &quiz_id)
                    .await
                    .map(ApiResponse::QuizReady),
                Err(e) => Err(e),
            }
        }
        ApiRequest::SubmitQuiz {
            token,
            quiz_id,
            answers,
        } => backend
            .submit_quiz(token.as_deref(), &quiz_id, &answers)
            .await
            .map(|result| ApiResponse::QuizSubmitted { quiz_id, result }),
        ApiRequest::FetchHistory { token } => backend
            .fetch_history(token.as_deref())
            .await
            .map(ApiResponse::History),
        ApiRequest::FetchAttempt { token, attempt_id } => backend
            .fetch_attempt(token.as_deref(), &attempt_id)
            .await
            .map(ApiResponse::Attempt),
    };

    match outcome {
        Ok(response) => response,
        Err(e) => {
            logger::log(&format!("Worker error for {:?}: {}", kind, e));
            ApiResponse::Failed {
                request: kind,
                message: e.to_string(),
            }
        }
    }
}
