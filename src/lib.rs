pub mod api;
pub mod api_worker;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod forms;
pub mod logger;
pub mod models;
pub mod retake;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use api::{QuizApiClient, QuizBackend};
pub use api_worker::spawn_api_worker;
pub use app::App;
pub use config::Config;
pub use error::{ApiError, AppError, ConfigError, FormError, RetakeError};
pub use models::{AppState, QuizEntry};
pub use retake::{HandoffChannel, load_retake_session, prepare_retake, score_locally};
pub use session::{QuizSession, SessionPhase, handle_quiz_input};
