pub mod client;
pub mod error;

// Public API exports
pub use client::{QuizApiClient, QuizBackend};
pub use error::ApiError;
