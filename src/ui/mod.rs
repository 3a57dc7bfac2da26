mod attempt;
mod auth;
mod confirm;
mod dashboard;
pub mod layout;
mod quiz;
mod widgets;

pub use attempt::draw_attempt_detail;
pub use auth::{AuthScreen, draw_auth};
pub use confirm::{draw_leave_confirmation, draw_submit_confirmation};
pub use dashboard::draw_dashboard;
pub use layout::{calculate_dialog_area, calculate_screen_chunks};
pub use quiz::draw_quiz;
