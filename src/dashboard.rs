use crate::models::{AttemptDetail, AttemptSummary};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub attempts: Vec<AttemptSummary>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Dashboard {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_history(&mut self, attempts: Vec<AttemptSummary>) {
        self.loading = false;
        self.attempts = attempts;
        self.selected = self.selected.min(self.attempts.len().saturating_sub(1));
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.attempts.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_attempt(&self) -> Option<&AttemptSummary> {
        self.attempts.get(self.selected)
    }
}

/// State of the attempt review screen.
#[derive(Debug, Clone, Default)]
pub struct AttemptView {
    pub attempt_id: Option<String>,
    pub detail: Option<AttemptDetail>,
    pub error: Option<String>,
    pub scroll: u16,
}

impl AttemptView {
    pub fn begin_load(&mut self, attempt_id: &str) {
        *self = Self {
            attempt_id: Some(attempt_id.to_string()),
            ..Self::default()
        };
    }

    pub fn is_loading(&self) -> bool {
        self.attempt_id.is_some() && self.detail.is_none() && self.error.is_none()
    }

    /// Ignores details for an attempt the user has since navigated away from.
    pub fn apply_detail(&mut self, detail: AttemptDetail) {
        if self.attempt_id.as_deref() == Some(detail.attempt_id.as_str()) {
            self.detail = Some(detail);
        }
    }

    pub fn apply_error(&mut self, message: String) {
        if self.is_loading() {
            self.error = Some(message);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
